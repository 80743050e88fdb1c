use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Games {
    Table,
    Id,
    CreatedAt,
}

#[derive(Iden)]
enum Frames {
    Table,
    Id,
    GameId,
    FrameNo,
    FrameVersion,
    FirstAttempt,
    SecondAttempt,
    ThirdAttempt,
    FrameScore,
    RunningTotal,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Games::Id)
                            .string_len(16)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Games::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Frames::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Frames::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Frames::GameId).string_len(16).not_null())
                    .col(ColumnDef::new(Frames::FrameNo).small_integer().not_null())
                    .col(
                        ColumnDef::new(Frames::FrameVersion)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Frames::FirstAttempt)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Frames::SecondAttempt)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Frames::ThirdAttempt)
                            .small_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Frames::FrameScore).small_integer().null())
                    .col(ColumnDef::new(Frames::RunningTotal).small_integer().null())
                    .col(
                        ColumnDef::new(Frames::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Frames::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_frames_game")
                            .from(Frames::Table, Frames::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One row per (game, frame number, version); concurrent appends
        // racing on the same slot fail here instead of corrupting state.
        manager
            .create_index(
                Index::create()
                    .name("uq_frames_game_no_version")
                    .table(Frames::Table)
                    .col(Frames::GameId)
                    .col(Frames::FrameNo)
                    .col(Frames::FrameVersion)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_frames_game_no")
                    .table(Frames::Table)
                    .col(Frames::GameId)
                    .col(Frames::FrameNo)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Frames::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await
    }
}
