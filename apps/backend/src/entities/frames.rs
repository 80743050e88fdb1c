use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// One recorded frame of a game. Attempts are always fully resolved pin
/// counts (notation shorthand is expanded before storage); `frame_score`
/// and `running_total` stay null until later frames supply the bonus
/// balls they wait on.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "frames")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "game_id")]
    pub game_id: String,
    #[sea_orm(column_name = "frame_no")]
    pub frame_no: i16,
    #[sea_orm(column_name = "frame_version")]
    pub frame_version: i16,
    #[sea_orm(column_name = "first_attempt")]
    pub first_attempt: i16,
    #[sea_orm(column_name = "second_attempt")]
    pub second_attempt: i16,
    #[sea_orm(column_name = "third_attempt")]
    pub third_attempt: i16,
    #[sea_orm(column_name = "frame_score")]
    pub frame_score: Option<i16>,
    #[sea_orm(column_name = "running_total")]
    pub running_total: Option<i16>,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::games::Entity",
        from = "Column::GameId",
        to = "super::games::Column::Id"
    )]
    Game,
}

impl Related<super::games::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Game.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
