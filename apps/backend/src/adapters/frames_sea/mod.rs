//! SeaORM adapter for the frames repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, Order,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::entities::frames;

pub mod dto;

pub use dto::{FrameCreate, FrameScoreUpdate};

/// Create a frame row. Score and running total are null until the engine
/// resolves them.
pub async fn create_frame(
    txn: &DatabaseTransaction,
    dto: FrameCreate,
) -> Result<frames::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let frame = frames::ActiveModel {
        id: sea_orm::NotSet,
        game_id: Set(dto.game_id),
        frame_no: Set(dto.frame_no),
        frame_version: Set(dto.frame_version),
        first_attempt: Set(dto.first_attempt),
        second_attempt: Set(dto.second_attempt),
        third_attempt: Set(dto.third_attempt),
        frame_score: Set(None),
        running_total: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };

    frame.insert(txn).await
}

/// Fill in a resolved frame's score and running total. Attempts are
/// immutable; this is the only mutation a frame row ever sees.
pub async fn update_score(
    txn: &DatabaseTransaction,
    dto: FrameScoreUpdate,
) -> Result<frames::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let frame = frames::ActiveModel {
        id: Set(dto.frame_id),
        frame_score: Set(Some(dto.frame_score)),
        running_total: Set(Some(dto.running_total)),
        updated_at: Set(now),
        ..Default::default()
    };

    frame.update(txn).await
}

/// Highest frame number recorded for a game, if any.
pub async fn max_frame_no<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<Option<i16>, sea_orm::DbErr> {
    let max: Option<Option<i16>> = frames::Entity::find()
        .filter(frames::Column::GameId.eq(game_id))
        .select_only()
        .column_as(frames::Column::FrameNo.max(), "max_frame_no")
        .into_tuple()
        .one(conn)
        .await?;
    Ok(max.flatten())
}

/// Highest version recorded for a frame number, if any.
pub async fn max_version<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
    frame_no: i16,
) -> Result<Option<i16>, sea_orm::DbErr> {
    let max: Option<Option<i16>> = frames::Entity::find()
        .filter(frames::Column::GameId.eq(game_id))
        .filter(frames::Column::FrameNo.eq(frame_no))
        .select_only()
        .column_as(frames::Column::FrameVersion.max(), "max_frame_version")
        .into_tuple()
        .one(conn)
        .await?;
    Ok(max.flatten())
}

/// All frames for a game, ascending by frame number, collapsed to the
/// highest version per number. Superseded versions stay on disk but are
/// invisible to the active session.
pub async fn ordered_frames<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<Vec<frames::Model>, sea_orm::DbErr> {
    let rows = frames::Entity::find()
        .filter(frames::Column::GameId.eq(game_id))
        .order_by(frames::Column::FrameNo, Order::Asc)
        .order_by(frames::Column::FrameVersion, Order::Asc)
        .all(conn)
        .await?;

    let mut active: Vec<frames::Model> = Vec::with_capacity(rows.len());
    for row in rows {
        if let Some(last) = active.last_mut() {
            if last.frame_no == row.frame_no {
                *last = row;
                continue;
            }
        }
        active.push(row);
    }
    Ok(active)
}
