//! SeaORM adapter for the games repository.

use sea_orm::{ActiveModelTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, Set};

use crate::entities::games;

/// Create a game row with a caller-supplied opaque id.
pub async fn create_game(
    txn: &DatabaseTransaction,
    id: &str,
) -> Result<games::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let game = games::ActiveModel {
        id: Set(id.to_owned()),
        created_at: Set(now),
    };

    game.insert(txn).await
}

/// Find a game by its opaque id.
pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find_by_id(id.to_owned()).one(conn).await
}
