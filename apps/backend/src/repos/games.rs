//! Game repository functions for domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::games_sea as games_adapter;
use crate::entities::games;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Game domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: String,
    pub created_at: time::OffsetDateTime,
}

/// Create a game with a caller-supplied opaque id
pub async fn create_game(txn: &DatabaseTransaction, id: &str) -> Result<Game, DomainError> {
    let game = games_adapter::create_game(txn, id).await?;
    Ok(Game::from(game))
}

/// Find a game by its opaque id
pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
) -> Result<Option<Game>, DomainError> {
    let game = games_adapter::find_by_id(conn, id).await?;
    Ok(game.map(Game::from))
}

/// Find a game or fail with the domain not-found error
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
) -> Result<Game, DomainError> {
    find_by_id(conn, id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Game, format!("no game was found for game id '{id}'"))
    })
}

// Conversions between SeaORM models and domain models

impl From<games::Model> for Game {
    fn from(model: games::Model) -> Self {
        Self {
            id: model.id,
            created_at: model.created_at,
        }
    }
}
