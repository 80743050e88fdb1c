//! Scorekeeper CLI: registers a game and records the frame notations
//! given as arguments, logging each result and the final total.
//!
//! Uses `TENPIN_DATABASE_URL` when set, otherwise a throwaway in-memory
//! SQLite database.

use tracing::info;

use tenpin_backend::config::db::DbConfig;
use tenpin_backend::db::txn::with_txn;
use tenpin_backend::errors::domain::DomainError;
use tenpin_backend::services::scorekeeper;
use tenpin_backend::{connect_db, telemetry};

#[tokio::main]
async fn main() -> Result<(), DomainError> {
    telemetry::init_tracing();

    let notations: Vec<String> = std::env::args().skip(1).collect();

    let config = match DbConfig::from_env() {
        Ok(config) => config,
        Err(_) => {
            info!("TENPIN_DATABASE_URL not set, using in-memory sqlite");
            DbConfig::sqlite_memory()
        }
    };
    let db = connect_db(&config).await?;
    migration::migrate(&db).await?;

    let total = with_txn(&db, |txn| {
        Box::pin(async move {
            let game = scorekeeper::register_game(txn).await?;
            for notation in &notations {
                let result = scorekeeper::record_frame(txn, &game.id, notation).await?;
                info!(
                    frame_no = result.frame_no,
                    frame_score = ?result.frame_score,
                    running_total = ?result.running_total,
                    "frame recorded"
                );
            }
            scorekeeper::game_total(txn, &game.id).await
        })
    })
    .await?;

    info!(game_id = %total.game_id, total_score = ?total.total_score, "game total");
    Ok(())
}
