//! Database connection bootstrap.

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::DbConfig;
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;

/// Connect to the configured database.
pub async fn connect_db(config: &DbConfig) -> Result<DatabaseConnection, DomainError> {
    let mut opts = ConnectOptions::new(config.url.clone());
    if config.is_sqlite_memory() {
        // more than one pooled connection would mean more than one
        // in-memory database
        opts.max_connections(1);
    } else {
        opts.max_connections(10);
    }
    opts.sqlx_logging(false);

    let db = Database::connect(opts).await.map_err(map_db_err)?;
    info!("database connected");
    Ok(db)
}
