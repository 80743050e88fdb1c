pub use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DatabaseConnection;

mod m20260115_000001_init; // keep filename + module name in sync

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20260115_000001_init::Migration)]
    }
}

/// Bring the schema fully up to date, logging what was applied.
/// Used by both the CLI and tests.
pub async fn migrate(db: &DatabaseConnection) -> Result<(), DbErr> {
    let pending = Migrator::get_pending_migrations(db).await?.len();
    tracing::info!(pending, "applying migrations");
    Migrator::up(db, None).await?;
    tracing::info!("migrations applied");
    Ok(())
}
