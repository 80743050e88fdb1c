#![allow(dead_code)]

// tests/common/mod.rs

use sea_orm::DatabaseConnection;
use tenpin_backend::config::db::DbConfig;
use tenpin_backend::db::txn_policy::{set_txn_policy, TxnPolicy};
use tenpin_backend::infra::db::connect_db;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,sqlx=warn,sea_orm=warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

// Each test gets a throwaway in-memory database, so commits are the
// default; flip per-binary via `TENPIN_TXN_POLICY=rollback`.
#[ctor::ctor]
fn init_txn_policy() {
    let policy = match std::env::var("TENPIN_TXN_POLICY")
        .unwrap_or_default()
        .to_lowercase()
        .as_str()
    {
        "rollback" => TxnPolicy::RollbackOnOk,
        _ => TxnPolicy::CommitOnOk,
    };
    set_txn_policy(policy);
}

/// Fresh in-memory SQLite database with the schema applied.
pub async fn fresh_db() -> DatabaseConnection {
    let db = connect_db(&DbConfig::sqlite_memory())
        .await
        .expect("connect in-memory sqlite");
    migration::migrate(&db).await.expect("apply migrations");
    db
}
