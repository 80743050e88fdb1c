#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod db;
pub mod domain;
pub mod entities;
pub mod errors;
pub mod infra;
pub mod repos;
pub mod services;
pub mod telemetry;
pub mod utils;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use db::txn::with_txn;
pub use errors::domain::DomainError;
pub use errors::error_code::ErrorCode;
pub use infra::db::connect_db;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
