//! Database configuration.

use std::env;

use crate::errors::domain::{DomainError, InfraErrorKind};

/// Environment variable holding the database URL.
pub const ENV_DATABASE_URL: &str = "TENPIN_DATABASE_URL";

/// In-memory SQLite test profile. The pool must be capped at one
/// connection so every handle sees the same database.
pub const SQLITE_MEMORY_URL: &str = "sqlite::memory:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub url: String,
}

impl DbConfig {
    /// Read the database URL from the environment.
    pub fn from_env() -> Result<Self, DomainError> {
        let url = env::var(ENV_DATABASE_URL).map_err(|_| {
            DomainError::infra(
                InfraErrorKind::Config,
                format!("{ENV_DATABASE_URL} is not set"),
            )
        })?;
        Ok(Self { url })
    }

    /// Throwaway in-memory SQLite database, used by tests.
    pub fn sqlite_memory() -> Self {
        Self {
            url: SQLITE_MEMORY_URL.to_owned(),
        }
    }

    pub fn is_sqlite_memory(&self) -> bool {
        self.url.starts_with("sqlite::memory:")
    }
}
