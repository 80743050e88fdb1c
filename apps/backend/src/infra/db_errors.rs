//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return `sea_orm::DbErr`; repos bubble it through the
//! `From<DbErr> for DomainError` impl below so services only ever see
//! `DomainError`.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};

/// Unique-violation messages for the frames slot index.
///
/// SQLite reports "UNIQUE constraint failed: frames.game_id, ...";
/// Postgres reports the constraint name.
fn is_frame_slot_violation(msg: &str) -> bool {
    msg.contains("uq_frames_game_no_version") || msg.contains("UNIQUE constraint failed: frames.")
}

/// Translate a `DbErr` into a `DomainError`.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let msg = e.to_string();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            DomainError::not_found(NotFoundKind::Other("record".into()), "record not found")
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            error!(error = %msg, "database unavailable");
            DomainError::infra(InfraErrorKind::DbUnavailable, "database unavailable")
        }
        _ if is_frame_slot_violation(&msg) => {
            // Two appends raced on the same (game, frame number, version)
            // slot; the loser lands here. Callers decide whether to retry
            // with a fresh read.
            warn!(error = %msg, "frame version conflict");
            DomainError::conflict(
                ConflictKind::FrameVersion,
                "frame was recorded concurrently; re-read the game and retry",
            )
        }
        _ => {
            error!(error = %msg, "database error");
            DomainError::infra(InfraErrorKind::Other("DbErr".into()), msg)
        }
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e)
    }
}
