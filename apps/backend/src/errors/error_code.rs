//! Error codes for the tenpin backend API.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! exposed to callers. Add new codes here; never pass ad-hoc strings as
//! error codes.

use core::fmt;

use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};

/// Centralized error codes for the tenpin backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Score submission validation
    /// Raw string is not in the accepted notation language
    MalformedNotation,
    /// Empty score submission
    MissingNotation,
    /// Notation has the wrong shape for the target frame position
    ShapeMismatch,
    /// Two balls on one rack claim more than the rack holds
    InvalidPinCount,
    /// Game already has its tenth frame
    GameComplete,
    /// General validation error
    ValidationError,

    // Resource not found
    /// Game not found
    GameNotFound,
    /// General not found error
    NotFound,

    // Conflicts
    /// Lost race on a (game, frame number, version) slot
    FrameVersionConflict,
    /// General conflict error
    Conflict,

    // Infrastructure
    /// Database operation timed out
    DbTimeout,
    /// Database unavailable
    DbUnavailable,
    /// Stored state violates a scoring invariant
    DataCorruption,
    /// Configuration error
    ConfigError,
    /// General internal error
    Internal,
}

impl ErrorCode {
    /// Canonical string for this code.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MalformedNotation => "MALFORMED_NOTATION",
            ErrorCode::MissingNotation => "MISSING_NOTATION",
            ErrorCode::ShapeMismatch => "SHAPE_MISMATCH",
            ErrorCode::InvalidPinCount => "INVALID_PIN_COUNT",
            ErrorCode::GameComplete => "GAME_COMPLETE",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::GameNotFound => "GAME_NOT_FOUND",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::FrameVersionConflict => "FRAME_VERSION_CONFLICT",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::DbTimeout => "DB_TIMEOUT",
            ErrorCode::DbUnavailable => "DB_UNAVAILABLE",
            ErrorCode::DataCorruption => "DATA_CORRUPTION",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&DomainError> for ErrorCode {
    fn from(err: &DomainError) -> Self {
        match err {
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::MalformedNotation => ErrorCode::MalformedNotation,
                ValidationKind::MissingNotation => ErrorCode::MissingNotation,
                ValidationKind::ShapeMismatch => ErrorCode::ShapeMismatch,
                ValidationKind::PinCount => ErrorCode::InvalidPinCount,
                ValidationKind::GameComplete => ErrorCode::GameComplete,
                ValidationKind::Other(_) => ErrorCode::ValidationError,
            },
            DomainError::NotFound(kind, _) => match kind {
                NotFoundKind::Game => ErrorCode::GameNotFound,
                NotFoundKind::Other(_) => ErrorCode::NotFound,
            },
            DomainError::Conflict(kind, _) => match kind {
                ConflictKind::FrameVersion => ErrorCode::FrameVersionConflict,
                ConflictKind::Other(_) => ErrorCode::Conflict,
            },
            DomainError::Infra(kind, _) => match kind {
                InfraErrorKind::Timeout => ErrorCode::DbTimeout,
                InfraErrorKind::DbUnavailable => ErrorCode::DbUnavailable,
                InfraErrorKind::DataCorruption => ErrorCode::DataCorruption,
                InfraErrorKind::Config => ErrorCode::ConfigError,
                InfraErrorKind::Other(_) => ErrorCode::Internal,
            },
        }
    }
}
