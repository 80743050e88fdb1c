//! Frame repository functions for domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::frames_sea as frames_adapter;
use crate::domain::frames::{Attempts, FrameState, ALL_PINS};
use crate::entities::frames;
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Frame domain model: one stored row, the active version of its number.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub id: i64,
    pub game_id: String,
    pub frame_no: i16,
    pub frame_version: i16,
    pub attempts: Attempts,
    pub frame_score: Option<i16>,
    pub running_total: Option<i16>,
    pub created_at: time::OffsetDateTime,
}

impl Frame {
    /// Project this row into the engine's view of a frame.
    pub fn state(&self) -> FrameState {
        FrameState {
            frame_no: self.frame_no,
            attempts: self.attempts,
            frame_score: self.frame_score,
            running_total: self.running_total,
        }
    }
}

/// Data for creating a frame (reduces parameter count)
#[derive(Debug, Clone)]
pub struct FrameData {
    pub game_id: String,
    pub frame_no: i16,
    pub frame_version: i16,
    pub attempts: Attempts,
}

/// Create a frame row with null score/total
pub async fn create_frame(txn: &DatabaseTransaction, data: FrameData) -> Result<Frame, DomainError> {
    let dto = frames_adapter::FrameCreate {
        game_id: data.game_id,
        frame_no: data.frame_no,
        frame_version: data.frame_version,
        first_attempt: i16::from(data.attempts.first),
        second_attempt: i16::from(data.attempts.second),
        third_attempt: i16::from(data.attempts.third),
    };
    let frame = frames_adapter::create_frame(txn, dto).await?;
    Frame::try_from(frame)
}

/// Fill in a resolved frame's score and running total
pub async fn update_score(
    txn: &DatabaseTransaction,
    frame_id: i64,
    frame_score: i16,
    running_total: i16,
) -> Result<Frame, DomainError> {
    let dto = frames_adapter::FrameScoreUpdate {
        frame_id,
        frame_score,
        running_total,
    };
    let frame = frames_adapter::update_score(txn, dto).await?;
    Frame::try_from(frame)
}

/// Highest frame number recorded for a game
pub async fn max_frame_no<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<Option<i16>, DomainError> {
    Ok(frames_adapter::max_frame_no(conn, game_id).await?)
}

/// Highest version recorded for a frame number
pub async fn max_version<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
    frame_no: i16,
) -> Result<Option<i16>, DomainError> {
    Ok(frames_adapter::max_version(conn, game_id, frame_no).await?)
}

/// Active frames for a game, ascending by frame number
pub async fn ordered_frames<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<Vec<Frame>, DomainError> {
    let frames = frames_adapter::ordered_frames(conn, game_id).await?;
    frames.into_iter().map(Frame::try_from).collect()
}

// Conversions between SeaORM models and domain models

/// A stored attempt must be a pin count 0..=10; anything else means the
/// row was written outside this crate's invariants.
fn attempt_pins(value: i16) -> Result<u8, DomainError> {
    u8::try_from(value)
        .ok()
        .filter(|pins| *pins <= ALL_PINS)
        .ok_or_else(|| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("stored attempt {value} is not a pin count"),
            )
        })
}

impl TryFrom<frames::Model> for Frame {
    type Error = DomainError;

    fn try_from(model: frames::Model) -> Result<Self, Self::Error> {
        let attempts = Attempts::new(
            attempt_pins(model.first_attempt)?,
            attempt_pins(model.second_attempt)?,
            attempt_pins(model.third_attempt)?,
        );
        Ok(Self {
            id: model.id,
            game_id: model.game_id,
            frame_no: model.frame_no,
            frame_version: model.frame_version,
            attempts,
            frame_score: model.frame_score,
            running_total: model.running_total,
            created_at: model.created_at,
        })
    }
}
