//! DTOs for the frames_sea adapter.

/// DTO for creating a frame row. Score and running total start null.
#[derive(Debug, Clone)]
pub struct FrameCreate {
    pub game_id: String,
    pub frame_no: i16,
    pub frame_version: i16,
    pub first_attempt: i16,
    pub second_attempt: i16,
    pub third_attempt: i16,
}

/// DTO for filling in a frame's resolved score and running total.
#[derive(Debug, Clone, Copy)]
pub struct FrameScoreUpdate {
    pub frame_id: i64,
    pub frame_score: i16,
    pub running_total: i16,
}
