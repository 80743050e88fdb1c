//! Frame-level types: resolved attempts and outcome classification.

/// Highest frame number in a game.
pub const LAST_FRAME: i16 = 10;
/// Pins on a full rack.
pub const ALL_PINS: u8 = 10;

/// Fully resolved pin counts for one frame's balls.
///
/// Notation shorthand (`X`, `/`) is expanded by the parser before an
/// `Attempts` value exists; downstream code never sees markers, only
/// integers 0..=10. The third slot is 0 for frames 1-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attempts {
    pub first: u8,
    pub second: u8,
    pub third: u8,
}

impl Attempts {
    pub fn new(first: u8, second: u8, third: u8) -> Self {
        Self {
            first,
            second,
            third,
        }
    }

    /// Raw pins felled across every ball of this frame.
    pub fn pin_total(&self) -> i16 {
        i16::from(self.first) + i16::from(self.second) + i16::from(self.third)
    }

    pub fn outcome(&self) -> Outcome {
        if self.first == ALL_PINS {
            Outcome::Strike
        } else if self.first + self.second == ALL_PINS {
            Outcome::Spare
        } else {
            Outcome::Open
        }
    }
}

/// How a frame's first rack went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Strike,
    Spare,
    Open,
}

/// A frame as the scoring engine sees it: attempts plus whatever has
/// resolved so far. Attempts never change after creation; score and
/// running total are filled in exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameState {
    pub frame_no: i16,
    pub attempts: Attempts,
    pub frame_score: Option<i16>,
    pub running_total: Option<i16>,
}

impl FrameState {
    pub fn unresolved(frame_no: i16, attempts: Attempts) -> Self {
        Self {
            frame_no,
            attempts,
            frame_score: None,
            running_total: None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.frame_score.is_some()
    }
}
