//! Retroactive scoring over a three-frame lookback window.
//!
//! A strike is worth 10 plus the next two balls and a spare 10 plus the
//! next ball, so appending frame N can resolve frames N-1 and N-2. The
//! window also carries N-3 because N-2's running total chains off it.
//! The engine is pure: the orchestrator fetches the window once and
//! persists the returned batch in one transaction.

use tracing::debug;

use super::frames::{Attempts, FrameState, Outcome, ALL_PINS, LAST_FRAME};

/// Latest-version frame states for the three frames preceding an append,
/// nearest first. Absent entries mean the game is too young to have them.
#[derive(Debug, Clone, Default)]
pub struct Lookback {
    pub prev: Option<FrameState>,
    pub prev2: Option<FrameState>,
    pub prev3: Option<FrameState>,
}

/// An earlier frame whose score this append fixed. Both values are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedFrame {
    pub frame_no: i16,
    pub frame_score: i16,
    pub running_total: i16,
}

/// Everything one append changed: the new frame's state plus zero, one,
/// or two earlier frames it resolved. Must be persisted as one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendOutcome {
    pub appended: FrameState,
    pub resolved: Vec<ResolvedFrame>,
}

fn base_total(frame: Option<&FrameState>) -> i16 {
    frame.and_then(|f| f.running_total).unwrap_or(0)
}

/// Score the append of frame `frame_no` with `attempts`, given the
/// lookback window. Already-resolved frames are never revised; resolution
/// runs oldest-first so running totals chain correctly.
pub fn score_append(frame_no: i16, attempts: Attempts, window: &Lookback) -> AppendOutcome {
    let mut resolved = Vec::new();
    let f1 = i16::from(attempts.first);
    let f2 = i16::from(attempts.second);

    // A strike two frames back is still pending only behind another
    // strike; its second bonus ball is this frame's first.
    let mut prev2 = window.prev2.clone();
    if let Some(p2) = prev2.as_mut() {
        if p2.attempts.outcome() == Outcome::Strike && !p2.is_resolved() {
            let score = 2 * i16::from(ALL_PINS) + f1;
            let total = base_total(window.prev3.as_ref()) + score;
            p2.frame_score = Some(score);
            p2.running_total = Some(total);
            resolved.push(ResolvedFrame {
                frame_no: p2.frame_no,
                frame_score: score,
                running_total: total,
            });
        }
    }

    let mut prev = window.prev.clone();
    if let Some(p) = prev.as_mut() {
        if !p.is_resolved() {
            let fixed = match p.attempts.outcome() {
                Outcome::Strike => {
                    // Needs both bonus balls. A strike in frames 1-9 only
                    // supplies its first; frame 10's second ball is always
                    // a real throw.
                    let both_balls_known =
                        frame_no == LAST_FRAME || attempts.outcome() != Outcome::Strike;
                    both_balls_known.then(|| i16::from(ALL_PINS) + f1 + f2)
                }
                Outcome::Spare => Some(i16::from(ALL_PINS) + f1),
                // Open frames resolve on creation and never get here.
                Outcome::Open => None,
            };
            if let Some(score) = fixed {
                let total = base_total(prev2.as_ref()) + score;
                p.frame_score = Some(score);
                p.running_total = Some(total);
                resolved.push(ResolvedFrame {
                    frame_no: p.frame_no,
                    frame_score: score,
                    running_total: total,
                });
            }
        }
    }

    // The new frame itself: frame 10 already has every ball it will ever
    // get; earlier frames resolve now only when open.
    let mut appended = FrameState::unresolved(frame_no, attempts);
    if frame_no == LAST_FRAME || attempts.outcome() == Outcome::Open {
        let score = attempts.pin_total();
        appended.frame_score = Some(score);
        appended.running_total = Some(base_total(prev.as_ref()) + score);
    }

    debug!(frame_no, fixups = resolved.len(), "scored append");
    AppendOutcome { appended, resolved }
}
