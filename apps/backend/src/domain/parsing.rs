//! Notation parsing: grammar-accepted strings to resolved attempt triples.
//!
//! Expansion is frame-position aware: only frame 10 carries bonus balls,
//! and only when it opens with a strike or ends on a spare. An open last
//! frame never earns a third ball.

use super::frames::{Attempts, ALL_PINS, LAST_FRAME};
use super::notation;
use crate::errors::domain::{DomainError, ValidationKind};

fn digit(b: u8) -> u8 {
    b - b'0'
}

fn shape_mismatch(raw: &str, frame_no: i16) -> DomainError {
    DomainError::validation(
        ValidationKind::ShapeMismatch,
        format!("score '{raw}' has the wrong shape for frame {frame_no}"),
    )
}

/// Two balls on one rack cannot fell more than 9 pins without a spare
/// marker; `==` 10 must be written as a spare. Tighter than the surface
/// grammar, which admits pairs like `5-5` and `9-9`: they are rejected
/// here rather than scored as open frames.
fn check_rack(first: u8, second: u8, raw: &str) -> Result<(), DomainError> {
    if first + second >= ALL_PINS {
        return Err(DomainError::validation(
            ValidationKind::PinCount,
            format!("score '{raw}' claims more pins than one rack holds"),
        ));
    }
    Ok(())
}

/// Convert a raw score string into the resolved attempt triple for
/// `frame_no`. Fails without producing a partial triple.
pub fn parse_notation(raw: &str, frame_no: i16) -> Result<Attempts, DomainError> {
    if raw.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::MissingNotation,
            format!("missing score for frame {frame_no}"),
        ));
    }
    if !notation::is_well_formed(raw) {
        return Err(DomainError::validation(
            ValidationKind::MalformedNotation,
            format!("score format '{raw}' is invalid"),
        ));
    }

    let last = frame_no == LAST_FRAME;
    match raw.as_bytes() {
        // Strike forms
        [b'X'] if !last => Ok(Attempts::new(ALL_PINS, 0, 0)),
        [b'X', b'-', b'X', b'-', b'X'] if last => Ok(Attempts::new(ALL_PINS, ALL_PINS, ALL_PINS)),
        [b'X', b'-', b'X', b'-', d] if last => Ok(Attempts::new(ALL_PINS, ALL_PINS, digit(*d))),
        [b'X', b'-', d, b'/'] if last => {
            let d = digit(*d);
            Ok(Attempts::new(ALL_PINS, d, ALL_PINS - d))
        }
        [b'X', b'-', d, b'-', e] if last => {
            let (d, e) = (digit(*d), digit(*e));
            check_rack(d, e, raw)?;
            Ok(Attempts::new(ALL_PINS, d, e))
        }
        // Spare forms
        [d, b'/'] if !last => {
            let d = digit(*d);
            Ok(Attempts::new(d, ALL_PINS - d, 0))
        }
        [d, b'/', b'X'] if last => {
            let d = digit(*d);
            Ok(Attempts::new(d, ALL_PINS - d, ALL_PINS))
        }
        [d, b'/', e] if last => {
            let d = digit(*d);
            Ok(Attempts::new(d, ALL_PINS - d, digit(*e)))
        }
        // Open frame, any position; frame 10 gets no bonus third ball
        [d, b'-', e] => {
            let (d, e) = (digit(*d), digit(*e));
            check_rack(d, e, raw)?;
            Ok(Attempts::new(d, e, 0))
        }
        // Grammatical but wrong for this frame position
        _ => Err(shape_mismatch(raw, frame_no)),
    }
}
