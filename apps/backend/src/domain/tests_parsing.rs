use crate::domain::frames::Attempts;
use crate::domain::parsing::parse_notation;
use crate::errors::domain::{DomainError, ValidationKind};

fn kind_of(err: DomainError) -> ValidationKind {
    match err {
        DomainError::Validation(kind, _) => kind,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn strike_mid_game_expands_to_forced_zeros() {
    assert_eq!(parse_notation("X", 4).unwrap(), Attempts::new(10, 0, 0));
    assert_eq!(parse_notation("X", 1).unwrap(), Attempts::new(10, 0, 0));
    assert_eq!(parse_notation("X", 9).unwrap(), Attempts::new(10, 0, 0));
}

#[test]
fn spare_mid_game_completes_to_ten() {
    assert_eq!(parse_notation("7/", 3).unwrap(), Attempts::new(7, 3, 0));
    assert_eq!(parse_notation("0/", 5).unwrap(), Attempts::new(0, 10, 0));
}

#[test]
fn open_frame_is_position_independent() {
    assert_eq!(parse_notation("2-3", 1).unwrap(), Attempts::new(2, 3, 0));
    // an open tenth frame never earns a bonus third ball
    assert_eq!(parse_notation("2-3", 10).unwrap(), Attempts::new(2, 3, 0));
    assert_eq!(parse_notation("0-0", 10).unwrap(), Attempts::new(0, 0, 0));
}

#[test]
fn last_frame_strike_forms() {
    assert_eq!(
        parse_notation("X-X-X", 10).unwrap(),
        Attempts::new(10, 10, 10)
    );
    assert_eq!(
        parse_notation("X-X-9", 10).unwrap(),
        Attempts::new(10, 10, 9)
    );
    assert_eq!(parse_notation("X-7/", 10).unwrap(), Attempts::new(10, 7, 3));
    assert_eq!(parse_notation("X-2-3", 10).unwrap(), Attempts::new(10, 2, 3));
}

#[test]
fn last_frame_spare_forms() {
    assert_eq!(parse_notation("7/4", 10).unwrap(), Attempts::new(7, 3, 4));
    assert_eq!(parse_notation("7/X", 10).unwrap(), Attempts::new(7, 3, 10));
    assert_eq!(parse_notation("0/X", 10).unwrap(), Attempts::new(0, 10, 10));
}

#[test]
fn empty_notation_is_reported_distinctly() {
    assert_eq!(kind_of(parse_notation("", 3).unwrap_err()), ValidationKind::MissingNotation);
}

#[test]
fn two_token_strike_without_spare_marker_is_not_in_the_language() {
    // ambiguous: the third ball is unresolved, so the grammar never
    // admits it in the first place
    assert_eq!(
        kind_of(parse_notation("X-X", 10).unwrap_err()),
        ValidationKind::MalformedNotation
    );
}

#[test]
fn position_shape_mismatches() {
    // bare strike leaves frame 10's bonus balls unknown
    assert_eq!(kind_of(parse_notation("X", 10).unwrap_err()), ValidationKind::ShapeMismatch);
    // a tenth-frame spare requires the extra ball
    assert_eq!(kind_of(parse_notation("7/", 10).unwrap_err()), ValidationKind::ShapeMismatch);
    // bonus-ball forms are meaningless before frame 10
    assert_eq!(kind_of(parse_notation("X-X-X", 5).unwrap_err()), ValidationKind::ShapeMismatch);
    assert_eq!(kind_of(parse_notation("X-7/", 9).unwrap_err()), ValidationKind::ShapeMismatch);
    assert_eq!(kind_of(parse_notation("7/4", 5).unwrap_err()), ValidationKind::ShapeMismatch);
    assert_eq!(kind_of(parse_notation("7/X", 2).unwrap_err()), ValidationKind::ShapeMismatch);
    assert_eq!(kind_of(parse_notation("X-2-3", 4).unwrap_err()), ValidationKind::ShapeMismatch);
}

#[test]
fn rack_overflow_is_rejected() {
    // 9+9 pins on one rack is impossible without a spare marker
    assert_eq!(kind_of(parse_notation("9-9", 2).unwrap_err()), ValidationKind::PinCount);
    // a pair summing to exactly 10 must be written as a spare
    assert_eq!(kind_of(parse_notation("5-5", 2).unwrap_err()), ValidationKind::PinCount);
    // same rule for the rack after a tenth-frame strike
    assert_eq!(kind_of(parse_notation("X-9-9", 10).unwrap_err()), ValidationKind::PinCount);
}

#[test]
fn malformed_strings_fail_before_position_checks() {
    for raw in ["XX", "10-0", "7//", "5-"] {
        assert_eq!(
            kind_of(parse_notation(raw, 1).unwrap_err()),
            ValidationKind::MalformedNotation,
            "raw: {raw}"
        );
    }
}
