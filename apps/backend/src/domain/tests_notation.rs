use crate::domain::notation::is_well_formed;

#[test]
fn accepts_every_surface_form() {
    let accepted = [
        "X", "X-X-X", "X-X-9", "X-X-0", "X-7/", "X-2-3", "7/", "0/", "7/X", "7/4", "0-0", "7-2",
        "9-0",
    ];
    for raw in accepted {
        assert!(is_well_formed(raw), "expected '{raw}' to be well-formed");
    }
}

#[test]
fn rejects_strings_outside_the_language() {
    let rejected = [
        "",
        "X-X",
        "X-X-",
        "X-X-X-X",
        "XX",
        "x",
        "10-0",
        "5-",
        "-5",
        "5--5",
        "7//",
        "/7",
        "7/X4",
        "X/",
        "X/7",
        "7 2",
        "7-2-3",
        "a-b",
        "X-a/",
        "7.2",
    ];
    for raw in rejected {
        assert!(!is_well_formed(raw), "expected '{raw}' to be rejected");
    }
}

#[test]
fn spare_marker_must_follow_a_digit() {
    // "X-X/" looks like a strike then a spare token but the second rack
    // cannot spare off a strike marker
    assert!(!is_well_formed("X-X/"));
}
