//! Surface grammar for per-frame score notation.
//!
//! The complete accepted language, dash-separated unless noted:
//!
//! `X-X-X | X-X-<d> | X-<d>/ | X-<d>-<d> | X | <d>/X | <d>/<d> | <d>/ | <d>-<d>`
//!
//! where `<d>` is a single decimal digit 0-9 and `/` completes the prior
//! ball to 10. Anything outside this language is rejected before parsing.

/// Whether `raw` matches exactly one of the nine accepted surface forms.
///
/// This is the raw language membership test; position-dependent shape
/// checks (e.g. `"X"` alone is only meaningful outside frame 10) live in
/// the parser.
pub fn is_well_formed(raw: &str) -> bool {
    match raw.as_bytes() {
        [b'X'] => true,
        [b'X', b'-', b'X', b'-', b'X'] => true,
        [b'X', b'-', b'X', b'-', d] => d.is_ascii_digit(),
        [b'X', b'-', d, b'/'] => d.is_ascii_digit(),
        [b'X', b'-', d, b'-', e] => d.is_ascii_digit() && e.is_ascii_digit(),
        [d, b'/', b'X'] => d.is_ascii_digit(),
        [d, b'/', e] => d.is_ascii_digit() && e.is_ascii_digit(),
        [d, b'/'] => d.is_ascii_digit(),
        [d, b'-', e] => d.is_ascii_digit() && e.is_ascii_digit(),
        _ => false,
    }
}
