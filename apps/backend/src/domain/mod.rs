//! Domain layer: pure scoring logic, no storage or I/O.

pub mod frames;
pub mod notation;
pub mod parsing;
pub mod scoring;

#[cfg(test)]
mod tests_notation;
#[cfg(test)]
mod tests_parsing;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use frames::{Attempts, FrameState, Outcome};
pub use parsing::parse_notation;
pub use scoring::{score_append, AppendOutcome, Lookback, ResolvedFrame};
