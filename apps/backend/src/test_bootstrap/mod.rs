//! Bootstrap helpers for unit tests.
