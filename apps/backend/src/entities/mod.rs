//! SeaORM entity models for the frame store.

pub mod frames;
pub mod games;
