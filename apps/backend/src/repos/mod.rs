//! Repository functions exposing domain models over the SeaORM adapters.

pub mod frames;
pub mod games;
