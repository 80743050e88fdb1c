//! SeaORM adapters: DbErr-level storage operations behind the repos.

pub mod frames_sea;
pub mod games_sea;
