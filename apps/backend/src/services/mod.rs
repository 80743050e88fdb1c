//! Services: orchestration between the pure domain and the frame store.

pub mod scorekeeper;
