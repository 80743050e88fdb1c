//! Configuration.

pub mod db;
