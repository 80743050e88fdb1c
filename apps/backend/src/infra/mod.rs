//! Infrastructure: connection bootstrap and DbErr translation.

pub mod db;
pub mod db_errors;
