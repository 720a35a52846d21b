//! Database module
//!
//! SQLite-backed local key/value store and its migrations.

pub mod connection;
pub mod migrations;

pub use connection::{Database, DbError, DbResult};
