//! inugohan library
//!
//! Core calculation and persistence for the dog meal nutrition calculator:
//! weight-derived requirements, recipe summarization against the embedded
//! ingredient table, radar chart output and the settings store.

pub mod chart;
pub mod db;
pub mod models;
pub mod nutrition;
pub mod report;
