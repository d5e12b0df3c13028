//! SPORTSLINE: sports prediction board
//!
//! Library crate exposing all modules for use by integration tests
//! and the binary entry point.

pub mod cache;
pub mod config;
pub mod dashboard;
pub mod engine;
pub mod leagues;
pub mod providers;
pub mod rosters;
pub mod scoring;
pub mod storage;
pub mod types;
