//! Prediction engine and the league refresh cycle.

pub mod board;
pub mod predictor;
pub mod reasoning;

pub use board::LeagueBoard;
pub use predictor::UniversalPredictionEngine;
