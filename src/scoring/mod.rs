//! D0–D7 dimension scoring.
//!
//! Each scorer looks at one aspect of a fixture and returns a home-win lean
//! in [0, 1]. Scorers with no input return a neutral 0.5 flagged as
//! unavailable. The engine blends them with fixed `Weights`.

pub mod dimensions;
pub mod hash;

use serde::{Deserialize, Serialize};

use crate::types::{Competitor, Dimension, DimensionScore, Fixture, MarketOdds, SportsError};

// ---------------------------------------------------------------------------
// Context
// ---------------------------------------------------------------------------

/// Everything a scorer may look at for one fixture.
#[derive(Debug, Clone, Copy)]
pub struct GameContext<'a> {
    pub fixture: &'a Fixture,
    /// Roster entries, when the names resolve.
    pub home: Option<&'a Competitor>,
    pub away: Option<&'a Competitor>,
    pub market: Option<&'a MarketOdds>,
}

/// A single dimension scorer.
pub trait DimensionScorer: Send + Sync {
    fn dimension(&self) -> Dimension;

    fn score(&self, ctx: &GameContext<'_>) -> DimensionScore;
}

/// The eight standard scorers, in D0–D7 order.
pub fn default_scorers() -> Vec<Box<dyn DimensionScorer>> {
    vec![
        Box::new(dimensions::MarketScorer),
        Box::new(dimensions::FormScorer),
        Box::new(dimensions::RatingScorer),
        Box::new(dimensions::VenueScorer),
        Box::new(dimensions::HeadToHeadScorer),
        Box::new(dimensions::RecordScorer),
        Box::new(dimensions::SentimentScorer),
        Box::new(dimensions::ConsistencyScorer),
    ]
}

// ---------------------------------------------------------------------------
// Weights
// ---------------------------------------------------------------------------

/// Fixed blend weights for D0–D7. Normalised by their sum when applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub market: f64,
    pub form: f64,
    pub rating: f64,
    pub venue: f64,
    pub head_to_head: f64,
    pub record: f64,
    pub sentiment: f64,
    pub consistency: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            market: 0.20,
            form: 0.15,
            rating: 0.20,
            venue: 0.10,
            head_to_head: 0.10,
            record: 0.10,
            sentiment: 0.05,
            consistency: 0.10,
        }
    }
}

impl Weights {
    pub fn as_array(&self) -> [f64; 8] {
        [
            self.market,
            self.form,
            self.rating,
            self.venue,
            self.head_to_head,
            self.record,
            self.sentiment,
            self.consistency,
        ]
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        self.as_array()[dimension.index()]
    }

    pub fn total(&self) -> f64 {
        self.as_array().iter().sum()
    }

    pub fn validate(&self) -> Result<(), SportsError> {
        for (dimension, w) in Dimension::ALL.iter().zip(self.as_array()) {
            if !w.is_finite() || w < 0.0 {
                return Err(SportsError::Config(format!(
                    "weight for {dimension} must be a non-negative number, got {w}"
                )));
            }
        }
        if self.total() <= 0.0 {
            return Err(SportsError::Config("engine weights sum to zero".into()));
        }
        Ok(())
    }

    /// Weighted average of the scores, normalised by the weight sum.
    pub fn blend(&self, scores: &[DimensionScore]) -> f64 {
        let mut weighted = 0.0;
        let mut total = 0.0;
        for s in scores {
            let w = self.get(s.dimension);
            weighted += w * s.value;
            total += w;
        }
        if total <= 0.0 {
            return 0.5;
        }
        (weighted / total).clamp(0.0, 1.0)
    }
}
