//! Universal prediction engine.
//!
//! One engine for every sport: look up the market, resolve both sides in
//! the league roster, run the D0–D7 scorers, blend, then derive pick,
//! confidence and verdict.

use std::sync::Arc;

use chrono::Utc;
use futures::future::join_all;
use tracing::debug;

use super::reasoning::build_reasoning;
use crate::config::EngineConfig;
use crate::leagues;
use crate::providers::fallback::fetch_or_fallback;
use crate::providers::polymarket::MarketLookup;
use crate::rosters;
use crate::scoring::{default_scorers, DimensionScorer, GameContext};
use crate::types::{Competitor, Fixture, MarketOdds, Prediction, Verdict};

pub struct UniversalPredictionEngine {
    cfg: EngineConfig,
    scorers: Vec<Box<dyn DimensionScorer>>,
    markets: Arc<dyn MarketLookup>,
}

impl UniversalPredictionEngine {
    pub fn new(cfg: EngineConfig, markets: Arc<dyn MarketLookup>) -> Self {
        Self::with_scorers(cfg, markets, default_scorers())
    }

    pub fn with_scorers(
        cfg: EngineConfig,
        markets: Arc<dyn MarketLookup>,
        scorers: Vec<Box<dyn DimensionScorer>>,
    ) -> Self {
        Self { cfg, scorers, markets }
    }

    /// Analyse a single fixture. Never fails: a market lookup error just
    /// means no market.
    pub async fn analyze_game(&self, fixture: &Fixture) -> Prediction {
        let market = fetch_or_fallback("polymarket", self.markets.find_market(fixture), |_| Ok(None))
            .await
            .ok()
            .and_then(|sourced| sourced.into_inner());
        self.score_fixture(fixture, market)
    }

    /// Analyse a slate concurrently, preserving order.
    pub async fn analyze_slate(&self, fixtures: &[Fixture]) -> Vec<Prediction> {
        join_all(fixtures.iter().map(|f| self.analyze_game(f))).await
    }

    /// Score a fixture against an already-resolved market.
    pub fn score_fixture(&self, fixture: &Fixture, market: Option<MarketOdds>) -> Prediction {
        let (home, away) = resolve_sides(fixture);
        let ctx = GameContext {
            fixture,
            home,
            away,
            market: market.as_ref(),
        };

        let dimensions: Vec<_> = self.scorers.iter().map(|s| s.score(&ctx)).collect();
        let p = self.cfg.weights.blend(&dimensions);

        let home_pick = p >= 0.5;
        let (pick, other) = if home_pick {
            (fixture.home.as_str(), fixture.away.as_str())
        } else {
            (fixture.away.as_str(), fixture.home.as_str())
        };
        let pick_p = if home_pick { p } else { 1.0 - p };

        let unavailable = dimensions.iter().filter(|d| !d.available).count();
        let confidence = self.confidence(p, unavailable);
        let verdict = self.verdict(confidence);
        let verdict_line = format!("{verdict}: {pick} over {other} ({confidence:.1}%)");

        let market_pick = market.as_ref().and_then(|m| m.implied_probability_for(pick));
        let market_efficiency = market_pick.map(|m| 1.0 - (pick_p - m).abs());
        let market_edge = market_pick.map(|m| pick_p - m);

        let reasoning = build_reasoning(fixture, pick, &dimensions, market_edge);

        debug!(
            fixture = %fixture.id,
            p_home = p,
            confidence,
            unavailable,
            "Scored fixture"
        );

        Prediction {
            fixture: fixture.clone(),
            home_win_probability: p,
            pick: pick.to_string(),
            confidence,
            verdict,
            verdict_line,
            market_efficiency,
            market_edge,
            market,
            dimensions,
            reasoning,
            generated_at: Utc::now(),
        }
    }

    /// `50 + |p − 0.5|·100`, minus the missing-data penalty, clamped last.
    pub fn confidence(&self, p: f64, unavailable: usize) -> f64 {
        let raw = 50.0 + (p - 0.5).abs() * 100.0
            - self.cfg.missing_data_penalty * unavailable as f64;
        raw.clamp(self.cfg.confidence_floor, self.cfg.confidence_ceiling)
    }

    pub fn verdict(&self, confidence: f64) -> Verdict {
        if confidence >= self.cfg.strong_threshold {
            Verdict::Strong
        } else if confidence >= self.cfg.lean_threshold {
            Verdict::Lean
        } else {
            Verdict::TossUp
        }
    }
}

fn resolve_sides(fixture: &Fixture) -> (Option<&'static Competitor>, Option<&'static Competitor>) {
    match leagues::league(&fixture.league) {
        Ok(league) => (
            rosters::find(league.roster, &fixture.home),
            rosters::find(league.roster, &fixture.away),
        ),
        Err(e) => {
            debug!(fixture = %fixture.id, error = %e, "No roster for fixture");
            (None, None)
        }
    }
}
