//! Deterministic in-memory feeds for integration testing.
//!
//! `MockFeed` stands in for a live fixture source and can be switched into
//! a failing state; `StaticMarkets` answers market lookups from a fixed list.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use rust_decimal_macros::dec;

use sportsline::providers::polymarket::MarketLookup;
use sportsline::providers::FixtureProvider;
use sportsline::types::{DataOrigin, Fixture, FixtureStatus, League, MarketOdds};

/// A fake live feed serving a fixed NBA slate.
#[derive(Clone)]
pub struct MockFeed {
    fixtures: Vec<Fixture>,
    /// If set, every fetch fails with this message.
    force_error: Arc<Mutex<Option<String>>>,
    calls: Arc<AtomicUsize>,
}

impl MockFeed {
    pub fn new() -> Self {
        Self {
            fixtures: Self::default_fixtures(),
            force_error: Arc::new(Mutex::new(None)),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn set_error(&self, msg: &str) {
        *self.force_error.lock().unwrap() = Some(msg.to_string());
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn default_fixtures() -> Vec<Fixture> {
        let start = Utc.with_ymd_and_hms(2025, 3, 1, 19, 30, 0).unwrap();
        vec![
            fixture("401", "Boston Celtics", "Miami Heat", "TD Garden", start, "44-17", "29-31"),
            fixture(
                "402",
                "Los Angeles Lakers",
                "Denver Nuggets",
                "Crypto.com Arena",
                start + Duration::hours(3),
                "36-24",
                "40-22",
            ),
        ]
    }
}

fn fixture(
    id: &str,
    home: &str,
    away: &str,
    venue: &str,
    start_time: chrono::DateTime<Utc>,
    home_record: &str,
    away_record: &str,
) -> Fixture {
    Fixture {
        id: format!("nba-espn-{id}"),
        league: "nba".into(),
        sport: sportsline::types::Sport::Basketball,
        home: home.into(),
        away: away.into(),
        venue: venue.into(),
        start_time,
        status: FixtureStatus::Scheduled,
        home_record: Some(home_record.into()),
        away_record: Some(away_record.into()),
        origin: DataOrigin::Live { source: "espn".into() },
    }
}

#[async_trait]
impl FixtureProvider for MockFeed {
    fn name(&self) -> &'static str {
        "espn"
    }

    async fn fetch_fixtures(&self, league: &League) -> Result<Vec<Fixture>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(msg) = self.force_error.lock().unwrap().clone() {
            return Err(anyhow!(msg));
        }
        Ok(self
            .fixtures
            .iter()
            .filter(|f| f.league == league.id)
            .cloned()
            .collect())
    }
}

/// Market lookup backed by a fixed list, matched on both team names.
pub struct StaticMarkets {
    markets: Vec<(String, String, MarketOdds)>,
}

impl StaticMarkets {
    /// One Yes/No market on Celtics beating the Heat at 0.75.
    pub fn celtics_heat() -> Self {
        let odds = MarketOdds {
            market_id: "0xceltics".into(),
            question: "Will the Boston Celtics beat the Miami Heat?".into(),
            yes_price: dec!(0.75),
            no_price: dec!(0.25),
            yes_side: "Boston Celtics".into(),
            volume: 50_000.0,
            url: "https://polymarket.com/event/celtics-heat".into(),
        };
        Self {
            markets: vec![("Boston Celtics".into(), "Miami Heat".into(), odds)],
        }
    }
}

#[async_trait]
impl MarketLookup for StaticMarkets {
    async fn find_market(&self, fixture: &Fixture) -> Result<Option<MarketOdds>> {
        Ok(self
            .markets
            .iter()
            .find(|(h, a, _)| *h == fixture.home && *a == fixture.away)
            .map(|(_, _, odds)| odds.clone()))
    }
}
