//! Synthetic fixture slates.
//!
//! Pairs roster entries at random to fabricate an upcoming slate. Used for
//! leagues with no live feed and as the fallback when a live feed fails.
//! With a configured seed the output depends only on the seed, the anchor
//! time and the league.

use std::collections::BTreeMap;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::FixtureProvider;
use crate::rosters;
use crate::scoring::hash::stable_seed;
use crate::types::{Competitor, DataOrigin, Fixture, FixtureStatus, League, Sport, SportsError};

const NEUTRAL_VENUE: &str = "Neutral venue";

#[derive(Debug, Clone)]
pub struct SyntheticProvider {
    seed: Option<u64>,
    per_league: usize,
    /// Start times are offset from this; today 00:00 UTC when unset.
    anchor: Option<DateTime<Utc>>,
}

impl SyntheticProvider {
    pub fn new(seed: Option<u64>, per_league: usize) -> Self {
        Self { seed, per_league, anchor: None }
    }

    /// Pin the anchor time so slates are reproducible across days.
    pub fn with_anchor(mut self, anchor: DateTime<Utc>) -> Self {
        self.anchor = Some(anchor);
        self
    }

    /// Build a slate of at most `per_league` fixtures for `league`.
    pub fn generate(&self, league: &League) -> Result<Vec<Fixture>, SportsError> {
        rosters::validate_roster(league.id, league.roster)?;

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed ^ stable_seed(&[league.id])),
            None => StdRng::from_entropy(),
        };
        let anchor = self.anchor.unwrap_or_else(start_of_today);

        let mut pairs = pair_up(league, &mut rng);
        pairs.truncate(self.per_league);

        let fixtures: Vec<Fixture> = pairs
            .into_iter()
            .map(|(home, away)| build_fixture(league, home, away, anchor, &mut rng))
            .collect();

        debug!(league = league.id, count = fixtures.len(), "Generated synthetic slate");
        Ok(fixtures)
    }
}

#[async_trait]
impl FixtureProvider for SyntheticProvider {
    fn name(&self) -> &'static str {
        "synthetic"
    }

    async fn fetch_fixtures(&self, league: &League) -> Result<Vec<Fixture>> {
        Ok(self.generate(league)?)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn start_of_today() -> DateTime<Utc> {
    let now = Utc::now();
    now.date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|midnight| midnight.and_utc())
        .unwrap_or(now)
}

/// Shuffle the roster and pair it off without repeats.
///
/// Boxers are matched inside their division first; whoever is left over is
/// paired across divisions.
fn pair_up(league: &League, rng: &mut StdRng) -> Vec<(&'static Competitor, &'static Competitor)> {
    let mut pool: Vec<&'static Competitor> = league.roster.iter().collect();
    pool.shuffle(rng);

    if league.sport != Sport::Boxing {
        return pool.chunks_exact(2).map(|p| (p[0], p[1])).collect();
    }

    let mut divisions: BTreeMap<&str, Vec<&'static Competitor>> = BTreeMap::new();
    for boxer in pool {
        divisions
            .entry(boxer.division.unwrap_or(""))
            .or_default()
            .push(boxer);
    }

    let mut pairs = Vec::new();
    let mut leftovers = Vec::new();
    for (_, boxers) in divisions {
        let mut chunks = boxers.chunks_exact(2);
        pairs.extend(chunks.by_ref().map(|p| (p[0], p[1])));
        leftovers.extend_from_slice(chunks.remainder());
    }
    pairs.extend(leftovers.chunks_exact(2).map(|p| (p[0], p[1])));

    pairs.shuffle(rng);
    pairs
}

fn build_fixture(
    league: &League,
    home: &Competitor,
    away: &Competitor,
    anchor: DateTime<Utc>,
    rng: &mut StdRng,
) -> Fixture {
    let venue = if league.sport.is_team_sport() {
        home.venue.unwrap_or(NEUTRAL_VENUE)
    } else {
        league.venues.choose(rng).copied().unwrap_or(NEUTRAL_VENUE)
    };

    let start_time = anchor
        + Duration::days(rng.gen_range(1..=7))
        + Duration::hours(rng.gen_range(12..=21));

    let id = format!(
        "{}-syn-{:x}",
        league.id,
        stable_seed(&[league.id, home.name, away.name, &start_time.to_rfc3339()])
    );

    Fixture {
        id,
        league: league.id.to_string(),
        sport: league.sport,
        home: home.name.to_string(),
        away: away.name.to_string(),
        venue: venue.to_string(),
        start_time,
        status: FixtureStatus::Scheduled,
        home_record: None,
        away_record: None,
        origin: DataOrigin::Synthetic,
    }
}
