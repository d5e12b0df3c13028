//! ESPN public scoreboard feed.
//!
//! `https://site.api.espn.com/apis/site/v2/sports/{path}/scoreboard`
//! No key required. Each event carries one competition with a home and an
//! away competitor, a venue and (for team sports) season records.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use tracing::{debug, info};

use super::http::JsonClient;
use super::FixtureProvider;
use crate::types::{DataOrigin, Fixture, FixtureStatus, League, SportsError};

const ESPN_API_URL: &str = "https://site.api.espn.com/apis/site/v2/sports";
const SOURCE: &str = "espn";

// ---------------------------------------------------------------------------
// Scoreboard response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct Scoreboard {
    #[serde(default)]
    pub events: Vec<EspnEvent>,
}

#[derive(Debug, Deserialize)]
pub struct EspnEvent {
    pub id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub competitions: Vec<EspnCompetition>,
    #[serde(default)]
    pub status: Option<EspnStatus>,
}

#[derive(Debug, Deserialize)]
pub struct EspnCompetition {
    #[serde(default)]
    pub competitors: Vec<EspnCompetitor>,
    #[serde(default)]
    pub venue: Option<EspnVenue>,
}

#[derive(Debug, Deserialize)]
pub struct EspnCompetitor {
    #[serde(default, rename = "homeAway")]
    pub home_away: String,
    pub team: EspnTeam,
    #[serde(default)]
    pub records: Vec<EspnRecord>,
}

#[derive(Debug, Deserialize)]
pub struct EspnTeam {
    #[serde(default, rename = "displayName")]
    pub display_name: String,
}

#[derive(Debug, Deserialize)]
pub struct EspnRecord {
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Deserialize)]
pub struct EspnVenue {
    #[serde(default, rename = "fullName")]
    pub full_name: String,
}

#[derive(Debug, Deserialize)]
pub struct EspnStatus {
    #[serde(rename = "type")]
    pub kind: EspnStatusType,
}

#[derive(Debug, Deserialize)]
pub struct EspnStatusType {
    /// "pre", "in" or "post".
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub completed: bool,
}

// ---------------------------------------------------------------------------
// Provider
// ---------------------------------------------------------------------------

pub struct EspnProvider {
    client: JsonClient,
    per_league: usize,
}

impl EspnProvider {
    pub fn new(client: JsonClient, per_league: usize) -> Self {
        Self { client, per_league }
    }

    fn scoreboard_url(path: &str) -> String {
        format!("{ESPN_API_URL}/{path}/scoreboard")
    }
}

#[async_trait]
impl FixtureProvider for EspnProvider {
    fn name(&self) -> &'static str {
        SOURCE
    }

    async fn fetch_fixtures(&self, league: &League) -> Result<Vec<Fixture>> {
        let path = league.espn_path.ok_or_else(|| SportsError::NoLiveFeed {
            league: league.id.to_string(),
        })?;

        let url = Self::scoreboard_url(path);
        debug!(league = league.id, url = %url, "Fetching ESPN scoreboard");

        let board: Scoreboard = self.client.get_json(SOURCE, &url, &[]).await?;
        let fixtures = parse_scoreboard(league, board, self.per_league);

        info!(league = league.id, count = fixtures.len(), "ESPN fixtures loaded");
        Ok(fixtures)
    }
}

/// Convert a scoreboard into fixtures, skipping finished or malformed
/// events and keeping at most `limit`.
pub fn parse_scoreboard(league: &League, board: Scoreboard, limit: usize) -> Vec<Fixture> {
    board
        .events
        .into_iter()
        .filter_map(|event| convert_event(league, event))
        .take(limit)
        .collect()
}

fn convert_event(league: &League, event: EspnEvent) -> Option<Fixture> {
    let status = match event.status.as_ref().map(|s| &s.kind) {
        Some(kind) if kind.completed || kind.state == "post" => return None,
        Some(kind) if kind.state == "in" => FixtureStatus::InProgress,
        _ => FixtureStatus::Scheduled,
    };

    let competition = event.competitions.into_iter().next()?;
    let side = |which: &str| {
        competition
            .competitors
            .iter()
            .find(|c| c.home_away == which)
            .filter(|c| !c.team.display_name.is_empty())
    };
    let (home, away) = (side("home")?, side("away")?);

    let record = |c: &EspnCompetitor| {
        c.records
            .first()
            .map(|r| r.summary.clone())
            .filter(|s| !s.is_empty())
    };

    Some(Fixture {
        id: format!("{}-espn-{}", league.id, event.id),
        league: league.id.to_string(),
        sport: league.sport,
        home: home.team.display_name.clone(),
        away: away.team.display_name.clone(),
        venue: competition
            .venue
            .as_ref()
            .map(|v| v.full_name.clone())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "TBD".to_string()),
        start_time: parse_espn_date(&event.date)?,
        status,
        home_record: record(home),
        away_record: record(away),
        origin: DataOrigin::Live { source: SOURCE.to_string() },
    })
}

/// ESPN dates are usually "2025-03-01T20:00Z" (no seconds), sometimes full
/// RFC 3339.
fn parse_espn_date(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%MZ")
                .ok()
                .map(|dt| dt.and_utc())
        })
}
