//! Shared types for SPORTSLINE.
//!
//! These types form the data model used across all modules. Fixtures,
//! predictions and reports replace the loose per-league "game" maps with
//! typed records so providers, scorers and the dashboard agree on shape.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Sport
// ---------------------------------------------------------------------------

/// Sport a league belongs to. Drives rating scales and venue handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sport {
    Boxing,
    Chess,
    Formula1,
    Tennis,
    Soccer,
    Basketball,
    AmericanFootball,
}

impl Sport {
    pub const ALL: &'static [Sport] = &[
        Sport::Boxing,
        Sport::Chess,
        Sport::Formula1,
        Sport::Tennis,
        Sport::Soccer,
        Sport::Basketball,
        Sport::AmericanFootball,
    ];

    /// Logistic scale for rating differences. Chess rosters carry Elo
    /// ratings; every other roster uses a 0–100 strength rating.
    pub fn rating_scale(&self) -> f64 {
        match self {
            Sport::Chess => 400.0,
            _ => 25.0,
        }
    }

    /// Additive home-win lean for a home fixture.
    pub fn home_advantage(&self) -> f64 {
        match self {
            Sport::Soccer => 0.06,
            Sport::Basketball => 0.04,
            Sport::AmericanFootball => 0.03,
            Sport::Boxing | Sport::Chess | Sport::Formula1 | Sport::Tennis => 0.0,
        }
    }

    /// Upset tendency in [0, 1]. Higher means ratings predict less.
    pub fn volatility(&self) -> f64 {
        match self {
            Sport::Boxing => 0.35,
            Sport::Chess => 0.15,
            Sport::Formula1 => 0.25,
            Sport::Tennis => 0.20,
            Sport::Soccer => 0.40,
            Sport::Basketball => 0.20,
            Sport::AmericanFootball => 0.30,
        }
    }

    pub fn is_team_sport(&self) -> bool {
        matches!(
            self,
            Sport::Soccer | Sport::Basketball | Sport::AmericanFootball
        )
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sport::Boxing => write!(f, "Boxing"),
            Sport::Chess => write!(f, "Chess"),
            Sport::Formula1 => write!(f, "Formula 1"),
            Sport::Tennis => write!(f, "Tennis"),
            Sport::Soccer => write!(f, "Soccer"),
            Sport::Basketball => write!(f, "Basketball"),
            Sport::AmericanFootball => write!(f, "American Football"),
        }
    }
}

/// Case-insensitive parse, accepting a few common aliases.
impl std::str::FromStr for Sport {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "boxing" => Ok(Sport::Boxing),
            "chess" => Ok(Sport::Chess),
            "f1" | "formula1" | "formula 1" | "formula one" => Ok(Sport::Formula1),
            "tennis" => Ok(Sport::Tennis),
            "soccer" | "football" => Ok(Sport::Soccer),
            "basketball" | "nba" => Ok(Sport::Basketball),
            "american football" | "american_football" | "nfl" => Ok(Sport::AmericanFootball),
            _ => Err(anyhow::anyhow!("Unknown sport: {s}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Rosters & leagues
// ---------------------------------------------------------------------------

/// A roster entry: an athlete or a team.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Competitor {
    pub name: &'static str,
    pub country: &'static str,
    /// Elo for chess, 0–100 strength everywhere else.
    pub rating: f64,
    /// Weight class for boxers.
    pub division: Option<&'static str>,
    /// Home ground for teams.
    pub venue: Option<&'static str>,
}

impl Competitor {
    pub const fn athlete(name: &'static str, country: &'static str, rating: f64) -> Self {
        Self { name, country, rating, division: None, venue: None }
    }

    pub const fn boxer(
        name: &'static str,
        country: &'static str,
        rating: f64,
        division: &'static str,
    ) -> Self {
        Self { name, country, rating, division: Some(division), venue: None }
    }

    pub const fn team(
        name: &'static str,
        country: &'static str,
        rating: f64,
        venue: &'static str,
    ) -> Self {
        Self { name, country, rating, division: None, venue: Some(venue) }
    }
}

/// A league (or tour/circuit) with its roster and data-source hooks.
#[derive(Debug, Serialize)]
pub struct League {
    pub id: &'static str,
    pub name: &'static str,
    pub sport: Sport,
    /// ESPN `sports/{path}/scoreboard` path, if ESPN covers it.
    pub espn_path: Option<&'static str>,
    /// Polymarket Gamma tag slug used for market lookup.
    pub polymarket_tag: Option<&'static str>,
    #[serde(skip)]
    pub roster: &'static [Competitor],
    /// Event venues for individual sports (circuits, tournaments, arenas).
    pub venues: &'static [&'static str],
}

impl League {
    pub fn is_live_capable(&self) -> bool {
        self.espn_path.is_some()
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {} entries)", self.name, self.sport, self.roster.len())
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Where a fixture's data came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataOrigin {
    Live { source: String },
    Fallback { source: String, reason: String },
    Synthetic,
}

impl DataOrigin {
    pub fn is_live(&self) -> bool {
        matches!(self, DataOrigin::Live { .. })
    }
}

impl fmt::Display for DataOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataOrigin::Live { source } => write!(f, "live:{source}"),
            DataOrigin::Fallback { source, .. } => write!(f, "fallback:{source}"),
            DataOrigin::Synthetic => write!(f, "synthetic"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixtureStatus {
    Scheduled,
    InProgress,
}

/// One upcoming game, bout, race head-to-head or match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fixture {
    pub id: String,
    pub league: String,
    pub sport: Sport,
    pub home: String,
    pub away: String,
    pub venue: String,
    pub start_time: DateTime<Utc>,
    pub status: FixtureStatus,
    /// Season record summaries ("12-4", "5-2-3") when the source has them.
    pub home_record: Option<String>,
    pub away_record: Option<String>,
    pub origin: DataOrigin,
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} vs {} @ {} ({}, {})",
            self.league,
            self.home,
            self.away,
            self.venue,
            self.start_time.format("%Y-%m-%d %H:%M"),
            self.origin,
        )
    }
}

impl Fixture {
    /// Individual sports have no home side.
    pub fn is_neutral_venue(&self) -> bool {
        !self.sport.is_team_sport()
    }

    /// Name of the other side.
    pub fn opponent_of(&self, name: &str) -> &str {
        if name == self.home {
            &self.away
        } else {
            &self.home
        }
    }

    #[cfg(test)]
    pub fn sample() -> Self {
        Fixture {
            id: "epl-test-001".to_string(),
            league: "epl".to_string(),
            sport: Sport::Soccer,
            home: "Arsenal".to_string(),
            away: "Chelsea".to_string(),
            venue: "Emirates Stadium".to_string(),
            start_time: Utc::now() + chrono::Duration::days(2),
            status: FixtureStatus::Scheduled,
            home_record: Some("8-2-1".to_string()),
            away_record: Some("5-3-3".to_string()),
            origin: DataOrigin::Synthetic,
        }
    }
}

// ---------------------------------------------------------------------------
// Market odds
// ---------------------------------------------------------------------------

/// A prediction market matched to a fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketOdds {
    pub market_id: String,
    pub question: String,
    pub yes_price: Decimal,
    pub no_price: Decimal,
    /// Competitor the YES outcome refers to.
    pub yes_side: String,
    pub volume: f64,
    pub url: String,
}

impl MarketOdds {
    /// Implied win probability for `name`, with the overround removed.
    /// Returns None when the prices are degenerate.
    pub fn implied_probability_for(&self, name: &str) -> Option<f64> {
        let total = self.yes_price + self.no_price;
        if total <= Decimal::ZERO {
            return None;
        }
        let yes = (self.yes_price / total).to_f64()?;
        if name.eq_ignore_ascii_case(&self.yes_side) {
            Some(yes)
        } else {
            Some(1.0 - yes)
        }
    }
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// The eight scoring dimensions, D0–D7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Market,
    Form,
    Rating,
    Venue,
    HeadToHead,
    Record,
    Sentiment,
    Consistency,
}

impl Dimension {
    pub const ALL: [Dimension; 8] = [
        Dimension::Market,
        Dimension::Form,
        Dimension::Rating,
        Dimension::Venue,
        Dimension::HeadToHead,
        Dimension::Record,
        Dimension::Sentiment,
        Dimension::Consistency,
    ];

    /// Position in D0–D7.
    pub fn index(&self) -> usize {
        match self {
            Dimension::Market => 0,
            Dimension::Form => 1,
            Dimension::Rating => 2,
            Dimension::Venue => 3,
            Dimension::HeadToHead => 4,
            Dimension::Record => 5,
            Dimension::Sentiment => 6,
            Dimension::Consistency => 7,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Market => "market",
            Dimension::Form => "form",
            Dimension::Rating => "rating",
            Dimension::Venue => "venue",
            Dimension::HeadToHead => "head_to_head",
            Dimension::Record => "record",
            Dimension::Sentiment => "sentiment",
            Dimension::Consistency => "consistency",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D{}:{}", self.index(), self.label())
    }
}

/// One dimension's contribution. `value` is the home-win lean in [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension: Dimension,
    pub value: f64,
    /// False when the input was missing and `value` is the neutral 0.5.
    pub available: bool,
    pub note: String,
}

impl DimensionScore {
    pub fn new(dimension: Dimension, value: f64, note: impl Into<String>) -> Self {
        Self {
            dimension,
            value: value.clamp(0.0, 1.0),
            available: true,
            note: note.into(),
        }
    }

    pub fn neutral(dimension: Dimension, note: impl Into<String>) -> Self {
        Self {
            dimension,
            value: 0.5,
            available: false,
            note: note.into(),
        }
    }

    /// Signed lean towards home (positive) or away (negative).
    pub fn lean(&self) -> f64 {
        self.value - 0.5
    }
}

// ---------------------------------------------------------------------------
// Predictions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Strong,
    Lean,
    TossUp,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Strong => write!(f, "STRONG"),
            Verdict::Lean => write!(f, "LEAN"),
            Verdict::TossUp => write!(f, "TOSS-UP"),
        }
    }
}

/// The engine's output for one fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub fixture: Fixture,
    /// Weighted D0–D7 blend, in [0, 1].
    pub home_win_probability: f64,
    pub pick: String,
    /// Percentage, clamped to the configured floor/ceiling.
    pub confidence: f64,
    pub verdict: Verdict,
    pub verdict_line: String,
    /// 1 − |model − market| for the picked side, when a market exists.
    pub market_efficiency: Option<f64>,
    /// model − market for the picked side, when a market exists.
    pub market_edge: Option<f64>,
    pub market: Option<MarketOdds>,
    pub dimensions: Vec<DimensionScore>,
    pub reasoning: String,
    pub generated_at: DateTime<Utc>,
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} vs {} | P(home)={:.1}%",
            self.verdict_line,
            self.fixture.home,
            self.fixture.away,
            self.home_win_probability * 100.0,
        )
    }
}

impl Prediction {
    /// Probability of the picked side winning.
    pub fn pick_probability(&self) -> f64 {
        if self.pick == self.fixture.home {
            self.home_win_probability
        } else {
            1.0 - self.home_win_probability
        }
    }

    pub fn dimension(&self, dimension: Dimension) -> Option<&DimensionScore> {
        self.dimensions.iter().find(|d| d.dimension == dimension)
    }
}

// ---------------------------------------------------------------------------
// Reports & snapshots
// ---------------------------------------------------------------------------

/// Fixture counts by origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginCounts {
    pub live: usize,
    pub fallback: usize,
    pub synthetic: usize,
}

impl OriginCounts {
    pub fn tally<'a>(origins: impl IntoIterator<Item = &'a DataOrigin>) -> Self {
        let mut counts = Self::default();
        for origin in origins {
            match origin {
                DataOrigin::Live { .. } => counts.live += 1,
                DataOrigin::Fallback { .. } => counts.fallback += 1,
                DataOrigin::Synthetic => counts.synthetic += 1,
            }
        }
        counts
    }

    pub fn add(&mut self, other: &OriginCounts) {
        self.live += other.live;
        self.fallback += other.fallback;
        self.synthetic += other.synthetic;
    }

    pub fn total(&self) -> usize {
        self.live + self.fallback + self.synthetic
    }
}

/// Predictions for one league in one refresh cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueReport {
    pub league_id: String,
    pub league_name: String,
    pub sport: Sport,
    pub predictions: Vec<Prediction>,
    pub origins: OriginCounts,
    /// Set when the league could not be processed at all.
    pub error: Option<String>,
    pub refreshed_at: DateTime<Utc>,
}

impl LeagueReport {
    pub fn failed(league: &League, error: impl Into<String>) -> Self {
        Self {
            league_id: league.id.to_string(),
            league_name: league.name.to_string(),
            sport: league.sport,
            predictions: Vec::new(),
            origins: OriginCounts::default(),
            error: Some(error.into()),
            refreshed_at: Utc::now(),
        }
    }
}

/// Everything produced by one refresh cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub id: String,
    pub cycle: u64,
    pub generated_at: DateTime<Utc>,
    pub reports: Vec<LeagueReport>,
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let origins = self.origin_counts();
        write!(
            f,
            "Snapshot #{} ({}): leagues={} predictions={} live={} fallback={} synthetic={}",
            self.cycle,
            self.generated_at.format("%Y-%m-%d %H:%M:%S"),
            self.reports.len(),
            self.prediction_count(),
            origins.live,
            origins.fallback,
            origins.synthetic,
        )
    }
}

impl Snapshot {
    pub fn new(cycle: u64, reports: Vec<LeagueReport>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            cycle,
            generated_at: Utc::now(),
            reports,
        }
    }

    pub fn prediction_count(&self) -> usize {
        self.reports.iter().map(|r| r.predictions.len()).sum()
    }

    pub fn origin_counts(&self) -> OriginCounts {
        let mut counts = OriginCounts::default();
        for report in &self.reports {
            counts.add(&report.origins);
        }
        counts
    }

    pub fn report(&self, league_id: &str) -> Option<&LeagueReport> {
        self.reports
            .iter()
            .find(|r| r.league_id.eq_ignore_ascii_case(league_id))
    }

    /// All predictions, highest confidence first.
    pub fn top_predictions(&self, limit: usize) -> Vec<&Prediction> {
        let mut all: Vec<&Prediction> = self
            .reports
            .iter()
            .flat_map(|r| r.predictions.iter())
            .collect();
        all.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        all.truncate(limit);
        all
    }
}

// ---------------------------------------------------------------------------
// API envelope
// ---------------------------------------------------------------------------

/// `{ success, data?, error? }` envelope returned by every API endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { success: true, data: Some(data), error: None }
    }

    pub fn err(error: impl Into<String>) -> Self {
        Self { success: false, data: None, error: Some(error.into()) }
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Domain-specific error types for SPORTSLINE.
#[derive(Debug, thiserror::Error)]
pub enum SportsError {
    #[error("HTTP {status} from {source_name}: {body}")]
    HttpStatus {
        source_name: String,
        status: u16,
        body: String,
    },

    #[error("Request to {source_name} failed: {message}")]
    Transport { source_name: String, message: String },

    #[error("Failed to decode {source_name} response: {message}")]
    Decode { source_name: String, message: String },

    #[error("Unknown league: {0}")]
    UnknownLeague(String),

    #[error("League {league} has no live feed")]
    NoLiveFeed { league: String },

    #[error("Roster for {league} too small: {size} entries")]
    RosterTooSmall { league: String, size: usize },

    #[error("Duplicate roster entry in {league}: {name}")]
    DuplicateEntry { league: String, name: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_prediction(home: &str, confidence: f64) -> Prediction {
        let mut fixture = Fixture::sample();
        fixture.home = home.to_string();
        Prediction {
            fixture,
            home_win_probability: 0.6,
            pick: home.to_string(),
            confidence,
            verdict: Verdict::Lean,
            verdict_line: format!("LEAN: {home} over Chelsea ({confidence:.1}%)"),
            market_efficiency: None,
            market_edge: None,
            market: None,
            dimensions: Vec::new(),
            reasoning: String::new(),
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn test_sport_from_str() {
        assert_eq!("F1".parse::<Sport>().unwrap(), Sport::Formula1);
        assert_eq!("Soccer".parse::<Sport>().unwrap(), Sport::Soccer);
        assert_eq!("nfl".parse::<Sport>().unwrap(), Sport::AmericanFootball);
        assert!("curling".parse::<Sport>().is_err());
    }

    #[test]
    fn test_individual_sports_have_no_home_advantage() {
        for sport in Sport::ALL {
            if !sport.is_team_sport() {
                assert_eq!(sport.home_advantage(), 0.0, "{sport}");
            }
        }
    }

    #[test]
    fn test_volatility_in_unit_range() {
        for sport in Sport::ALL {
            let v = sport.volatility();
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_fixture_opponent() {
        let f = Fixture::sample();
        assert_eq!(f.opponent_of("Arsenal"), "Chelsea");
        assert_eq!(f.opponent_of("Chelsea"), "Arsenal");
        assert!(!f.is_neutral_venue());
    }

    #[test]
    fn test_data_origin_serializes_tagged() {
        let origin = DataOrigin::Fallback {
            source: "espn".into(),
            reason: "timeout".into(),
        };
        let json = serde_json::to_string(&origin).unwrap();
        assert!(json.contains("\"kind\":\"fallback\""));
        assert!(json.contains("timeout"));
    }

    #[test]
    fn test_implied_probability_removes_overround() {
        let odds = MarketOdds {
            market_id: "m1".into(),
            question: "Will Arsenal beat Chelsea?".into(),
            yes_price: dec!(0.66),
            no_price: dec!(0.44),
            yes_side: "Arsenal".into(),
            volume: 1000.0,
            url: String::new(),
        };
        let home = odds.implied_probability_for("Arsenal").unwrap();
        let away = odds.implied_probability_for("Chelsea").unwrap();
        assert!((home - 0.6).abs() < 1e-9);
        assert!((home + away - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_implied_probability_degenerate() {
        let odds = MarketOdds {
            market_id: "m1".into(),
            question: String::new(),
            yes_price: Decimal::ZERO,
            no_price: Decimal::ZERO,
            yes_side: "A".into(),
            volume: 0.0,
            url: String::new(),
        };
        assert!(odds.implied_probability_for("A").is_none());
    }

    #[test]
    fn test_dimension_score_clamps() {
        let s = DimensionScore::new(Dimension::Form, 1.7, "too hot");
        assert_eq!(s.value, 1.0);
        let n = DimensionScore::neutral(Dimension::Sentiment, "none");
        assert_eq!(n.value, 0.5);
        assert!(!n.available);
    }

    #[test]
    fn test_dimension_indices_are_ordered() {
        for (i, d) in Dimension::ALL.iter().enumerate() {
            assert_eq!(d.index(), i);
        }
        assert_eq!(format!("{}", Dimension::Record), "D5:record");
    }

    #[test]
    fn test_origin_counts_tally() {
        let origins = vec![
            DataOrigin::Live { source: "espn".into() },
            DataOrigin::Synthetic,
            DataOrigin::Synthetic,
        ];
        let counts = OriginCounts::tally(&origins);
        assert_eq!(counts.live, 1);
        assert_eq!(counts.synthetic, 2);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_snapshot_top_predictions_sorted() {
        let report = LeagueReport {
            league_id: "epl".into(),
            league_name: "Premier League".into(),
            sport: Sport::Soccer,
            predictions: vec![
                sample_prediction("Arsenal", 61.0),
                sample_prediction("Liverpool", 74.0),
                sample_prediction("Everton", 55.0),
            ],
            origins: OriginCounts::default(),
            error: None,
            refreshed_at: Utc::now(),
        };
        let snap = Snapshot::new(1, vec![report]);
        let top = snap.top_predictions(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].pick, "Liverpool");
        assert_eq!(top[1].pick, "Arsenal");
        assert!(snap.report("EPL").is_some());
    }

    #[test]
    fn test_api_response_shape() {
        let err: ApiResponse<()> = ApiResponse::err("boom");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "boom");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_error_display() {
        let e = SportsError::RosterTooSmall { league: "chess".into(), size: 1 };
        assert_eq!(e.to_string(), "Roster for chess too small: 1 entries");
    }
}
