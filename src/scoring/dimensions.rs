//! The eight standard dimension scorers.

use super::hash::stable_unit;
use super::{DimensionScorer, GameContext};
use crate::types::{Dimension, DimensionScore};

/// Logistic win probability for home from roster ratings.
pub(crate) fn rating_probability(ctx: &GameContext<'_>) -> Option<f64> {
    let (home, away) = (ctx.home?, ctx.away?);
    let scale = ctx.fixture.sport.rating_scale();
    let diff = home.rating - away.rating;
    Some(1.0 / (1.0 + 10f64.powf(-diff / scale)))
}

/// Win share from a record summary: "12-4", "5-2-3" (W-D-L) or "9-7-1".
/// Draws and ties count as non-wins.
pub(crate) fn record_win_pct(summary: &str) -> Option<f64> {
    let parts: Vec<u64> = summary
        .split('-')
        .map(|p| p.trim().parse::<u64>())
        .collect::<Result<_, _>>()
        .ok()?;
    if parts.len() < 2 {
        return None;
    }
    let games = parts.iter().try_fold(0u64, |acc, &n| acc.checked_add(n))?;
    if games == 0 {
        return None;
    }
    Some(parts[0] as f64 / games as f64)
}

// ---------------------------------------------------------------------------
// D0 Market
// ---------------------------------------------------------------------------

pub struct MarketScorer;

impl DimensionScorer for MarketScorer {
    fn dimension(&self) -> Dimension {
        Dimension::Market
    }

    fn score(&self, ctx: &GameContext<'_>) -> DimensionScore {
        match ctx
            .market
            .and_then(|m| m.implied_probability_for(&ctx.fixture.home))
        {
            Some(p) => DimensionScore::new(
                Dimension::Market,
                p,
                format!("Polymarket implies {:.0}% for {}", p * 100.0, ctx.fixture.home),
            ),
            None => DimensionScore::neutral(Dimension::Market, "no matching market"),
        }
    }
}

// ---------------------------------------------------------------------------
// D1 Form
// ---------------------------------------------------------------------------

/// Daily form index per side, derived from a digest of the name and date.
pub struct FormScorer;

impl FormScorer {
    fn form(name: &str, day: &str) -> f64 {
        stable_unit(&[name, "form", day])
    }
}

impl DimensionScorer for FormScorer {
    fn dimension(&self) -> Dimension {
        Dimension::Form
    }

    fn score(&self, ctx: &GameContext<'_>) -> DimensionScore {
        let day = ctx.fixture.start_time.format("%Y-%m-%d").to_string();
        let home = Self::form(&ctx.fixture.home, &day);
        let away = Self::form(&ctx.fixture.away, &day);
        DimensionScore::new(
            Dimension::Form,
            0.5 + (home - away) / 2.0,
            format!("form index {:.2} vs {:.2}", home, away),
        )
    }
}

// ---------------------------------------------------------------------------
// D2 Rating
// ---------------------------------------------------------------------------

pub struct RatingScorer;

impl DimensionScorer for RatingScorer {
    fn dimension(&self) -> Dimension {
        Dimension::Rating
    }

    fn score(&self, ctx: &GameContext<'_>) -> DimensionScore {
        match (rating_probability(ctx), ctx.home, ctx.away) {
            (Some(p), Some(h), Some(a)) => DimensionScore::new(
                Dimension::Rating,
                p,
                format!("rating {:.0} vs {:.0}", h.rating, a.rating),
            ),
            _ => DimensionScore::neutral(Dimension::Rating, "competitor not in roster"),
        }
    }
}

// ---------------------------------------------------------------------------
// D3 Venue
// ---------------------------------------------------------------------------

pub struct VenueScorer;

impl DimensionScorer for VenueScorer {
    fn dimension(&self) -> Dimension {
        Dimension::Venue
    }

    fn score(&self, ctx: &GameContext<'_>) -> DimensionScore {
        if ctx.fixture.is_neutral_venue() {
            return DimensionScore::new(Dimension::Venue, 0.5, "neutral venue");
        }
        let edge = ctx.fixture.sport.home_advantage();
        DimensionScore::new(
            Dimension::Venue,
            0.5 + edge,
            format!("home advantage at {}", ctx.fixture.venue),
        )
    }
}

// ---------------------------------------------------------------------------
// D4 Head-to-head
// ---------------------------------------------------------------------------

/// Pseudo head-to-head history, bounded to [0.35, 0.65].
pub struct HeadToHeadScorer;

impl DimensionScorer for HeadToHeadScorer {
    fn dimension(&self) -> Dimension {
        Dimension::HeadToHead
    }

    fn score(&self, ctx: &GameContext<'_>) -> DimensionScore {
        let u = stable_unit(&[&ctx.fixture.home, &ctx.fixture.away, "h2h"]);
        let value = 0.35 + 0.30 * u;
        DimensionScore::new(
            Dimension::HeadToHead,
            value,
            format!("head-to-head share {:.0}%", value * 100.0),
        )
    }
}

// ---------------------------------------------------------------------------
// D5 Record
// ---------------------------------------------------------------------------

pub struct RecordScorer;

impl DimensionScorer for RecordScorer {
    fn dimension(&self) -> Dimension {
        Dimension::Record
    }

    fn score(&self, ctx: &GameContext<'_>) -> DimensionScore {
        let pct = |r: &Option<String>| r.as_deref().and_then(record_win_pct);
        match (pct(&ctx.fixture.home_record), pct(&ctx.fixture.away_record)) {
            (Some(h), Some(a)) => DimensionScore::new(
                Dimension::Record,
                0.5 + (h - a) / 2.0,
                format!("win rate {:.0}% vs {:.0}%", h * 100.0, a * 100.0),
            ),
            _ => DimensionScore::neutral(Dimension::Record, "no season record"),
        }
    }
}

// ---------------------------------------------------------------------------
// D6 Sentiment
// ---------------------------------------------------------------------------

/// No sentiment source is wired up; always neutral.
pub struct SentimentScorer;

impl DimensionScorer for SentimentScorer {
    fn dimension(&self) -> Dimension {
        Dimension::Sentiment
    }

    fn score(&self, _ctx: &GameContext<'_>) -> DimensionScore {
        DimensionScore::neutral(Dimension::Sentiment, "no sentiment feed")
    }
}

// ---------------------------------------------------------------------------
// D7 Consistency
// ---------------------------------------------------------------------------

/// Rating lean shrunk towards 0.5 by the sport's volatility.
pub struct ConsistencyScorer;

impl DimensionScorer for ConsistencyScorer {
    fn dimension(&self) -> Dimension {
        Dimension::Consistency
    }

    fn score(&self, ctx: &GameContext<'_>) -> DimensionScore {
        let volatility = ctx.fixture.sport.volatility();
        match rating_probability(ctx) {
            Some(p) => DimensionScore::new(
                Dimension::Consistency,
                0.5 + (p - 0.5) * (1.0 - volatility),
                format!("{} volatility {:.0}%", ctx.fixture.sport, volatility * 100.0),
            ),
            None => DimensionScore::neutral(Dimension::Consistency, "no rating baseline"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rosters::{chess, soccer};
    use crate::types::{Competitor, DataOrigin, Fixture, MarketOdds, Sport};
    use rust_decimal_macros::dec;

    fn ctx<'a>(
        fixture: &'a Fixture,
        home: Option<&'a Competitor>,
        away: Option<&'a Competitor>,
        market: Option<&'a MarketOdds>,
    ) -> GameContext<'a> {
        GameContext { fixture, home, away, market }
    }

    fn chess_fixture() -> Fixture {
        Fixture {
            sport: Sport::Chess,
            league: "chess".into(),
            home: "Magnus Carlsen".into(),
            away: "Wesley So".into(),
            venue: "Norway Chess, Stavanger".into(),
            home_record: None,
            away_record: None,
            origin: DataOrigin::Synthetic,
            ..Fixture::sample()
        }
    }

    #[test]
    fn test_record_win_pct() {
        assert_eq!(record_win_pct("12-4"), Some(0.75));
        assert_eq!(record_win_pct("5-2-3"), Some(0.5));
        assert_eq!(record_win_pct("0-0"), None);
        assert_eq!(record_win_pct("n/a"), None);
        assert_eq!(record_win_pct("7"), None);
    }

    #[test]
    fn test_record_win_pct_huge_counts() {
        let pct = record_win_pct("4294967295-1").unwrap();
        assert!(pct > 0.999 && pct < 1.0);
        assert_eq!(record_win_pct("18446744073709551615-1"), None);
        assert_eq!(record_win_pct("99999999999999999999-1"), None);
    }

    #[test]
    fn test_market_scorer_uses_home_side() {
        let f = Fixture::sample();
        let odds = MarketOdds {
            market_id: "1".into(),
            question: "Will Chelsea beat Arsenal?".into(),
            yes_price: dec!(0.30),
            no_price: dec!(0.70),
            yes_side: "Chelsea".into(),
            volume: 0.0,
            url: String::new(),
        };
        let s = MarketScorer.score(&ctx(&f, None, None, Some(&odds)));
        assert!(s.available);
        assert!((s.value - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_market_scorer_neutral_without_market() {
        let f = Fixture::sample();
        let s = MarketScorer.score(&ctx(&f, None, None, None));
        assert!(!s.available);
        assert_eq!(s.value, 0.5);
    }

    #[test]
    fn test_form_is_antisymmetric() {
        let f = Fixture::sample();
        let mut swapped = f.clone();
        std::mem::swap(&mut swapped.home, &mut swapped.away);
        let a = FormScorer.score(&ctx(&f, None, None, None)).value;
        let b = FormScorer.score(&ctx(&swapped, None, None, None)).value;
        assert!((a + b - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rating_favours_stronger_player() {
        let f = chess_fixture();
        let carlsen = crate::rosters::find(chess::PLAYERS, "Magnus Carlsen");
        let so = crate::rosters::find(chess::PLAYERS, "Wesley So");
        let s = RatingScorer.score(&ctx(&f, carlsen, so, None));
        assert!(s.available);
        // 89 Elo points is worth roughly 62%.
        assert!(s.value > 0.6 && s.value < 0.65, "{}", s.value);
    }

    #[test]
    fn test_rating_neutral_when_unknown() {
        let f = Fixture::sample();
        let s = RatingScorer.score(&ctx(&f, None, None, None));
        assert!(!s.available);
    }

    #[test]
    fn test_venue_home_advantage_for_team_sports_only() {
        let soccer_f = Fixture::sample();
        let s = VenueScorer.score(&ctx(&soccer_f, None, None, None));
        assert!((s.value - 0.56).abs() < 1e-12);

        let chess_f = chess_fixture();
        let s = VenueScorer.score(&ctx(&chess_f, None, None, None));
        assert_eq!(s.value, 0.5);
        assert!(s.available);
    }

    #[test]
    fn test_head_to_head_bounds() {
        let f = Fixture::sample();
        let s = HeadToHeadScorer.score(&ctx(&f, None, None, None));
        assert!((0.35..=0.65).contains(&s.value));
    }

    #[test]
    fn test_record_scorer() {
        let f = Fixture::sample(); // 8-2-1 vs 5-3-3
        let s = RecordScorer.score(&ctx(&f, None, None, None));
        assert!(s.available);
        let expected = 0.5 + (8.0 / 11.0 - 5.0 / 11.0) / 2.0;
        assert!((s.value - expected).abs() < 1e-12);
    }

    #[test]
    fn test_sentiment_always_neutral() {
        let f = Fixture::sample();
        let s = SentimentScorer.score(&ctx(&f, None, None, None));
        assert_eq!(s.value, 0.5);
        assert!(!s.available);
    }

    #[test]
    fn test_consistency_shrinks_rating_lean() {
        let f = Fixture::sample();
        let home = crate::rosters::find(soccer::PREMIER_LEAGUE, "Arsenal");
        let away = crate::rosters::find(soccer::PREMIER_LEAGUE, "West Ham");
        let c = ctx(&f, home, away, None);
        let rating = RatingScorer.score(&c).value;
        let consistency = ConsistencyScorer.score(&c).value;
        assert!(consistency > 0.5);
        assert!(consistency < rating);
    }
}
