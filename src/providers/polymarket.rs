//! Polymarket market lookup.
//!
//! Uses the Gamma API (no auth required) to find an active market whose
//! question names both sides of a fixture. Markets are fetched per league
//! tag and cached; matching is a word-overlap similarity on the question.
//!
//! Gamma API: https://gamma-api.polymarket.com

use std::collections::HashSet;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::http::JsonClient;
use crate::cache::TtlCache;
use crate::config::MarketsConfig;
use crate::leagues;
use crate::types::{Fixture, MarketOdds};

const GAMMA_API_URL: &str = "https://gamma-api.polymarket.com";
const SOURCE: &str = "polymarket";
const DEFAULT_LIMIT: &str = "100";

/// Finds the prediction market for a fixture, if one exists.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketLookup: Send + Sync {
    async fn find_market(&self, fixture: &Fixture) -> Result<Option<MarketOdds>>;
}

/// Lookup used when markets are disabled.
pub struct NoMarkets;

#[async_trait]
impl MarketLookup for NoMarkets {
    async fn find_market(&self, _fixture: &Fixture) -> Result<Option<MarketOdds>> {
        Ok(None)
    }
}

// ---------------------------------------------------------------------------
// Gamma API response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Clone)]
pub struct GammaMarket {
    #[serde(default)]
    pub question: String,
    #[serde(default, rename = "conditionId")]
    pub condition_id: String,
    #[serde(default)]
    pub slug: String,
    /// Outcome labels as a JSON string: "[\"Yes\",\"No\"]"
    #[serde(default)]
    pub outcomes: Option<String>,
    /// Outcome prices as a JSON string: "[\"0.65\",\"0.35\"]"
    #[serde(default, rename = "outcomePrices")]
    pub outcome_prices: Option<String>,
    #[serde(default, rename = "volumeNum")]
    pub volume_num: Option<f64>,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

pub struct PolymarketClient {
    client: JsonClient,
    match_threshold: f64,
    cache: Mutex<TtlCache<Arc<Vec<GammaMarket>>>>,
}

impl PolymarketClient {
    pub fn new(client: JsonClient, cfg: &MarketsConfig) -> Self {
        Self {
            client,
            match_threshold: cfg.match_threshold,
            cache: Mutex::new(TtlCache::from_secs(cfg.cache_ttl_secs)),
        }
    }

    /// Active markets for a Gamma tag, served from cache while fresh.
    async fn markets_for_tag(&self, tag: &str) -> Result<Arc<Vec<GammaMarket>>> {
        if let Some(markets) = self.cache.lock().await.get(tag) {
            debug!(tag, "Market cache hit");
            return Ok(markets.clone());
        }

        let url = format!("{GAMMA_API_URL}/markets");
        let markets: Vec<GammaMarket> = self
            .client
            .get_json(
                SOURCE,
                &url,
                &[
                    ("tag_slug", tag),
                    ("active", "true"),
                    ("closed", "false"),
                    ("limit", DEFAULT_LIMIT),
                ],
            )
            .await?;
        info!(tag, count = markets.len(), "Fetched Gamma markets");

        let markets = Arc::new(markets);
        let mut cache = self.cache.lock().await;
        cache.evict_expired();
        cache.insert(tag, markets.clone());
        Ok(markets)
    }
}

#[async_trait]
impl MarketLookup for PolymarketClient {
    async fn find_market(&self, fixture: &Fixture) -> Result<Option<MarketOdds>> {
        let league = leagues::league(&fixture.league)?;
        let Some(tag) = league.polymarket_tag else {
            return Ok(None);
        };

        let markets = self.markets_for_tag(tag).await?;
        let found = match_market(&markets, fixture, self.match_threshold);
        if let Some(m) = &found {
            debug!(fixture = %fixture.id, market = %m.market_id, "Matched market");
        }
        Ok(found)
    }
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

/// Best market naming both sides with similarity at or above `threshold`.
/// Markets with unparseable prices are skipped.
pub fn match_market(markets: &[GammaMarket], fixture: &Fixture, threshold: f64) -> Option<MarketOdds> {
    let target = format!("{} vs {}", fixture.home, fixture.away);
    let keys = SideKeys::for_fixture(fixture);

    markets
        .iter()
        .filter(|gm| keys.positions(&gm.question.to_lowercase()).is_some())
        .map(|gm| (text_similarity(&gm.question, &target), gm))
        .filter(|(sim, _)| *sim >= threshold)
        .filter_map(|(sim, gm)| convert_market(gm, fixture, &keys).map(|odds| (sim, odds)))
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, odds)| odds)
}

/// Convert a Gamma market into odds for `fixture`.
fn convert_market(gm: &GammaMarket, fixture: &Fixture, keys: &SideKeys) -> Option<MarketOdds> {
    let (yes_price, no_price) = parse_outcome_prices(gm.outcome_prices.as_deref()?)?;
    let outcomes = parse_outcomes(gm.outcomes.as_deref().unwrap_or(""));
    let side = yes_side(&gm.question, outcomes.first().map(String::as_str), fixture, keys)?;

    let market_id = if gm.condition_id.is_empty() {
        gm.slug.clone()
    } else {
        gm.condition_id.clone()
    };

    Some(MarketOdds {
        market_id,
        question: gm.question.clone(),
        yes_price,
        no_price,
        yes_side: side.to_string(),
        volume: gm.volume_num.unwrap_or(0.0),
        url: format!("https://polymarket.com/event/{}", gm.slug),
    })
}

/// Which fixture side the first outcome refers to.
///
/// Head-to-head markets label outcomes with the side names; Yes/No markets
/// ask about the side named first in the question.
fn yes_side<'a>(
    question: &str,
    first_outcome: Option<&str>,
    fixture: &'a Fixture,
    keys: &SideKeys,
) -> Option<&'a str> {
    let side = match first_outcome {
        Some(o) if !o.eq_ignore_ascii_case("yes") => keys.outcome_side(o)?,
        _ => {
            let (home, away) = keys.positions(&question.to_lowercase())?;
            if home < away {
                Side::Home
            } else {
                Side::Away
            }
        }
    };
    Some(match side {
        Side::Home => fixture.home.as_str(),
        Side::Away => fixture.away.as_str(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Home,
    Away,
}

/// Lowercased search keys for the two sides of a fixture.
///
/// Normally the last word of each name ("lakers", "celtics"). When those
/// collide or nest ("Real Madrid" / "Atletico Madrid") the full names are
/// used instead.
#[derive(Debug)]
struct SideKeys {
    home: String,
    away: String,
    home_full: String,
    away_full: String,
}

impl SideKeys {
    fn for_fixture(fixture: &Fixture) -> Self {
        let home_full = normalise_name(&fixture.home);
        let away_full = normalise_name(&fixture.away);
        let home = name_key(&home_full);
        let away = name_key(&away_full);

        let (home, away) = if home.contains(&away) || away.contains(&home) {
            (home_full.clone(), away_full.clone())
        } else {
            (home, away)
        };
        Self {
            home,
            away,
            home_full,
            away_full,
        }
    }

    /// Byte offsets of both sides in a lowercased question, at
    /// non-overlapping positions. None unless both sides are named.
    fn positions(&self, q: &str) -> Option<(usize, usize)> {
        // Place the longer key first so a nested shorter key cannot claim
        // the same span.
        let home_first = self.home.len() >= self.away.len();
        let (long, short) = if home_first {
            (&self.home, &self.away)
        } else {
            (&self.away, &self.home)
        };

        let long_at = q.find(long.as_str())?;
        let long_end = long_at + long.len();
        let short_at = q
            .match_indices(short.as_str())
            .map(|(i, _)| i)
            .find(|&i| i + short.len() <= long_at || i >= long_end)?;

        Some(if home_first {
            (long_at, short_at)
        } else {
            (short_at, long_at)
        })
    }

    /// Side named by a head-to-head outcome label.
    fn outcome_side(&self, label: &str) -> Option<Side> {
        let label = normalise_name(label);
        if label == self.home_full {
            return Some(Side::Home);
        }
        if label == self.away_full {
            return Some(Side::Away);
        }
        match (label.contains(&self.home), label.contains(&self.away)) {
            (true, false) => Some(Side::Home),
            (false, true) => Some(Side::Away),
            _ => None,
        }
    }
}

/// Lowercase and collapse whitespace.
fn normalise_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Last word of a normalised name: "los angeles lakers" → "lakers".
fn name_key(name: &str) -> String {
    name.rsplit(' ').next().unwrap_or(name).to_string()
}

/// Parse outcome prices from Gamma's string format.
/// Handles: "[\"0.65\",\"0.35\"]", "0.65, 0.35", etc.
pub fn parse_outcome_prices(s: &str) -> Option<(Decimal, Decimal)> {
    let parts = parse_outcomes(s);
    if parts.len() < 2 {
        return None;
    }
    let yes = parts[0].parse::<Decimal>().ok()?;
    let no = parts[1].parse::<Decimal>().ok()?;
    if yes < Decimal::ZERO || no < Decimal::ZERO {
        return None;
    }
    Some((yes, no))
}

fn parse_outcomes(s: &str) -> Vec<String> {
    s.replace(['[', ']', '"', '\\'], "")
        .split(',')
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

/// Word-overlap similarity between two strings, in [0, 1].
///
/// Jaccard index plus a containment bonus so a short "A vs B" still
/// matches a long "Will A beat B on Saturday?".
fn text_similarity(a: &str, b: &str) -> f64 {
    let norm = |s: &str| -> HashSet<String> {
        s.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| w.len() > 2)
            .map(String::from)
            .collect()
    };

    let set_a = norm(a);
    let set_b = norm(b);
    if set_a.is_empty() || set_b.is_empty() {
        return 0.0;
    }

    let intersection = set_a.intersection(&set_b).count() as f64;
    let union = set_a.union(&set_b).count() as f64;
    let jaccard = intersection / union;
    let containment = intersection / set_a.len().min(set_b.len()) as f64;

    (0.6 * jaccard + 0.4 * containment).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HttpConfig;
    use rust_decimal_macros::dec;

    fn gamma(question: &str, outcomes: &str, prices: &str) -> GammaMarket {
        GammaMarket {
            question: question.into(),
            condition_id: "0xabc".into(),
            slug: "arsenal-chelsea".into(),
            outcomes: Some(outcomes.into()),
            outcome_prices: Some(prices.into()),
            volume_num: Some(12_000.0),
        }
    }

    #[test]
    fn test_parse_outcome_prices() {
        assert_eq!(
            parse_outcome_prices(r#"["0.65","0.35"]"#),
            Some((dec!(0.65), dec!(0.35)))
        );
        assert_eq!(parse_outcome_prices("0.4, 0.6"), Some((dec!(0.4), dec!(0.6))));
        assert_eq!(parse_outcome_prices("garbage"), None);
        assert_eq!(parse_outcome_prices(r#"["abc","0.5"]"#), None);
    }

    #[test]
    fn test_text_similarity() {
        let s = text_similarity("Will Arsenal beat Chelsea?", "Arsenal vs Chelsea");
        assert!(s > 0.5, "{s}");
        assert_eq!(text_similarity("", "Arsenal"), 0.0);
        assert!(text_similarity("Bitcoin above 100k", "Arsenal vs Chelsea") < 0.1);
    }

    #[test]
    fn test_match_yes_no_market() {
        let f = Fixture::sample();
        let markets = vec![
            gamma("Will Bitcoin hit 100k?", r#"["Yes","No"]"#, r#"["0.5","0.5"]"#),
            gamma("Will Arsenal beat Chelsea?", r#"["Yes","No"]"#, r#"["0.62","0.38"]"#),
        ];
        let odds = match_market(&markets, &f, 0.4).unwrap();
        assert_eq!(odds.yes_side, "Arsenal");
        assert_eq!(odds.yes_price, dec!(0.62));
        assert_eq!(odds.url, "https://polymarket.com/event/arsenal-chelsea");
    }

    #[test]
    fn test_match_yes_no_market_away_named_first() {
        let f = Fixture::sample();
        let markets = vec![gamma(
            "Will Chelsea win at Arsenal?",
            r#"["Yes","No"]"#,
            r#"["0.30","0.70"]"#,
        )];
        let odds = match_market(&markets, &f, 0.4).unwrap();
        assert_eq!(odds.yes_side, "Chelsea");
        let home = odds.implied_probability_for("Arsenal").unwrap();
        assert!((home - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_match_head_to_head_outcomes() {
        let mut f = Fixture::sample();
        f.home = "Los Angeles Lakers".into();
        f.away = "Boston Celtics".into();
        let markets = vec![gamma(
            "Celtics vs. Lakers",
            r#"["Celtics","Lakers"]"#,
            r#"["0.58","0.42"]"#,
        )];
        let odds = match_market(&markets, &f, 0.4).unwrap();
        assert_eq!(odds.yes_side, "Boston Celtics");
    }

    fn derby() -> Fixture {
        let mut f = Fixture::sample();
        f.league = "laliga".into();
        f.home = "Real Madrid".into();
        f.away = "Atletico Madrid".into();
        f
    }

    #[test]
    fn test_derby_yes_no_credits_named_side() {
        let markets = vec![gamma(
            "Will Atletico Madrid beat Real Madrid?",
            r#"["Yes","No"]"#,
            r#"["0.30","0.70"]"#,
        )];
        let odds = match_market(&markets, &derby(), 0.4).unwrap();
        assert_eq!(odds.yes_side, "Atletico Madrid");
        let home = odds.implied_probability_for("Real Madrid").unwrap();
        assert!((home - 0.7).abs() < 1e-9, "{home}");
    }

    #[test]
    fn test_derby_head_to_head_outcomes() {
        let markets = vec![gamma(
            "Real Madrid vs. Atletico Madrid",
            r#"["Atletico Madrid","Real Madrid"]"#,
            r#"["0.35","0.65"]"#,
        )];
        let odds = match_market(&markets, &derby(), 0.4).unwrap();
        assert_eq!(odds.yes_side, "Atletico Madrid");
        let home = odds.implied_probability_for("Real Madrid").unwrap();
        assert!((home - 0.65).abs() < 1e-9, "{home}");
    }

    #[test]
    fn test_derby_rejects_single_side_outright() {
        let markets = vec![gamma(
            "Will Real Madrid win La Liga?",
            r#"["Yes","No"]"#,
            r#"["0.55","0.45"]"#,
        )];
        assert!(match_market(&markets, &derby(), 0.0).is_none());
    }

    #[test]
    fn test_shared_suffix_needs_both_full_names() {
        let mut f = Fixture::sample();
        f.home = "Manchester United".into();
        f.away = "Newcastle United".into();
        let markets = vec![
            gamma("Will Manchester United finish top four?", r#"["Yes","No"]"#, r#"["0.2","0.8"]"#),
            gamma(
                "Will Newcastle United beat Manchester United?",
                r#"["Yes","No"]"#,
                r#"["0.4","0.6"]"#,
            ),
        ];
        let odds = match_market(&markets, &f, 0.0).unwrap();
        assert_eq!(odds.question, "Will Newcastle United beat Manchester United?");
        assert_eq!(odds.yes_side, "Newcastle United");
    }

    #[test]
    fn test_nested_names_take_distinct_spans() {
        let keys = SideKeys::for_fixture(&{
            let mut f = Fixture::sample();
            f.home = "Inter Milan".into();
            f.away = "Milan".into();
            f
        });
        assert!(keys.positions("will inter milan win?").is_none());
        assert_eq!(keys.positions("milan vs inter milan"), Some((9, 0)));
    }

    #[test]
    fn test_requires_both_sides() {
        let f = Fixture::sample();
        let markets = vec![gamma(
            "Will Arsenal win the Premier League?",
            r#"["Yes","No"]"#,
            r#"["0.3","0.7"]"#,
        )];
        assert!(match_market(&markets, &f, 0.0).is_none());
    }

    #[test]
    fn test_unparseable_prices_ignored() {
        let f = Fixture::sample();
        let markets = vec![gamma("Will Arsenal beat Chelsea?", r#"["Yes","No"]"#, "n/a")];
        assert!(match_market(&markets, &f, 0.4).is_none());
    }

    #[test]
    fn test_threshold_filters_weak_matches() {
        let f = Fixture::sample();
        let markets = vec![gamma(
            "Will Arsenal score more corners than Chelsea in the first half on matchday thirty?",
            r#"["Yes","No"]"#,
            r#"["0.5","0.5"]"#,
        )];
        assert!(match_market(&markets, &f, 0.95).is_none());
        assert!(match_market(&markets, &f, 0.1).is_some());
    }

    #[tokio::test]
    async fn test_no_markets() {
        assert!(NoMarkets.find_market(&Fixture::sample()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unknown_league_errors() {
        let client = JsonClient::new(&HttpConfig::default()).unwrap();
        let pm = PolymarketClient::new(client, &MarketsConfig::default());
        let mut f = Fixture::sample();
        f.league = "cricket".into();
        assert!(pm.find_market(&f).await.is_err());
    }
}
