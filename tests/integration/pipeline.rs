//! Full refresh pipeline against in-memory feeds.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{TimeZone, Utc};
use tower::ServiceExt;

use sportsline::config::{AppConfig, EngineConfig};
use sportsline::dashboard::{build_router, DashboardState};
use sportsline::engine::{LeagueBoard, UniversalPredictionEngine};
use sportsline::providers::fallback::FallbackProvider;
use sportsline::providers::polymarket::{MarketLookup, NoMarkets};
use sportsline::providers::synthetic::SyntheticProvider;
use sportsline::providers::ProviderRegistry;
use sportsline::storage;
use sportsline::types::{DataOrigin, Dimension, Snapshot};

use crate::mock_feed::{MockFeed, StaticMarkets};

fn synthetic() -> SyntheticProvider {
    SyntheticProvider::new(Some(2024), 4)
        .with_anchor(Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap())
}

fn board_with(feed: &MockFeed, markets: Arc<dyn MarketLookup>, leagues: &[&str]) -> LeagueBoard {
    let live = FallbackProvider::new(Box::new(feed.clone()), synthetic(), true);
    let registry = ProviderRegistry::from_parts(Some(live), synthetic());
    let engine = UniversalPredictionEngine::new(EngineConfig::default(), markets);
    let ids: Vec<String> = leagues.iter().map(|s| s.to_string()).collect();
    LeagueBoard::new(registry, engine, &ids, 0).unwrap()
}

#[tokio::test]
async fn live_feed_with_market() {
    let feed = MockFeed::new();
    let board = board_with(&feed, Arc::new(StaticMarkets::celtics_heat()), &["nba"]);

    let snap = board.refresh_all().await;
    let nba = snap.report("nba").unwrap();
    assert!(nba.error.is_none());
    assert_eq!(nba.origins.live, 2);
    assert_eq!(feed.calls(), 1);

    let celtics = nba
        .predictions
        .iter()
        .find(|p| p.fixture.home == "Boston Celtics")
        .unwrap();
    assert_eq!(celtics.pick, "Boston Celtics");
    assert!(celtics.dimension(Dimension::Market).unwrap().available);
    assert!(celtics.dimension(Dimension::Record).unwrap().available);
    assert!(celtics.market_efficiency.is_some());
    assert!(celtics.verdict_line.contains("Boston Celtics over Miami Heat"));

    let lakers = nba
        .predictions
        .iter()
        .find(|p| p.fixture.home == "Los Angeles Lakers")
        .unwrap();
    assert!(lakers.market.is_none());
}

#[tokio::test]
async fn failing_feed_serves_tagged_fallback() {
    let feed = MockFeed::new();
    feed.set_error("HTTP 503 from espn");
    let board = board_with(&feed, Arc::new(NoMarkets), &["nba", "chess"]);

    let snap = board.refresh_all().await;
    assert!(snap.reports.iter().all(|r| r.error.is_none()));

    let nba = snap.report("nba").unwrap();
    assert_eq!(nba.origins.fallback, 4);
    for p in &nba.predictions {
        match &p.fixture.origin {
            DataOrigin::Fallback { source, reason } => {
                assert_eq!(source, "espn");
                assert!(reason.contains("503"));
            }
            other => panic!("unexpected origin {other:?}"),
        }
        assert!(p.reasoning.contains("espn was unavailable"));
    }

    // Chess has no live feed and never touches the mock.
    let chess = snap.report("chess").unwrap();
    assert_eq!(chess.origins.synthetic, 4);
    assert_eq!(feed.calls(), 1);
}

#[tokio::test]
async fn seeded_boards_agree() {
    let a = board_with(&MockFeed::new(), Arc::new(NoMarkets), &["boxing", "f1", "wta"]);
    let b = board_with(&MockFeed::new(), Arc::new(NoMarkets), &["boxing", "f1", "wta"]);

    let picks = |s: &Snapshot| -> Vec<(String, String, String)> {
        s.reports
            .iter()
            .flat_map(|r| r.predictions.iter())
            .map(|p| (p.fixture.id.clone(), p.pick.clone(), format!("{:.3}", p.confidence)))
            .collect()
    };
    let (sa, sb) = (a.refresh_all().await, b.refresh_all().await);
    assert_eq!(picks(&sa), picks(&sb));
    assert_eq!(sa.prediction_count(), 12);
}

#[tokio::test]
async fn confidence_stays_in_band() {
    let board = board_with(
        &MockFeed::new(),
        Arc::new(NoMarkets),
        &["epl", "laliga", "nfl", "atp", "boxing", "chess", "f1"],
    );
    let snap = board.refresh_all().await;
    for p in snap.reports.iter().flat_map(|r| r.predictions.iter()) {
        assert!((50.0..=90.0).contains(&p.confidence), "{}", p.verdict_line);
        assert!((0.0..=1.0).contains(&p.home_win_probability));
        assert_ne!(p.fixture.home, p.fixture.away);
    }
}

#[tokio::test]
async fn snapshot_round_trips_to_dashboard() {
    let board = board_with(&MockFeed::new(), Arc::new(StaticMarkets::celtics_heat()), &["nba"]);
    let snap = board.refresh_all().await;

    let mut path = std::env::temp_dir();
    path.push(format!("sportsline_it_{}.json", uuid::Uuid::new_v4()));
    let path = path.to_string_lossy().to_string();

    storage::save_snapshot(&snap, Some(&path)).unwrap();
    let restored = storage::load_snapshot(Some(&path)).unwrap().unwrap();
    storage::delete_snapshot(Some(&path)).unwrap();

    let state = Arc::new(DashboardState::new("SPORTSLINE", board.leagues().to_vec()));
    state.publish(restored).await;

    let resp = build_router(state)
        .oneshot(Request::builder().uri("/api/predictions/nba").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), 1_000_000).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["predictions"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn offline_config_builds_a_working_board() {
    let cfg = AppConfig::from_toml(
        r#"
[app]
seed = 5

[fixtures]
leagues = ["seriea", "cricket"]
"#,
    );
    // Unknown league ids are rejected at load time.
    assert!(cfg.is_err());

    let cfg = AppConfig::from_toml(
        r#"
[app]
seed = 5

[fixtures]
leagues = ["seriea", "atp"]
live_enabled = false
per_league = 2

[markets]
enabled = false
"#,
    )
    .unwrap();

    let board = LeagueBoard::from_config(&cfg).unwrap();
    let snap = board.refresh_all().await;
    assert_eq!(snap.prediction_count(), 4);
    assert_eq!(snap.origin_counts().synthetic, 4);
}
