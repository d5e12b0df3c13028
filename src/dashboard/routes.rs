//! Dashboard API route handlers.
//!
//! All endpoints return the `{ success, data?, error? }` JSON envelope.
//! State is shared via `Arc<DashboardState>`.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::types::{ApiResponse, League, LeagueReport, OriginCounts, Prediction, Snapshot, Sport};

const DEFAULT_TOP_LIMIT: usize = 10;
const MAX_TOP_LIMIT: usize = 100;

// ---------------------------------------------------------------------------
// Shared state
// ---------------------------------------------------------------------------

/// Shared state accessible by all route handlers.
pub struct DashboardState {
    pub app_name: String,
    pub leagues: Vec<&'static League>,
    pub snapshot: RwLock<Option<Snapshot>>,
    pub started_at: DateTime<Utc>,
}

impl DashboardState {
    pub fn new(app_name: impl Into<String>, leagues: Vec<&'static League>) -> Self {
        Self {
            app_name: app_name.into(),
            leagues,
            snapshot: RwLock::new(None),
            started_at: Utc::now(),
        }
    }

    /// Replace the served snapshot.
    pub async fn publish(&self, snapshot: Snapshot) {
        *self.snapshot.write().await = Some(snapshot);
    }

    fn league(&self, id: &str) -> Option<&'static League> {
        self.leagues
            .iter()
            .copied()
            .find(|l| l.id.eq_ignore_ascii_case(id))
    }
}

pub type AppState = Arc<DashboardState>;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub name: String,
    pub cycle_count: u64,
    pub snapshot_id: Option<String>,
    pub last_refresh: Option<DateTime<Utc>>,
    pub leagues: usize,
    pub failed_leagues: usize,
    pub predictions: usize,
    pub origins: OriginCounts,
    pub uptime_secs: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueInfo {
    pub id: String,
    pub name: String,
    pub sport: Sport,
    pub live_feed: bool,
    pub markets: bool,
    pub roster_size: usize,
}

impl From<&League> for LeagueInfo {
    fn from(l: &League) -> Self {
        Self {
            id: l.id.to_string(),
            name: l.name.to_string(),
            sport: l.sport,
            live_feed: l.is_live_capable(),
            markets: l.polymarket_tag.is_some(),
            roster_size: l.roster.len(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TopQuery {
    pub limit: Option<usize>,
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

/// GET /api/status
pub async fn get_status(State(state): State<AppState>) -> Json<ApiResponse<StatusResponse>> {
    let snapshot = state.snapshot.read().await;
    let uptime = (Utc::now() - state.started_at).num_seconds();

    let resp = match snapshot.as_ref() {
        Some(snap) => StatusResponse {
            name: state.app_name.clone(),
            cycle_count: snap.cycle,
            snapshot_id: Some(snap.id.clone()),
            last_refresh: Some(snap.generated_at),
            leagues: snap.reports.len(),
            failed_leagues: snap.reports.iter().filter(|r| r.error.is_some()).count(),
            predictions: snap.prediction_count(),
            origins: snap.origin_counts(),
            uptime_secs: uptime,
        },
        None => StatusResponse {
            name: state.app_name.clone(),
            cycle_count: 0,
            snapshot_id: None,
            last_refresh: None,
            leagues: state.leagues.len(),
            failed_leagues: 0,
            predictions: 0,
            origins: OriginCounts::default(),
            uptime_secs: uptime,
        },
    };

    Json(ApiResponse::ok(resp))
}

/// GET /api/leagues
pub async fn get_leagues(State(state): State<AppState>) -> Json<ApiResponse<Vec<LeagueInfo>>> {
    let leagues = state.leagues.iter().map(|l| LeagueInfo::from(*l)).collect();
    Json(ApiResponse::ok(leagues))
}

/// GET /api/predictions
pub async fn get_predictions(State(state): State<AppState>) -> Json<ApiResponse<Vec<Prediction>>> {
    let snapshot = state.snapshot.read().await;
    let predictions = snapshot
        .as_ref()
        .map(|s| {
            s.reports
                .iter()
                .flat_map(|r| r.predictions.iter().cloned())
                .collect()
        })
        .unwrap_or_default();
    Json(ApiResponse::ok(predictions))
}

/// GET /api/predictions/:league
pub async fn get_league_predictions(
    State(state): State<AppState>,
    Path(league_id): Path<String>,
) -> (StatusCode, Json<ApiResponse<LeagueReport>>) {
    let Some(league) = state.league(&league_id) else {
        return (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::err(format!("Unknown league: {league_id}"))),
        );
    };

    let snapshot = state.snapshot.read().await;
    match snapshot.as_ref().and_then(|s| s.report(league.id)) {
        Some(report) => (StatusCode::OK, Json(ApiResponse::ok(report.clone()))),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse::err(format!("No predictions yet for {}", league.id))),
        ),
    }
}

/// GET /api/top?limit=N
pub async fn get_top(
    State(state): State<AppState>,
    query: Result<Query<TopQuery>, QueryRejection>,
) -> (StatusCode, Json<ApiResponse<Vec<Prediction>>>) {
    let query = match query {
        Ok(Query(q)) => q,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::err(format!("Invalid query: {}", rejection.body_text()))),
            )
        }
    };

    let limit = query.limit.unwrap_or(DEFAULT_TOP_LIMIT).min(MAX_TOP_LIMIT);
    let snapshot = state.snapshot.read().await;
    let top = snapshot
        .as_ref()
        .map(|s| s.top_predictions(limit).into_iter().cloned().collect())
        .unwrap_or_default();
    (StatusCode::OK, Json(ApiResponse::ok(top)))
}

/// GET /health
pub async fn health() -> StatusCode {
    StatusCode::OK
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
