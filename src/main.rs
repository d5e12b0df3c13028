//! SPORTSLINE: sports prediction board
//!
//! Entry point. Loads configuration, initialises structured logging,
//! restores the last snapshot, starts the dashboard and runs the
//! refresh loop with graceful shutdown.

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

use sportsline::config;
use sportsline::dashboard::{self, DashboardState};
use sportsline::engine::LeagueBoard;
use sportsline::storage;
use sportsline::types::Snapshot;

const BANNER: &str = r#"
 ____  ____   ___  ____ _____ ____  _     ___ _   _ _____
/ ___||  _ \ / _ \|  _ \_   _/ ___|| |   |_ _| \ | | ____|
\___ \| |_) | | | | |_) || | \___ \| |    | ||  \| |  _|
 ___) |  __/| |_| |  _ < | |  ___) | |___ | || |\  | |___
|____/|_|    \___/|_| \_\|_| |____/|_____|___|_| \_|_____|

  Multi-sport fixture feeds and 8-dimension predictions
  v0.1.0
"#;

/// How many picks to log after each cycle.
const TOP_PICKS_LOGGED: usize = 5;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    let cfg = config::AppConfig::load_default()?;

    init_logging();

    println!("{BANNER}");
    info!(
        name = %cfg.app.name,
        refresh_interval_secs = cfg.app.refresh_interval_secs,
        leagues = cfg.fixtures.enabled_leagues().len(),
        live = cfg.fixtures.live_enabled,
        markets = cfg.markets.enabled,
        seed = ?cfg.app.seed,
        "SPORTSLINE starting up"
    );

    // -- Initialise components -------------------------------------------

    let board = LeagueBoard::from_config(&cfg)?;
    let state = Arc::new(DashboardState::new(
        cfg.app.name.clone(),
        board.leagues().to_vec(),
    ));

    let snapshot_path = cfg.storage.snapshot_path.as_str();
    match storage::load_snapshot(Some(snapshot_path)) {
        Ok(Some(snap)) => {
            info!(cycle = snap.cycle, predictions = snap.prediction_count(), "Restored last snapshot");
            board.restore(snap.clone()).await;
            state.publish(snap).await;
        }
        Ok(None) => {}
        Err(e) => warn!(error = %format!("{e:#}"), "Ignoring unreadable snapshot"),
    }

    if cfg.dashboard.enabled {
        dashboard::spawn_dashboard(state.clone(), cfg.dashboard.port).await?;
    }

    // -- Main loop -------------------------------------------------------

    let mut interval = tokio::time::interval(Duration::from_secs(cfg.app.refresh_interval_secs));
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    info!(
        interval_secs = cfg.app.refresh_interval_secs,
        "Entering refresh loop. Press Ctrl+C to stop."
    );

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let snapshot = board.refresh_all().await;
                log_snapshot(&snapshot);

                if let Err(e) = storage::save_snapshot(&snapshot, Some(snapshot_path)) {
                    error!(error = %format!("{e:#}"), "Failed to save snapshot");
                }
                state.publish(snapshot).await;
            }
            _ = &mut shutdown => {
                info!("Shutdown signal received.");
                break;
            }
        }
    }

    info!(
        cycles = board.cycles(),
        fetches = board.total_fetches(),
        cache_hit_rate = format!("{:.0}%", board.cache_hit_rate() * 100.0),
        "SPORTSLINE shut down cleanly."
    );

    Ok(())
}

/// Log a cycle summary, any failed leagues and the top picks.
fn log_snapshot(snapshot: &Snapshot) {
    let origins = snapshot.origin_counts();
    info!(
        cycle = snapshot.cycle,
        leagues = snapshot.reports.len(),
        predictions = snapshot.prediction_count(),
        live = origins.live,
        fallback = origins.fallback,
        synthetic = origins.synthetic,
        "Cycle complete"
    );

    for report in &snapshot.reports {
        if let Some(err) = &report.error {
            warn!(league = %report.league_id, error = %err, "League unavailable this cycle");
        }
    }

    for (rank, p) in snapshot.top_predictions(TOP_PICKS_LOGGED).iter().enumerate() {
        info!(
            rank = rank + 1,
            league = %p.fixture.league,
            origin = %p.fixture.origin,
            "{}",
            p.verdict_line
        );
    }
}

/// Initialise the `tracing` subscriber.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("sportsline=info"));

    let json_logging = std::env::var("SPORTSLINE_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    }
}
