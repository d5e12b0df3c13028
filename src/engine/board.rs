//! League board: the refresh cycle.
//!
//! For every enabled league: fetch the slate (through the fixture cache),
//! analyse it, and collect the reports into a snapshot. Leagues refresh
//! concurrently and one failing league never aborts the cycle.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use futures::future::join_all;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use super::predictor::UniversalPredictionEngine;
use crate::cache::TtlCache;
use crate::config::AppConfig;
use crate::leagues;
use crate::providers::http::JsonClient;
use crate::providers::polymarket::{MarketLookup, NoMarkets, PolymarketClient};
use crate::providers::ProviderRegistry;
use crate::rosters;
use crate::types::{Fixture, League, LeagueReport, OriginCounts, Snapshot, SportsError};

pub struct LeagueBoard {
    registry: ProviderRegistry,
    engine: UniversalPredictionEngine,
    leagues: Vec<&'static League>,
    cache: Mutex<TtlCache<Vec<Fixture>>>,
    latest: RwLock<Option<Snapshot>>,
    cycle: AtomicU64,
    total_fetches: AtomicU64,
    cache_hits: AtomicU64,
}

impl LeagueBoard {
    /// Build a board for `league_ids`, validating each id and roster.
    pub fn new(
        registry: ProviderRegistry,
        engine: UniversalPredictionEngine,
        league_ids: &[String],
        cache_ttl_secs: u64,
    ) -> Result<Self> {
        let mut enabled = Vec::with_capacity(league_ids.len());
        for id in league_ids {
            let league = leagues::league(id)?;
            rosters::validate_roster(league.id, league.roster)?;
            enabled.push(league);
        }

        Ok(Self {
            registry,
            engine,
            leagues: enabled,
            cache: Mutex::new(TtlCache::from_secs(cache_ttl_secs)),
            latest: RwLock::new(None),
            cycle: AtomicU64::new(0),
            total_fetches: AtomicU64::new(0),
            cache_hits: AtomicU64::new(0),
        })
    }

    /// Wire providers, market lookup and engine from configuration.
    pub fn from_config(cfg: &AppConfig) -> Result<Self> {
        let registry =
            ProviderRegistry::from_config(cfg).context("Failed to initialise fixture providers")?;

        let markets: Arc<dyn MarketLookup> = if cfg.markets.enabled {
            let client = JsonClient::new(&cfg.http)?;
            Arc::new(PolymarketClient::new(client, &cfg.markets))
        } else {
            info!("Market lookup disabled");
            Arc::new(NoMarkets)
        };

        let engine = UniversalPredictionEngine::new(cfg.engine.clone(), markets);
        Self::new(
            registry,
            engine,
            &cfg.fixtures.enabled_leagues(),
            cfg.fixtures.cache_ttl_secs,
        )
    }

    pub fn leagues(&self) -> &[&'static League] {
        &self.leagues
    }

    /// Refresh every enabled league and publish a new snapshot.
    pub async fn refresh_all(&self) -> Snapshot {
        self.cache.lock().await.evict_expired();

        let reports = join_all(self.leagues.iter().map(|league| async move {
            match self.refresh(league).await {
                Ok(report) => report,
                Err(e) => {
                    warn!(league = league.id, error = %format!("{e:#}"), "League refresh failed");
                    LeagueReport::failed(league, format!("{e:#}"))
                }
            }
        }))
        .await;

        let cycle = self.cycle.fetch_add(1, Ordering::Relaxed) + 1;
        let snapshot = Snapshot::new(cycle, reports);

        info!(
            cycle,
            leagues = snapshot.reports.len(),
            predictions = snapshot.prediction_count(),
            total_fetches = self.total_fetches(),
            cache_hits = self.cache_hits(),
            "Refresh cycle complete"
        );

        *self.latest.write().await = Some(snapshot.clone());
        snapshot
    }

    /// Resume from a persisted snapshot: it becomes the latest snapshot and
    /// cycle numbering continues after it.
    pub async fn restore(&self, snapshot: Snapshot) {
        self.cycle.fetch_max(snapshot.cycle, Ordering::Relaxed);
        info!(cycle = snapshot.cycle, "Board resumed from snapshot");
        *self.latest.write().await = Some(snapshot);
    }

    /// Refresh a single enabled league by id.
    pub async fn refresh_league(&self, id: &str) -> Result<LeagueReport> {
        let league = self
            .leagues
            .iter()
            .copied()
            .find(|l| l.id.eq_ignore_ascii_case(id))
            .ok_or_else(|| SportsError::UnknownLeague(id.to_string()))?;
        self.refresh(league).await
    }

    /// The last snapshot produced by `refresh_all`.
    pub async fn snapshot(&self) -> Option<Snapshot> {
        self.latest.read().await.clone()
    }

    async fn refresh(&self, league: &'static League) -> Result<LeagueReport> {
        let fixtures = self.fixtures_for(league).await?;
        let predictions = self.engine.analyze_slate(&fixtures).await;
        let origins = OriginCounts::tally(fixtures.iter().map(|f| &f.origin));

        debug!(
            league = league.id,
            fixtures = fixtures.len(),
            live = origins.live,
            fallback = origins.fallback,
            "League analysed"
        );

        Ok(LeagueReport {
            league_id: league.id.to_string(),
            league_name: league.name.to_string(),
            sport: league.sport,
            predictions,
            origins,
            error: None,
            refreshed_at: chrono::Utc::now(),
        })
    }

    /// Cached slate for `league`, fetching on a miss.
    async fn fixtures_for(&self, league: &League) -> Result<Vec<Fixture>> {
        if let Some(cached) = self.cache.lock().await.get(league.id) {
            debug!(league = league.id, "Fixture cache hit");
            self.cache_hits.fetch_add(1, Ordering::Relaxed);
            return Ok(cached.clone());
        }

        let provider = self.registry.provider_for(league);
        let fixtures = provider
            .fetch_fixtures(league)
            .await
            .with_context(|| format!("{} fetch failed for {}", provider.name(), league.id))?;
        self.total_fetches.fetch_add(1, Ordering::Relaxed);

        self.cache.lock().await.insert(league.id, fixtures.clone());
        Ok(fixtures)
    }

    // -- Accessors for monitoring ----------------------------------------

    /// Provider fetches made (cache misses).
    pub fn total_fetches(&self) -> u64 {
        self.total_fetches.load(Ordering::Relaxed)
    }

    pub fn cache_hits(&self) -> u64 {
        self.cache_hits.load(Ordering::Relaxed)
    }

    /// Share of slate requests served from cache.
    pub fn cache_hit_rate(&self) -> f64 {
        let hits = self.cache_hits();
        let total = hits + self.total_fetches();
        if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        }
    }

    pub fn cycles(&self) -> u64 {
        self.cycle.load(Ordering::Relaxed)
    }
}
