//! Configuration loading from TOML with environment variable resolution.
//!
//! Reads `config.toml` (or the file named by `SPORTSLINE_CONFIG`) and
//! deserializes into strongly-typed structs. Every section has defaults so
//! a partial file is enough.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;

use crate::leagues;
use crate::scoring::Weights;
use crate::types::SportsError;

/// Env var that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "SPORTSLINE_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Upper bound for any cache TTL (one week).
pub const MAX_CACHE_TTL_SECS: u64 = 7 * 24 * 3600;
/// Upper bounds for the HTTP retry policy.
pub const MAX_HTTP_RETRIES: u32 = 10;
pub const MAX_BACKOFF_BASE_MS: u64 = 60_000;

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub app: AppSection,
    pub http: HttpConfig,
    pub fixtures: FixturesConfig,
    pub markets: MarketsConfig,
    pub engine: EngineConfig,
    pub dashboard: DashboardConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppSection {
    pub name: String,
    pub refresh_interval_secs: u64,
    /// Seed for synthetic fixtures. Unset means a fresh seed per run.
    pub seed: Option<u64>,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            name: "SPORTSLINE".to_string(),
            refresh_interval_secs: 300,
            seed: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
    pub max_retries: u32,
    pub backoff_base_ms: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: "Mozilla/5.0 (compatible; SPORTSLINE/0.1)".to_string(),
            max_retries: 2,
            backoff_base_ms: 500,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct FixturesConfig {
    /// Enabled league ids. Empty means every league in the catalogue.
    pub leagues: Vec<String>,
    pub per_league: usize,
    pub live_enabled: bool,
    /// Serve synthetic fixtures when a live feed returns nothing.
    pub fallback_on_empty: bool,
    pub cache_ttl_secs: u64,
}

impl Default for FixturesConfig {
    fn default() -> Self {
        Self {
            leagues: Vec::new(),
            per_league: 6,
            live_enabled: true,
            fallback_on_empty: true,
            cache_ttl_secs: 300,
        }
    }
}

impl FixturesConfig {
    /// Resolved league ids (all leagues when the list is empty).
    pub fn enabled_leagues(&self) -> Vec<String> {
        if self.leagues.is_empty() {
            leagues::league_ids().into_iter().map(String::from).collect()
        } else {
            self.leagues.iter().map(|l| l.to_lowercase()).collect()
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MarketsConfig {
    pub enabled: bool,
    pub cache_ttl_secs: u64,
    /// Minimum question similarity to accept a market match.
    pub match_threshold: f64,
}

impl Default for MarketsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cache_ttl_secs: 600,
            match_threshold: 0.4,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub weights: Weights,
    pub confidence_floor: f64,
    pub confidence_ceiling: f64,
    /// Confidence points removed per unavailable dimension.
    pub missing_data_penalty: f64,
    pub strong_threshold: f64,
    pub lean_threshold: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            confidence_floor: 50.0,
            confidence_ceiling: 90.0,
            missing_data_penalty: 1.5,
            strong_threshold: 70.0,
            lean_threshold: 58.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DashboardConfig {
    pub enabled: bool,
    pub port: u16,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self { enabled: true, port: 8080 }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub snapshot_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            snapshot_path: "sportsline_snapshot.json".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        Self::from_toml(&contents).with_context(|| format!("Invalid config file: {path}"))
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: AppConfig =
            toml::from_str(contents).context("Failed to parse config TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `SPORTSLINE_CONFIG` or `config.toml`, falling back to
    /// defaults when the default file is absent.
    pub fn load_default() -> Result<Self> {
        match Self::resolve_env(CONFIG_PATH_ENV) {
            Ok(path) => Self::load(&path),
            Err(_) if std::path::Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::load(DEFAULT_CONFIG_PATH)
            }
            Err(_) => Ok(Self::default()),
        }
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> Result<(), SportsError> {
        if self.app.refresh_interval_secs == 0 {
            return Err(SportsError::Config(
                "app.refresh_interval_secs must be > 0".into(),
            ));
        }
        if self.fixtures.per_league == 0 {
            return Err(SportsError::Config("fixtures.per_league must be > 0".into()));
        }

        self.engine.weights.validate()?;

        let e = &self.engine;
        if !(50.0..=100.0).contains(&e.confidence_floor)
            || !(50.0..=100.0).contains(&e.confidence_ceiling)
        {
            return Err(SportsError::Config(
                "confidence floor/ceiling must lie in [50, 100]".into(),
            ));
        }
        if e.confidence_floor >= e.confidence_ceiling {
            return Err(SportsError::Config(format!(
                "confidence_floor ({}) must be below confidence_ceiling ({})",
                e.confidence_floor, e.confidence_ceiling
            )));
        }
        if e.lean_threshold > e.strong_threshold {
            return Err(SportsError::Config(
                "lean_threshold must not exceed strong_threshold".into(),
            ));
        }
        if e.missing_data_penalty < 0.0 || !e.missing_data_penalty.is_finite() {
            return Err(SportsError::Config(
                "missing_data_penalty must be a non-negative number".into(),
            ));
        }
        for (key, ttl) in [
            ("fixtures.cache_ttl_secs", self.fixtures.cache_ttl_secs),
            ("markets.cache_ttl_secs", self.markets.cache_ttl_secs),
        ] {
            if ttl > MAX_CACHE_TTL_SECS {
                return Err(SportsError::Config(format!(
                    "{key} must not exceed {MAX_CACHE_TTL_SECS}"
                )));
            }
        }
        if self.http.max_retries > MAX_HTTP_RETRIES {
            return Err(SportsError::Config(format!(
                "http.max_retries must not exceed {MAX_HTTP_RETRIES}"
            )));
        }
        if self.http.backoff_base_ms > MAX_BACKOFF_BASE_MS {
            return Err(SportsError::Config(format!(
                "http.backoff_base_ms must not exceed {MAX_BACKOFF_BASE_MS}"
            )));
        }
        if !(0.0..=1.0).contains(&self.markets.match_threshold) {
            return Err(SportsError::Config(
                "markets.match_threshold must lie in [0, 1]".into(),
            ));
        }

        for id in &self.fixtures.leagues {
            leagues::league(id)?;
        }
        Ok(())
    }

    /// Resolve an environment variable name to its value.
    pub fn resolve_env(env_name: &str) -> Result<String> {
        std::env::var(env_name)
            .with_context(|| format!("Environment variable not set: {env_name}"))
    }
}
