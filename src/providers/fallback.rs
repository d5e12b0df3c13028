//! Shared fallback policy.
//!
//! Every live fetch in the system goes through `fetch_or_fallback`: on
//! failure the error is logged once and substitute data is served, with
//! the reason kept alongside so callers can tag what they return.

use std::future::Future;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tracing::warn;

use super::synthetic::SyntheticProvider;
use super::FixtureProvider;
use crate::types::{DataOrigin, Fixture, League};

/// A value that came either from the live source or from fallback data.
#[derive(Debug, Clone, PartialEq)]
pub enum Sourced<T> {
    Live(T),
    Fallback { value: T, reason: String },
}

impl<T> Sourced<T> {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Sourced::Fallback { .. })
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Sourced::Live(_) => None,
            Sourced::Fallback { reason, .. } => Some(reason),
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Sourced::Live(v) => v,
            Sourced::Fallback { value, .. } => value,
        }
    }
}

/// Await `live`; on error, log and build substitute data with `fallback`.
///
/// Only a failing `fallback` is returned as an error.
pub async fn fetch_or_fallback<T, Fut, F>(source: &str, live: Fut, fallback: F) -> Result<Sourced<T>>
where
    Fut: Future<Output = Result<T>>,
    F: FnOnce(&anyhow::Error) -> Result<T>,
{
    match live.await {
        Ok(value) => Ok(Sourced::Live(value)),
        Err(e) => {
            let reason = format!("{e:#}");
            warn!(source, error = %reason, "Live fetch failed, serving fallback data");
            let value = fallback(&e)?;
            Ok(Sourced::Fallback { value, reason })
        }
    }
}

// ---------------------------------------------------------------------------
// Provider wrapper
// ---------------------------------------------------------------------------

/// Wraps a live provider and serves synthetic slates when it fails.
pub struct FallbackProvider {
    primary: Box<dyn FixtureProvider>,
    synthetic: SyntheticProvider,
    /// Treat an empty live slate as a failure.
    on_empty: bool,
}

impl FallbackProvider {
    pub fn new(primary: Box<dyn FixtureProvider>, synthetic: SyntheticProvider, on_empty: bool) -> Self {
        Self { primary, synthetic, on_empty }
    }
}

#[async_trait]
impl FixtureProvider for FallbackProvider {
    fn name(&self) -> &'static str {
        self.primary.name()
    }

    async fn fetch_fixtures(&self, league: &League) -> Result<Vec<Fixture>> {
        let source = self.primary.name();
        let on_empty = self.on_empty;

        let live = async {
            let fixtures = self.primary.fetch_fixtures(league).await?;
            if fixtures.is_empty() && on_empty {
                return Err(anyhow!("{source} returned no upcoming fixtures for {}", league.id));
            }
            Ok::<_, anyhow::Error>(fixtures)
        };

        let sourced = fetch_or_fallback(source, live, |_| {
            Ok(self.synthetic.generate(league)?)
        })
        .await?;

        Ok(match sourced {
            Sourced::Live(fixtures) => fixtures,
            Sourced::Fallback { value, reason } => value
                .into_iter()
                .map(|mut f| {
                    f.origin = DataOrigin::Fallback {
                        source: source.to_string(),
                        reason: reason.clone(),
                    };
                    f
                })
                .collect(),
        })
    }
}
