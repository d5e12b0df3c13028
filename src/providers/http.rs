//! Shared HTTP JSON client.
//!
//! One `reqwest` client with timeout and user agent, used by every live
//! provider. Non-2xx responses are errors; 429/5xx and transport errors
//! are retried with exponential backoff.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::HttpConfig;
use crate::types::SportsError;

/// Longest single wait between retries.
const MAX_BACKOFF_MS: u64 = 30_000;

#[derive(Clone)]
pub struct JsonClient {
    http: Client,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl JsonClient {
    pub fn new(cfg: &HttpConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .user_agent(cfg.user_agent.clone())
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            max_retries: cfg.max_retries,
            backoff_base_ms: cfg.backoff_base_ms,
        })
    }

    /// GET `url` with `query` and decode the JSON body.
    ///
    /// `source` names the upstream in logs and errors.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        source: &str,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = backoff_delay_ms(self.backoff_base_ms, attempt);
                debug!(attempt, delay_ms = delay, source, "Retrying request");
                tokio::time::sleep(Duration::from_millis(delay)).await;
            }

            let resp = self.http.get(url).query(query).send().await;

            match resp {
                Ok(response) => {
                    let status = response.status();

                    if status.is_success() {
                        let body = response
                            .text()
                            .await
                            .with_context(|| format!("Failed to read {source} response body"))?;
                        return serde_json::from_str(&body).map_err(|e| {
                            SportsError::Decode {
                                source_name: source.to_string(),
                                message: e.to_string(),
                            }
                            .into()
                        });
                    }

                    let body = response.text().await.unwrap_or_default();
                    let err = SportsError::HttpStatus {
                        source_name: source.to_string(),
                        status: status.as_u16(),
                        body: truncate(&body, 200),
                    };

                    if Self::is_retryable(status.as_u16()) {
                        warn!(status = %status, attempt, source, "Retryable upstream error");
                        last_error = Some(err);
                        continue;
                    }
                    return Err(err.into());
                }
                Err(e) => {
                    warn!(attempt, source, error = %e, "Request failed");
                    last_error = Some(SportsError::Transport {
                        source_name: source.to_string(),
                        message: e.to_string(),
                    });
                }
            }
        }

        match last_error {
            Some(err) => Err(anyhow::Error::new(err)
                .context(format!("{source} failed after {} retries", self.max_retries))),
            None => anyhow::bail!("{source} request never attempted"),
        }
    }

    fn is_retryable(status: u16) -> bool {
        status == 429 || status >= 500
    }
}

/// Exponential backoff for retry `attempt` (1-based), capped.
fn backoff_delay_ms(base_ms: u64, attempt: u32) -> u64 {
    let factor = 2u64.saturating_pow(attempt.saturating_sub(1));
    base_ms.saturating_mul(factor).min(MAX_BACKOFF_MS)
}

fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &s[..end])
}
