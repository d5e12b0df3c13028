//! Persistence layer.
//!
//! Saves and loads the latest snapshot to/from a JSON file so the dashboard
//! has something to serve right after a restart.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};

use crate::types::{Snapshot, SportsError};

/// Default snapshot file path.
const DEFAULT_SNAPSHOT_FILE: &str = "sportsline_snapshot.json";

/// Save a snapshot to a JSON file.
pub fn save_snapshot(snapshot: &Snapshot, path: Option<&str>) -> Result<()> {
    let path = path.unwrap_or(DEFAULT_SNAPSHOT_FILE);
    let json = serde_json::to_string_pretty(snapshot)
        .context("Failed to serialise snapshot")?;

    std::fs::write(path, &json)
        .with_context(|| format!("Failed to write snapshot to {path}"))?;

    debug!(path, cycle = snapshot.cycle, "Snapshot saved");
    Ok(())
}

/// Load a snapshot from a JSON file.
/// Returns None if the file doesn't exist (fresh start).
pub fn load_snapshot(path: Option<&str>) -> Result<Option<Snapshot>> {
    let path = path.unwrap_or(DEFAULT_SNAPSHOT_FILE);

    if !Path::new(path).exists() {
        info!(path, "No saved snapshot found, starting fresh");
        return Ok(None);
    }

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot from {path}"))?;

    let snapshot: Snapshot = serde_json::from_str(&json)
        .map_err(|e| SportsError::Storage(format!("Failed to parse snapshot from {path}: {e}")))?;

    info!(
        path,
        cycle = snapshot.cycle,
        predictions = snapshot.prediction_count(),
        "Snapshot loaded from disk"
    );

    Ok(Some(snapshot))
}

/// Delete the snapshot file.
pub fn delete_snapshot(path: Option<&str>) -> Result<()> {
    let path = path.unwrap_or(DEFAULT_SNAPSHOT_FILE);
    if Path::new(path).exists() {
        std::fs::remove_file(path)
            .with_context(|| format!("Failed to delete snapshot file {path}"))?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::engine::UniversalPredictionEngine;
    use crate::providers::polymarket::NoMarkets;
    use crate::types::{Fixture, LeagueReport, OriginCounts, Sport};
    use std::sync::Arc;

    fn temp_path() -> String {
        let mut p = std::env::temp_dir();
        p.push(format!("sportsline_test_snapshot_{}.json", uuid::Uuid::new_v4()));
        p.to_string_lossy().to_string()
    }

    fn snapshot() -> Snapshot {
        let engine = UniversalPredictionEngine::new(EngineConfig::default(), Arc::new(NoMarkets));
        let fixture = Fixture::sample();
        let report = LeagueReport {
            league_id: "epl".into(),
            league_name: "Premier League".into(),
            sport: Sport::Soccer,
            predictions: vec![engine.score_fixture(&fixture, None)],
            origins: OriginCounts::tally([&fixture.origin]),
            error: None,
            refreshed_at: chrono::Utc::now(),
        };
        Snapshot::new(7, vec![report])
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path();
        let snap = snapshot();
        save_snapshot(&snap, Some(&path)).unwrap();

        let loaded = load_snapshot(Some(&path)).unwrap().unwrap();
        assert_eq!(loaded.id, snap.id);
        assert_eq!(loaded.cycle, 7);
        assert_eq!(loaded.prediction_count(), 1);

        let before = &snap.reports[0].predictions[0];
        let after = &loaded.reports[0].predictions[0];
        assert_eq!(after.verdict_line, before.verdict_line);
        assert_eq!(after.dimensions.len(), 8);

        delete_snapshot(Some(&path)).unwrap();
        assert!(load_snapshot(Some(&path)).unwrap().is_none());
    }

    #[test]
    fn test_load_nonexistent() {
        let path = "/tmp/sportsline_nonexistent_snapshot_12345.json";
        assert!(load_snapshot(Some(path)).unwrap().is_none());
    }

    #[test]
    fn test_load_corrupt_file_errors() {
        let path = temp_path();
        std::fs::write(&path, "{ not json").unwrap();
        let err = load_snapshot(Some(&path)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SportsError>(),
            Some(SportsError::Storage(msg)) if msg.contains(&path)
        ));
        delete_snapshot(Some(&path)).unwrap();
    }

    #[test]
    fn test_delete_missing_is_ok() {
        assert!(delete_snapshot(Some("/tmp/sportsline_never_written.json")).is_ok());
    }
}
