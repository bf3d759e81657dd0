//! Persisted chain snapshot.
//!
//! The whole store (user + events + protocol revenue) is written as a single
//! named TOML blob in the platform data directory after every applied
//! mutation. There is no versioning or migration; a snapshot that fails to
//! parse is reported and the session starts fresh.

use crate::chain::store::ChainSnapshot;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

fn state_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hunchboard")
        .join("chain.toml")
}

pub fn load_state() -> Result<Option<ChainSnapshot>> {
    load_from(&state_path())
}

pub fn save_state(snapshot: &ChainSnapshot) -> Result<()> {
    save_to(&state_path(), snapshot)
}

pub fn load_from(path: &Path) -> Result<Option<ChainSnapshot>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read chain state from {}", path.display()))?;
    let snapshot: ChainSnapshot =
        toml::from_str(&contents).with_context(|| "Failed to parse chain state file")?;
    Ok(Some(snapshot))
}

pub fn save_to(path: &Path, snapshot: &ChainSnapshot) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create state directory {}", parent.display()))?;
    }
    let contents =
        toml::to_string_pretty(snapshot).with_context(|| "Failed to serialize chain state")?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write chain state to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::store::ChainStore;
    use crate::chain::types::{Category, SimParams};

    #[test]
    fn test_snapshot_file_round_trip() {
        let mut store = ChainStore::new(SimParams::default());
        store.connect_wallet();
        store
            .create_event(
                "Will it rain in Lisbon tomorrow?",
                250.0,
                Category::News,
                vec!["Yes".to_string(), "No".to_string()],
                "manual",
                None,
            )
            .unwrap();
        store.stake(100.0).unwrap();
        let snapshot = store.snapshot();

        let path = std::env::temp_dir().join(format!("hunchboard-test-{}.toml", std::process::id()));
        save_to(&path, &snapshot).unwrap();
        let loaded = load_from(&path).unwrap().unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn test_missing_file_is_none() {
        let path = std::env::temp_dir().join("hunchboard-test-does-not-exist.toml");
        assert!(load_from(&path).unwrap().is_none());
    }
}
