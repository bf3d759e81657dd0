//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use crate::chain::types::SimParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub sim: SimConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Simulation knobs: confirmation latency and the fixed amounts the mock
/// chain moves around.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    #[serde(default = "default_confirm_delay_ms")]
    pub confirm_delay_ms: u64,
    #[serde(default = "default_seed_balance")]
    pub seed_balance: f64,
    #[serde(default = "default_faucet_amount")]
    pub faucet_amount: f64,
    #[serde(default = "default_creation_fee")]
    pub creation_fee: f64,
    #[serde(default = "default_finalize_reward")]
    pub finalize_reward: f64,
    #[serde(default = "default_dao_vote_threshold")]
    pub dao_vote_threshold: u32,
    /// Enforce strict lifecycle order instead of the default permissive
    /// transitions.
    #[serde(default)]
    pub guarded_transitions: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            confirm_delay_ms: default_confirm_delay_ms(),
            seed_balance: default_seed_balance(),
            faucet_amount: default_faucet_amount(),
            creation_fee: default_creation_fee(),
            finalize_reward: default_finalize_reward(),
            dao_vote_threshold: default_dao_vote_threshold(),
            guarded_transitions: false,
        }
    }
}

impl SimConfig {
    pub fn params(&self) -> SimParams {
        SimParams {
            seed_balance: self.seed_balance,
            faucet_amount: self.faucet_amount,
            creation_fee: self.creation_fee,
            finalize_reward: self.finalize_reward,
            dao_vote_threshold: self.dao_vote_threshold,
            guarded_transitions: self.guarded_transitions,
        }
    }

    pub fn confirm_delay(&self) -> Duration {
        Duration::from_millis(self.confirm_delay_ms)
    }
}

/// UI appearance and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    #[serde(default = "default_max_activity")]
    pub max_activity: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
            max_activity: default_max_activity(),
        }
    }
}

/// Activity ledger settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
        }
    }
}

fn default_confirm_delay_ms() -> u64 {
    1500
}
fn default_seed_balance() -> f64 {
    1000.0
}
fn default_faucet_amount() -> f64 {
    500.0
}
fn default_creation_fee() -> f64 {
    10.0
}
fn default_finalize_reward() -> f64 {
    25.0
}
fn default_dao_vote_threshold() -> u32 {
    3
}
fn default_timestamp_format() -> String {
    "%H:%M:%S".to_string()
}
fn default_max_activity() -> usize {
    500
}
fn default_log_dir() -> String {
    "~/.local/share/hunchboard/ledger".to_string()
}
