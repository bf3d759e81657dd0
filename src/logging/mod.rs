//! Activity ledger on disk.
//!
//! When enabled, appends submitted/confirmed/rejected transactions to daily
//! ledger files named `ledger_<date>.log` in the configured directory
//! (default: `~/.local/share/hunchboard/ledger/`). Welcome and help chrome
//! from the feed is not written.

use crate::app::state::{ActivityEntry, ActivityKind};
use crate::config::model::LoggingConfig;
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Writes activity entries to per-day ledger files.
///
/// File handles are cached for the lifetime of the logger to avoid repeated
/// opens. Falls back to `/dev/null` if a ledger file cannot be created.
pub struct ActivityLogger {
    enabled: bool,
    log_dir: String,
    file_handles: HashMap<String, fs::File>,
}

impl ActivityLogger {
    pub fn new(config: &LoggingConfig) -> Self {
        Self {
            enabled: config.enabled,
            log_dir: config.log_dir.clone(),
            file_handles: HashMap::new(),
        }
    }

    /// Append an entry to today's ledger file. No-op if logging is disabled
    /// or the entry is UI chrome.
    pub fn log_entry(&mut self, entry: &ActivityEntry) {
        if !self.enabled {
            return;
        }

        let tag = match entry.kind {
            ActivityKind::Submitted => ">>",
            ActivityKind::Confirmed => "==",
            ActivityKind::Error => "!!",
            ActivityKind::System => return,
        };
        let line = format!("[{}] {} {}", entry.timestamp, tag, entry.text);

        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        let filename = format!("ledger_{}.log", date);

        // Expand ~ in log_dir
        let log_dir = if self.log_dir.starts_with('~') {
            if let Some(home) = dirs::home_dir() {
                home.join(&self.log_dir[2..])
            } else {
                PathBuf::from(&self.log_dir)
            }
        } else {
            PathBuf::from(&self.log_dir)
        };

        let filepath = log_dir.join(&filename);

        // Get or create file handle
        let handle = self.file_handles.entry(filename).or_insert_with(|| {
            let _ = fs::create_dir_all(&log_dir);
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&filepath)
                .unwrap_or_else(|_| {
                    // Fallback: a sink that goes nowhere
                    OpenOptions::new()
                        .write(true)
                        .open(if cfg!(unix) { "/dev/null" } else { "NUL" })
                        .unwrap()
                })
        });

        let _ = writeln!(handle, "{}", line);
    }
}
