//! Auto-refresh state
//!
//! Mirrors the timer contract implemented by the client runtime
//! (`static/js/table-runtime.js`): one timer per table, replaced on start,
//! idempotent stop, and a toggle that flips between the two. The server uses
//! it to render the initial status text so the page is correct before any
//! script runs.

use serde::Serialize;
use std::fmt;

use crate::config::defaults::DEFAULT_AUTO_REFRESH_MS;

/// Whether a table is polling its data source, and how often
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum AutoRefresh {
    #[default]
    Stopped,
    Running { interval_ms: u64 },
}

impl AutoRefresh {
    /// Initial state for a configured interval; `None` or `0` means off
    pub fn from_interval(interval_ms: Option<u64>) -> Self {
        match interval_ms {
            Some(ms) if ms > 0 => AutoRefresh::Running { interval_ms: ms },
            _ => AutoRefresh::Stopped,
        }
    }

    /// Start (or restart) polling; any previous interval is replaced
    pub fn start(self, interval_ms: u64) -> Self {
        Self::from_interval(Some(interval_ms))
    }

    pub fn stop(self) -> Self {
        AutoRefresh::Stopped
    }

    /// Stop when running, otherwise start with `interval_ms` or the default
    pub fn toggle(self, interval_ms: Option<u64>) -> Self {
        match self {
            AutoRefresh::Running { .. } => self.stop(),
            AutoRefresh::Stopped => {
                let interval = interval_ms
                    .filter(|&ms| ms > 0)
                    .unwrap_or(DEFAULT_AUTO_REFRESH_MS);
                self.start(interval)
            }
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, AutoRefresh::Running { .. })
    }

    pub fn interval_ms(&self) -> Option<u64> {
        match self {
            AutoRefresh::Running { interval_ms } => Some(*interval_ms),
            AutoRefresh::Stopped => None,
        }
    }

    /// Text shown in the `{id}-auto-status` element
    pub fn status_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AutoRefresh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Seconds print the way the browser prints `interval / 1000`
            AutoRefresh::Running { interval_ms } => {
                write!(f, "Auto-refresh: ON ({}s)", *interval_ms as f64 / 1000.0)
            }
            AutoRefresh::Stopped => write!(f, "Auto-refresh: OFF"),
        }
    }
}
