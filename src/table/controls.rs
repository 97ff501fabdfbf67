//! Refresh controls rendered next to a table
//!
//! A "Refresh Now" button, an auto-refresh toggle, an interval selector and
//! the status text, all wired to the table's generated functions by name.

use askama::Template;

use super::refresh::AutoRefresh;
use super::validate_identifier;
use super::script::ClientNames;
use crate::config::defaults::{DEFAULT_REFRESH_INTERVALS, DEFAULT_REFRESH_INTERVAL_SECS};
use crate::errors::{TableError, TableResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalOption {
    pub value: u32,
    pub label: String,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "table/controls.html")]
struct ControlsTemplate<'a> {
    names: &'a ClientNames,
    options: &'a [IntervalOption],
    status: String,
}

/// Builder for the controls of one table
#[derive(Debug, Clone)]
pub struct TableControls {
    id: String,
    intervals: Vec<u32>,
    default_interval: u32,
    state: AutoRefresh,
}

impl TableControls {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            intervals: DEFAULT_REFRESH_INTERVALS.to_vec(),
            default_interval: DEFAULT_REFRESH_INTERVAL_SECS,
            state: AutoRefresh::Stopped,
        }
    }

    /// Selectable refresh periods in seconds
    #[must_use]
    pub fn intervals(mut self, seconds: Vec<u32>) -> Self {
        self.intervals = seconds;
        self
    }

    #[must_use]
    pub fn default_interval(mut self, seconds: u32) -> Self {
        self.default_interval = seconds;
        self
    }

    /// State shown in the status element before any script runs
    #[must_use]
    pub fn state(mut self, state: AutoRefresh) -> Self {
        self.state = state;
        self
    }

    /// Selector entries; the running interval wins over the default when listed
    pub fn options(&self) -> Vec<IntervalOption> {
        let selected = self.running_interval_secs().unwrap_or(self.default_interval);
        self.intervals
            .iter()
            .map(|&secs| IntervalOption {
                value: secs,
                label: interval_label(secs),
                selected: secs == selected,
            })
            .collect()
    }

    fn running_interval_secs(&self) -> Option<u32> {
        let ms = self.state.interval_ms()?;
        if ms % 1000 != 0 {
            return None;
        }
        let secs = u32::try_from(ms / 1000).ok()?;
        self.intervals.contains(&secs).then_some(secs)
    }

    pub fn render(&self) -> TableResult<String> {
        validate_identifier(&self.id)?;
        if self.intervals.is_empty() || self.intervals.contains(&0) {
            return Err(TableError::invalid_value(
                "intervals",
                "must be a non-empty list of positive seconds",
            ));
        }
        let names = ClientNames::for_table(&self.id);
        let options = self.options();
        let html = ControlsTemplate {
            names: &names,
            options: &options,
            status: self.state.status_text(),
        }
        .render()?;
        Ok(html)
    }
}

fn interval_label(secs: u32) -> String {
    if secs == 1 {
        "1 second".to_string()
    } else {
        format!("{secs} seconds")
    }
}
