use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use crate::errors::{AppError, AppResult};

pub mod defaults;
pub mod duration_serde;

use defaults::*;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub processes: ProcessConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub table: TableDisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Command used to snapshot the process table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessConfig {
    #[serde(default = "default_process_command")]
    pub command: String,
    #[serde(default = "default_process_args")]
    pub args: Vec<String>,
    /// Upper bound on how long a single snapshot may take
    #[serde(default = "default_process_timeout", with = "duration_serde::duration")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Directory that `/md/{path}` requests are resolved against
    #[serde(default = "default_markdown_root")]
    pub markdown_root: PathBuf,
    /// Extension appended when a request has none
    #[serde(default = "default_markdown_extension")]
    pub default_extension: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDisplayConfig {
    #[serde(default = "default_table_height")]
    pub height: String,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Initial auto-refresh period; `0` leaves auto-refresh off on page load
    #[serde(default = "default_auto_refresh_ms")]
    pub auto_refresh_ms: u64,
    /// Choices offered by the interval selector, in seconds
    #[serde(default = "default_refresh_intervals")]
    pub refresh_intervals: Vec<u32>,
    #[serde(default = "default_refresh_interval")]
    pub default_interval: u32,
}

// Web defaults
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

// Process defaults
fn default_process_command() -> String {
    DEFAULT_PROCESS_COMMAND.to_string()
}

fn default_process_args() -> Vec<String> {
    DEFAULT_PROCESS_ARGS.iter().map(|s| s.to_string()).collect()
}

fn default_process_timeout() -> Duration {
    Duration::from_secs(DEFAULT_PROCESS_TIMEOUT_SECS)
}

// Content defaults
fn default_markdown_root() -> PathBuf {
    PathBuf::from(DEFAULT_MARKDOWN_ROOT)
}

fn default_markdown_extension() -> String {
    DEFAULT_MARKDOWN_EXTENSION.to_string()
}

// Table defaults
fn default_table_height() -> String {
    DEFAULT_TABLE_HEIGHT.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_auto_refresh_ms() -> u64 {
    DEFAULT_AUTO_REFRESH_MS
}

fn default_refresh_intervals() -> Vec<u32> {
    DEFAULT_REFRESH_INTERVALS.to_vec()
}

fn default_refresh_interval() -> u32 {
    DEFAULT_REFRESH_INTERVAL_SECS
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            command: default_process_command(),
            args: default_process_args(),
            timeout: default_process_timeout(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            markdown_root: default_markdown_root(),
            default_extension: default_markdown_extension(),
        }
    }
}

impl Default for TableDisplayConfig {
    fn default() -> Self {
        Self {
            height: default_table_height(),
            page_size: default_page_size(),
            auto_refresh_ms: default_auto_refresh_ms(),
            refresh_intervals: default_refresh_intervals(),
            default_interval: default_refresh_interval(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file, writing the defaults out when it does not exist
    pub fn load_from_file(config_file: &str) -> Result<Self> {
        if Path::new(config_file).exists() {
            let contents = std::fs::read_to_string(config_file)?;
            let config: Self = toml::from_str(&contents)?;
            config.validate()?;
            Ok(config)
        } else {
            let default_config = Self::default();
            let contents = toml::to_string_pretty(&default_config)?;
            std::fs::write(config_file, contents)?;
            info!("Created default config file: {}", config_file);
            Ok(default_config)
        }
    }

    /// Reject settings that would produce a broken page or an unusable command
    pub fn validate(&self) -> AppResult<()> {
        if self.processes.command.trim().is_empty() {
            return Err(AppError::configuration("processes.command must not be empty"));
        }
        if self.processes.timeout.is_zero() {
            return Err(AppError::configuration(
                "processes.timeout must be greater than zero",
            ));
        }
        if self.table.page_size == 0 {
            return Err(AppError::configuration(
                "table.page_size must be greater than zero",
            ));
        }
        let intervals = &self.table.refresh_intervals;
        if intervals.is_empty() || intervals.contains(&0) {
            return Err(AppError::configuration(
                "table.refresh_intervals must be a non-empty list of positive values",
            ));
        }
        if !intervals.contains(&self.table.default_interval) {
            return Err(AppError::configuration(format!(
                "table.default_interval ({}) must be one of table.refresh_intervals {:?}",
                self.table.default_interval, intervals
            )));
        }
        Ok(())
    }
}
