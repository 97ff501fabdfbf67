use serde::{Deserialize, Serialize};

/// One row of `ps aux` output
///
/// Field names match the column fields of the process table, so the JSON
/// array returned by the API drops straight into the widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessRecord {
    pub user: String,
    pub pid: u32,
    /// CPU usage percent
    pub cpu: f64,
    /// Memory usage percent
    pub mem: f64,
    /// Virtual memory size in KiB
    pub vsz: u64,
    /// Resident set size in KiB
    pub rss: u64,
    /// Controlling terminal, `?` when detached
    pub tty: String,
    pub stat: String,
    pub start: String,
    pub time: String,
    /// Full command line, may contain whitespace
    pub command: String,
}
