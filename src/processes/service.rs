//! Process snapshot service
//!
//! Runs the configured listing command (`ps aux --no-headers` by default)
//! and parses its stdout. Each call spawns a fresh child; nothing is cached.

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tracing::{debug, warn};

use super::parser::parse_process_listing;
use super::record::ProcessRecord;
use crate::config::ProcessConfig;
use crate::errors::{AppError, AppResult};

/// Service for taking snapshots of the running processes
#[derive(Debug, Clone)]
pub struct ProcessSnapshotService {
    command: String,
    args: Vec<String>,
    timeout: Duration,
}

impl ProcessSnapshotService {
    pub fn new(config: &ProcessConfig) -> Self {
        Self {
            command: config.command.clone(),
            args: config.args.clone(),
            timeout: config.timeout,
        }
    }

    /// Run the listing command once and parse its output
    ///
    /// A spawn failure, non-zero exit status or timeout is an
    /// [`AppError::ExternalService`]; an empty listing is an empty vector.
    pub async fn snapshot(&self) -> AppResult<Vec<ProcessRecord>> {
        debug!(command = %self.command, args = ?self.args, "Taking process snapshot");

        let mut cmd = Command::new(&self.command);
        cmd.args(&self.args);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        cmd.kill_on_drop(true);

        let output = tokio::time::timeout(self.timeout, cmd.output())
            .await
            .map_err(|_| {
                warn!(command = %self.command, "Process listing timed out after {:?}", self.timeout);
                AppError::external_service(
                    &self.command,
                    format!("timed out after {:?}", self.timeout),
                )
            })?
            .map_err(|e| {
                warn!(command = %self.command, "Failed to execute process listing: {}", e);
                AppError::external_service(&self.command, format!("failed to execute: {e}"))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(
                command = %self.command,
                code = output.status.code().unwrap_or(-1),
                "Process listing failed: {}",
                stderr.trim()
            );
            return Err(AppError::external_service(
                &self.command,
                format!(
                    "exited with status {}: {}",
                    output.status.code().unwrap_or(-1),
                    stderr.trim()
                ),
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let records = parse_process_listing(&stdout);
        debug!("Parsed {} process records", records.len());
        Ok(records)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    fn service(command: &str, args: &[&str], timeout: Duration) -> ProcessSnapshotService {
        ProcessSnapshotService::new(&ProcessConfig {
            command: command.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            timeout,
        })
    }

    #[tokio::test]
    async fn test_snapshot_parses_command_output() {
        let svc = service(
            "sh",
            &["-c", "printf 'root 1 0.0 0.1 100 10 ? Ss 10:00 0:00 /sbin/init\\nbad\\n'"],
            Duration::from_secs(5),
        );
        let records = assert_ok!(svc.snapshot().await);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].command, "/sbin/init");
    }

    #[tokio::test]
    async fn test_empty_output_is_empty_list() {
        let svc = service("sh", &["-c", "true"], Duration::from_secs(5));
        assert!(assert_ok!(svc.snapshot().await).is_empty());
    }

    #[tokio::test]
    async fn test_non_zero_exit_is_external_service_error() {
        let svc = service("sh", &["-c", "echo boom >&2; exit 3"], Duration::from_secs(5));
        let err = assert_err!(svc.snapshot().await);
        assert!(matches!(err, AppError::ExternalService { .. }));
        assert!(err.to_string().contains("exited with status 3"));
    }

    #[tokio::test]
    async fn test_missing_command_is_external_service_error() {
        let svc = service("definitely-not-a-real-command-xyz", &[], Duration::from_secs(5));
        let err = assert_err!(svc.snapshot().await);
        assert!(matches!(err, AppError::ExternalService { .. }));
    }

    #[tokio::test]
    async fn test_timeout_is_external_service_error() {
        let svc = service("sleep", &["5"], Duration::from_millis(100));
        let err = assert_err!(svc.snapshot().await);
        assert!(err.to_string().contains("timed out"));
    }
}
