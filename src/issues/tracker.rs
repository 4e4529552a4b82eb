//! Issue tracker backends.
//!
//! [`IssueTracker`] is the seam between the filer loop and the process that
//! actually opens issues. The production backend, [`GhCli`], shells out to
//! the GitHub CLI once per component.

use super::IssueDraft;
use crate::error::FilerError;
use crate::utils::truncate_for_log;
use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command;
use tracing::{debug, instrument, warn};

/// Trait for something that can open issues.
pub trait IssueTracker {
    /// Verify the backend can be used at all. Called once, before any issue
    /// is created.
    async fn check_available(&self) -> Result<(), FilerError>;

    /// Open one issue and return its URL.
    async fn create_issue(&self, draft: &IssueDraft) -> Result<String, FilerError>;
}

/// GitHub CLI backend (`gh issue create`).
///
/// Title, body and labels are passed as separate argv entries, so no shell
/// quoting is involved. `gh` resolves the target repository from the
/// working directory, as it does interactively.
#[derive(Debug, Clone)]
pub struct GhCli {
    bin: String,
}

impl GhCli {
    /// # Arguments
    ///
    /// * `bin` - program name or path of the GitHub CLI, usually `"gh"`
    pub fn new(bin: impl Into<String>) -> Self {
        Self { bin: bin.into() }
    }
}

impl Default for GhCli {
    fn default() -> Self {
        Self::new("gh")
    }
}

impl IssueTracker for GhCli {
    #[instrument(level = "info", skip_all, fields(bin = %self.bin))]
    async fn check_available(&self) -> Result<(), FilerError> {
        let status = Command::new(&self.bin)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;

        match status {
            Ok(s) if s.success() => {
                debug!("Issue tracker CLI is available");
                Ok(())
            }
            Ok(s) => {
                warn!(status = %s, "Issue tracker CLI exited unsuccessfully");
                Err(FilerError::TrackerUnavailable {
                    bin: self.bin.clone(),
                })
            }
            Err(e) => {
                warn!(error = %e, "Issue tracker CLI could not be started");
                Err(FilerError::TrackerUnavailable {
                    bin: self.bin.clone(),
                })
            }
        }
    }

    #[instrument(level = "info", skip_all, fields(title = %draft.title))]
    async fn create_issue(&self, draft: &IssueDraft) -> Result<String, FilerError> {
        let t0 = Instant::now();
        let output = Command::new(&self.bin)
            .arg("issue")
            .arg("create")
            .arg("--title")
            .arg(&draft.title)
            .arg("--body")
            .arg(&draft.body)
            .arg("--label")
            .arg(draft.labels.join(","))
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| FilerError::Tracker(format!("failed to run {}: {e}", self.bin)))?;
        let elapsed_ms = t0.elapsed().as_millis() as u64;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(
                elapsed_ms,
                status = %output.status,
                stderr = %truncate_for_log(&stderr, 300),
                "gh issue create failed"
            );
            let message = if stderr.is_empty() {
                format!("{} exited with {}", self.bin, output.status)
            } else {
                stderr
            };
            return Err(FilerError::Tracker(message));
        }

        let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
        debug!(elapsed_ms, %url, "gh issue create succeeded");
        Ok(url)
    }
}
