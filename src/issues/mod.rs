//! Issue filing: one tracking issue per scraped component.
//!
//! The filer reads `components.json`, renders an [`IssueDraft`] per
//! component and hands it to an [`IssueTracker`]. Components are processed
//! strictly one at a time, in document order.
//!
//! # Run Flow
//!
//! 1. Load and validate the document (a missing file is fatal)
//! 2. Unless in dry-run mode, check the tracker is available (fatal if not)
//! 3. For each component, create the issue (or print it in dry-run mode),
//!    pausing `delay` between real invocations
//! 4. Print and return the [`RunSummary`]
//!
//! A failed component is recorded in the summary and the loop moves on;
//! nothing is retried.

pub mod template;
pub mod tracker;

use crate::error::FilerError;
use crate::models::ComponentDocument;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;
use tokio::time::sleep;
use tracing::{error, info, instrument, warn};
use url::Url;

pub use template::{DEFAULT_LABEL, IssueDraft, render_issue};
pub use tracker::{GhCli, IssueTracker};

const RULE_WIDTH: usize = 80;

/// Settings for one filer run.
#[derive(Debug, Clone)]
pub struct FilerConfig {
    /// Path of the scrape result document.
    pub input: PathBuf,
    /// Print issues instead of creating them.
    pub dry_run: bool,
    /// Pause between consecutive real tracker invocations.
    pub delay: Duration,
    /// Label attached to every issue in addition to the source key.
    pub label: String,
}

impl Default for FilerConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("components.json"),
            dry_run: false,
            delay: Duration::from_secs(1),
            label: DEFAULT_LABEL.to_string(),
        }
    }
}

/// Result of filing one component.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IssueOutcome {
    pub success: bool,
    pub url: Option<String>,
    pub error: Option<String>,
    pub dry_run: bool,
}

impl IssueOutcome {
    pub fn created(url: String) -> Self {
        Self {
            success: true,
            url: Some(url),
            ..Self::default()
        }
    }

    pub fn failed(error: String) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }

    pub fn dry_run() -> Self {
        Self {
            success: true,
            dry_run: true,
            ..Self::default()
        }
    }
}

/// Tally of a filer run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub success: usize,
    pub failed: usize,
    pub total: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &IssueOutcome) {
        if outcome.success {
            self.success += 1;
        } else {
            self.failed += 1;
        }
    }

    /// `1` if any component failed, else `0`.
    pub fn exit_code(&self) -> u8 {
        if self.failed > 0 { 1 } else { 0 }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(f, "{rule}")?;
        writeln!(f, "Summary:")?;
        writeln!(f, "Total components: {}", self.total)?;
        writeln!(f, "Successfully created: {}", self.success)?;
        writeln!(f, "Failed: {}", self.failed)?;
        write!(f, "{rule}")
    }
}

/// Read and validate the scrape result document.
///
/// # Errors
///
/// - [`FilerError::MissingInput`] if nothing exists at `path`
/// - [`FilerError::Parse`] if the JSON does not match the document schema
/// - [`FilerError::InvalidComponent`] for an empty name/slug/source or a
///   URL that is not absolute
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn load_document(path: &Path) -> Result<ComponentDocument, FilerError> {
    let text = match fs::read_to_string(path).await {
        Ok(t) => t,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(FilerError::MissingInput(path.to_path_buf()));
        }
        Err(e) => {
            return Err(FilerError::Io {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let doc: ComponentDocument =
        serde_json::from_str(&text).map_err(|e| FilerError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

    for (index, c) in doc.components.iter().enumerate() {
        let reason = if c.name.trim().is_empty() {
            Some("name is empty".to_string())
        } else if c.slug.is_empty() {
            Some("slug is empty".to_string())
        } else if c.source.is_empty() {
            Some("source is empty".to_string())
        } else {
            Url::parse(&c.url)
                .err()
                .map(|e| format!("url `{}` is not absolute: {e}", c.url))
        };
        if let Some(reason) = reason {
            return Err(FilerError::InvalidComponent { index, reason });
        }
    }

    if doc.total_components != doc.components.len() {
        warn!(
            declared = doc.total_components,
            actual = doc.components.len(),
            "totalComponents does not match the component list"
        );
    }

    Ok(doc)
}

/// Print a dry-run preview of one issue.
fn print_dry_run(draft: &IssueDraft) {
    let rule = "=".repeat(RULE_WIDTH);
    println!("\n{rule}");
    println!("DRY RUN - Would create issue:");
    println!("Title: {}", draft.title);
    println!("Labels: {}", draft.labels.join(", "));
    println!("Body:");
    println!("{}", draft.body);
    println!("{rule}");
}

/// File one issue per component in the document at `config.input`.
///
/// The tracker is never touched in dry-run mode, and the input document is
/// loaded before the tracker availability check.
///
/// # Errors
///
/// Only fatal conditions are returned as errors: a missing or invalid
/// document, or an unavailable tracker. Per-component failures are counted
/// in the returned [`RunSummary`].
#[instrument(level = "info", skip_all, fields(input = %config.input.display(), dry_run = config.dry_run))]
pub async fn file_issues<T: IssueTracker>(
    config: &FilerConfig,
    tracker: &T,
) -> Result<RunSummary, FilerError> {
    let doc = load_document(&config.input).await?;
    let total = doc.components.len();
    info!(count = total, "Found components to process");

    if config.dry_run {
        println!("DRY RUN MODE - No issues will be created\n");
    } else {
        tracker.check_available().await?;
    }

    let mut summary = RunSummary {
        total,
        ..RunSummary::default()
    };

    for (i, component) in doc.components.iter().enumerate() {
        let draft = render_issue(component, &config.label);

        let outcome = if config.dry_run {
            print_dry_run(&draft);
            IssueOutcome::dry_run()
        } else {
            if i > 0 && !config.delay.is_zero() {
                sleep(config.delay).await;
            }
            match tracker.create_issue(&draft).await {
                Ok(url) => {
                    info!(name = %component.name, %url, "Created issue");
                    IssueOutcome::created(url)
                }
                Err(e) => {
                    error!(name = %component.name, error = %e, "Failed to create issue");
                    IssueOutcome::failed(e.to_string())
                }
            }
        };
        summary.record(&outcome);
    }

    println!("\n{summary}");
    info!(
        total = summary.total,
        success = summary.success,
        failed = summary.failed,
        "Issue filing complete"
    );
    Ok(summary)
}
