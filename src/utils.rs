//! Utility functions for logging setup, string manipulation, and file system checks.
//!
//! This module provides helper functions used by both binaries:
//! - Tracing subscriber initialisation
//! - Slugification and truncation of strings
//! - File system validation for the output location

use itertools::Itertools;
use std::error::Error;
use std::fs as stdfs;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

/// Install the global tracing subscriber.
///
/// Honours `RUST_LOG`, defaulting to `info`. Timestamps are RFC 3339 in UTC.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();
}

/// Convert link text to a slug.
///
/// Lowercases the text and replaces each run of whitespace with a single
/// hyphen. Punctuation is kept as-is.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(slugify_text("Action Sheet"), "action-sheet");
/// ```
pub fn slugify_text(text: &str) -> String {
    text.to_lowercase().split_whitespace().join("-")
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to `max` bytes (backing off to a char boundary) with
/// an ellipsis and byte count indicator appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…(+{} bytes)", &s[..end], s.len() - end)
}

/// Ensure the directory that will hold `path` exists and is writable.
///
/// Creates the parent directory if needed, then writes and removes a probe
/// file next to the target.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or is not writable.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn ensure_parent_writable(path: &Path) -> Result<(), Box<dyn Error>> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => Path::new(".").to_path_buf(),
    };
    fs::create_dir_all(&dir).await?;

    let probe_path = dir.join("..__probe_write__");
    stdfs::File::create(&probe_path)?;
    let _ = stdfs::remove_file(&probe_path);
    info!(dir = %dir.display(), "Output directory is writable");
    Ok(())
}
