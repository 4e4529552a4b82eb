//! JSON output for the scrape result document.
//!
//! The document is pretty-printed with two-space indentation and always
//! replaces whatever was at the target path; runs are never merged.

use crate::models::ComponentDocument;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

/// Write a [`ComponentDocument`] to `path`, overwriting any previous content.
///
/// # Returns
///
/// `Ok(())` on success, or an error if serialization or the write fails.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn write_document(doc: &ComponentDocument, path: &Path) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(doc)?;

    info!(components = doc.total_components, "Writing JSON");
    if let Err(e) = fs::write(path, json).await {
        error!(error = %e, "Failed to write components file");
        return Err(e.into());
    }
    info!("Wrote components file");

    Ok(())
}
