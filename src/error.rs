//! Error types for the scraper and the issue filer.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while loading or reading a single documentation page.
///
/// These never abort a scrape run: the caller logs them and treats the
/// source as having produced zero components.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("failed to start browser session: {0}")]
    Session(#[from] fantoccini::error::NewSessionError),

    #[error("browser command failed: {0}")]
    Browser(#[from] fantoccini::error::CmdError),

    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("selector `{selector}` did not appear on {url}")]
    SelectorNotFound { selector: String, url: String },

    #[error("invalid selector `{0}`")]
    InvalidSelector(String),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

/// Errors raised by the issue filer.
///
/// `MissingInput`, `Parse`, `InvalidComponent` and `TrackerUnavailable` are
/// fatal for a run. `Tracker` is recorded per component and the run moves on.
#[derive(Debug, Error)]
pub enum FilerError {
    #[error("{} not found; run `scrape-components` first to generate the components data", .0.display())]
    MissingInput(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a valid component document: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("component #{index} is invalid: {reason}")]
    InvalidComponent { index: usize, reason: String },

    #[error("`{bin}` is not installed or not available; install it from https://cli.github.com/")]
    TrackerUnavailable { bin: String },

    #[error("issue creation failed: {0}")]
    Tracker(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_message_has_hint() {
        let e = FilerError::MissingInput(PathBuf::from("components.json"));
        let msg = e.to_string();
        assert!(msg.contains("components.json not found"));
        assert!(msg.contains("scrape-components"));
    }

    #[test]
    fn test_tracker_unavailable_message_has_install_hint() {
        let e = FilerError::TrackerUnavailable { bin: "gh".to_string() };
        assert!(e.to_string().contains("https://cli.github.com/"));
    }

    #[test]
    fn test_selector_not_found_message() {
        let e = ScrapeError::SelectorNotFound {
            selector: "nav".to_string(),
            url: "https://mui.com/components/".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "selector `nav` did not appear on https://mui.com/components/"
        );
    }
}
