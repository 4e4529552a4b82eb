//! Command-line interface definitions for the scraper and the issue filer.
//!
//! Both binaries take their configuration from flags, with environment
//! variables as fallbacks, and turn it into an explicit config value that is
//! passed to the library entry points.

use crate::issues::{DEFAULT_LABEL, FilerConfig};
use crate::scrapers::loader::DEFAULT_USER_AGENT;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

/// Which engine renders the documentation pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LoaderKind {
    /// Drive a browser through a WebDriver server (chromedriver).
    Webdriver,
    /// Plain HTTP GET; only works for server-rendered pages.
    Http,
}

/// Command-line arguments for `scrape-components`.
///
/// # Examples
///
/// ```sh
/// # Scrape every source through a local chromedriver
/// chromedriver --port=9515 &
/// scrape-components
///
/// # Only MUI, over plain HTTP, into a custom file
/// scrape-components --loader http --source mui -o data/components.json
/// ```
#[derive(Parser, Debug)]
#[command(name = "scrape-components", author, version, about = "Scrape UI component lists from MUI and Framework7")]
pub struct ScrapeCli {
    /// Path of the JSON document to write
    #[arg(short, long, env = "COMPONENTS_FILE", default_value = "components.json")]
    pub output: PathBuf,

    /// WebDriver server to drive the browser through
    #[arg(long, env = "WEBDRIVER_URL", default_value = "http://localhost:9515")]
    pub webdriver_url: String,

    /// Page loading engine
    #[arg(long, value_enum, default_value_t = LoaderKind::Webdriver)]
    pub loader: LoaderKind,

    /// Seconds to wait for each page's container element
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Show the browser window instead of running headless
    #[arg(long)]
    pub headed: bool,

    /// User agent sent with every request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Only scrape these sources (repeatable); defaults to all
    #[arg(short, long = "source")]
    pub sources: Vec<String>,
}

impl ScrapeCli {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Command-line arguments for `create-issues`.
///
/// # Examples
///
/// ```sh
/// # Preview every issue without creating anything
/// DRY_RUN=true create-issues
///
/// # Create issues, two seconds apart
/// create-issues --delay-ms 2000
/// ```
#[derive(Parser, Debug)]
#[command(name = "create-issues", author, version, about = "Create one GitHub issue per scraped component")]
pub struct IssuesCli {
    /// Path of the JSON document written by scrape-components
    #[arg(short, long, env = "COMPONENTS_FILE", default_value = "components.json")]
    pub input: PathBuf,

    /// Print the issues instead of creating them; only "true" enables it
    #[arg(
        long,
        env = "DRY_RUN",
        action = ArgAction::Set,
        default_value = "false",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = parse_toggle
    )]
    pub dry_run: bool,

    /// Milliseconds to pause between issue creations
    #[arg(long, env = "ISSUE_DELAY_MS", default_value_t = 1000)]
    pub delay_ms: u64,

    /// GitHub CLI executable
    #[arg(long, env = "GH_BIN", default_value = "gh")]
    pub gh_bin: String,

    /// Label added to every issue besides the source key
    #[arg(long, default_value = DEFAULT_LABEL)]
    pub label: String,
}

impl IssuesCli {
    pub fn filer_config(&self) -> FilerConfig {
        FilerConfig {
            input: self.input.clone(),
            dry_run: self.dry_run,
            delay: Duration::from_millis(self.delay_ms),
            label: self.label.clone(),
        }
    }
}

/// Only the exact string `"true"` switches a toggle on.
fn parse_toggle(s: &str) -> Result<bool, String> {
    Ok(s == "true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toggle() {
        assert_eq!(parse_toggle("true"), Ok(true));
        assert_eq!(parse_toggle("false"), Ok(false));
        assert_eq!(parse_toggle("1"), Ok(false));
        assert_eq!(parse_toggle("TRUE"), Ok(false));
        assert_eq!(parse_toggle(""), Ok(false));
    }

    #[test]
    fn test_scrape_cli_defaults() {
        let cli = ScrapeCli::parse_from(["scrape-components"]);
        assert_eq!(cli.loader, LoaderKind::Webdriver);
        assert_eq!(cli.timeout(), Duration::from_secs(10));
        assert!(!cli.headed);
        assert!(cli.sources.is_empty());
        assert_eq!(cli.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_scrape_cli_flags() {
        let cli = ScrapeCli::parse_from([
            "scrape-components",
            "-o",
            "/tmp/out.json",
            "--loader",
            "http",
            "--timeout-secs",
            "3",
            "-s",
            "mui",
            "--source",
            "framework7",
        ]);
        assert_eq!(cli.output, PathBuf::from("/tmp/out.json"));
        assert_eq!(cli.loader, LoaderKind::Http);
        assert_eq!(cli.timeout(), Duration::from_secs(3));
        assert_eq!(cli.sources, vec!["mui".to_string(), "framework7".to_string()]);
    }

    #[test]
    fn test_issues_cli_flags() {
        let cli = IssuesCli::parse_from([
            "create-issues",
            "-i",
            "data/components.json",
            "--dry-run",
            "--delay-ms",
            "250",
            "--gh-bin",
            "/usr/local/bin/gh",
        ]);
        assert!(cli.dry_run);
        assert_eq!(cli.gh_bin, "/usr/local/bin/gh");

        let config = cli.filer_config();
        assert_eq!(config.input, PathBuf::from("data/components.json"));
        assert_eq!(config.delay, Duration::from_millis(250));
        assert_eq!(config.label, "component");
    }

    #[test]
    fn test_issues_cli_explicit_toggle_value() {
        let cli = IssuesCli::parse_from(["create-issues", "--dry-run=yes"]);
        assert!(!cli.dry_run);
        let cli = IssuesCli::parse_from(["create-issues", "--dry-run=true"]);
        assert!(cli.dry_run);
    }
}
