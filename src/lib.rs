//! # Component Scraper
//!
//! Collects the component catalogues of UI framework documentation sites
//! and turns each component into a tracking issue.
//!
//! ## Features
//!
//! - Scrapes component links from Material UI and Framework7 through a
//!   WebDriver-controlled browser (or plain HTTP for server-rendered pages)
//! - Deduplicates components per source and writes `components.json`
//! - Files one GitHub issue per component through the `gh` CLI, with a
//!   dry-run mode that only prints what would be created
//!
//! ## Usage
//!
//! ```sh
//! scrape-components                 # writes components.json
//! DRY_RUN=true create-issues        # preview
//! create-issues                     # file the issues
//! ```
//!
//! ## Architecture
//!
//! The two binaries share nothing at runtime; the JSON document is the only
//! hand-off:
//! 1. **Scraping**: each [`scrapers::SourceSpec`] is loaded and its links extracted
//! 2. **Aggregation**: results are tagged, deduplicated and counted ([`aggregate`])
//! 3. **Output**: the document is written to disk ([`outputs::json`])
//! 4. **Filing**: the document is read back and issues are created ([`issues`])

pub mod aggregate;
pub mod cli;
pub mod error;
pub mod issues;
pub mod models;
pub mod outputs;
pub mod scrapers;
pub mod utils;
