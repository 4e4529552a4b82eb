//! Output generation for scrape results.
//!
//! # Submodules
//!
//! - [`json`]: Writes the [`ComponentDocument`](crate::models::ComponentDocument)
//!   to `components.json` for the issue filer
//!
//! # Output Structure
//!
//! ```text
//! ./
//! └── components.json   # overwritten on every scraper run
//! ```

pub mod json;
