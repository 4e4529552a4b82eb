//! Data models for scraped components and the document that carries them.
//!
//! This module defines the core data structures shared by both binaries:
//! - [`RawComponent`]: a link as extracted from one documentation page
//! - [`Component`]: a raw record tagged with the source it came from
//! - [`ComponentDocument`]: the `components.json` file written by the scraper
//!   and read back by the issue filer
//!
//! The document uses camelCase keys on disk, hence the `rename_all`
//! attribute on [`ComponentDocument`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A component link as extracted from a documentation page.
///
/// Records are unvalidated and kept in DOM order. They only become
/// [`Component`]s once the aggregator tags them with a source key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawComponent {
    /// The trimmed text content of the anchor.
    pub name: String,
    /// Identifier derived from the href or, failing that, from the name.
    pub slug: String,
    /// Absolute URL of the component's documentation page.
    pub url: String,
    /// Fixed label of the site the link came from.
    pub category: String,
}

impl RawComponent {
    /// Attach the source key, producing a [`Component`].
    pub fn tagged(self, source: &str) -> Component {
        Component {
            name: self.name,
            slug: self.slug,
            url: self.url,
            category: self.category,
            source: source.to_string(),
        }
    }
}

/// A scraped UI component, ready to be written to `components.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Component {
    /// Display text of the link.
    pub name: String,
    /// Slug used together with `source` as the deduplication key.
    pub slug: String,
    /// Absolute link to the documentation page.
    pub url: String,
    /// e.g. `"MUI Component"` or `"Framework7 Component"`.
    pub category: String,
    /// Short source key (`"mui"`, `"framework7"`).
    pub source: String,
}

impl Component {
    /// Uniqueness key: `source-slug`.
    pub fn dedup_key(&self) -> String {
        format!("{}-{}", self.source, self.slug)
    }
}

/// The scrape result written to disk on every scraper run.
///
/// # JSON Schema
///
/// ```text
/// {
///   "generatedAt": "2025-05-06T20:30:00.123Z",
///   "totalComponents": 2,
///   "sources": { "framework7": 1, "mui": 1 },
///   "components": [ { "name": ..., "slug": ..., "url": ..., "category": ..., "source": ... } ]
/// }
/// ```
///
/// `sources` counts records per source *before* deduplication, while
/// `totalComponents` is the length of `components`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDocument {
    pub generated_at: DateTime<Utc>,
    pub total_components: usize,
    pub sources: BTreeMap<String, usize>,
    pub components: Vec<Component>,
}
