//! Merge per-source scrape results into one [`ComponentDocument`].

use crate::models::{Component, ComponentDocument, RawComponent};
use crate::scrapers::{SourceSpec, builtin_sources};
use chrono::Utc;
use itertools::Itertools;
use std::collections::BTreeMap;
use tracing::info;

/// Tag, concatenate and deduplicate scrape batches.
///
/// Batches are concatenated in the order given. Deduplication is keyed on
/// `source-slug` and keeps the first occurrence. `sources` in the returned
/// document counts each batch before deduplication and always lists every
/// built-in source, at zero when it was not scraped.
pub fn aggregate(batches: Vec<(SourceSpec, Vec<RawComponent>)>) -> ComponentDocument {
    let mut sources: BTreeMap<String, usize> =
        builtin_sources().into_iter().map(|s| (s.key, 0)).collect();
    let mut tagged: Vec<Component> = Vec::new();

    for (spec, raw) in batches {
        *sources.entry(spec.key.clone()).or_insert(0) += raw.len();
        tagged.extend(raw.into_iter().map(|r| r.tagged(&spec.key)));
    }

    let before = tagged.len();
    let components = tagged
        .into_iter()
        .unique_by(Component::dedup_key)
        .collect::<Vec<_>>();
    info!(
        before,
        after = components.len(),
        dropped = before - components.len(),
        "Deduplicated components"
    );

    ComponentDocument {
        generated_at: Utc::now(),
        total_components: components.len(),
        sources,
        components,
    }
}
