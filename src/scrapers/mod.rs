//! Component index scrapers for UI framework documentation sites.
//!
//! Every site is described by a [`SourceSpec`]: where to go, what to wait
//! for, which anchors to collect and how to turn an anchor into a slug.
//! Scraping is a two-step pattern:
//!
//! 1. **Loading**: a [`PageLoader`] renders the page and returns its HTML
//! 2. **Extracting**: [`extract_components`] walks the matching anchors in
//!    DOM order and builds [`RawComponent`]s
//!
//! # Supported Sources
//!
//! | Source | Module | Wait for | Notes |
//! |--------|--------|----------|-------|
//! | Material UI | [`mui`] | `nav` | Slug captured from `/material-ui/react-{slug}/` |
//! | Framework7 | [`framework7`] | `.page-content` | Slug is the last path segment, or the slugified text |
//!
//! Adding a site means adding a module with a `source()` constructor and
//! listing it in [`builtin_sources`].
//!
//! # Failure Handling
//!
//! A source that fails to load (connection refused, navigation error,
//! container never appearing) is logged and yields zero components; the run
//! carries on with the next source.

pub mod framework7;
pub mod loader;
pub mod mui;

use crate::error::ScrapeError;
use crate::models::RawComponent;
use crate::utils::slugify_text;
use regex::Regex;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

pub use loader::{HttpLoader, PageLoader, WebDriverLoader};

/// How a slug is derived from an anchor.
#[derive(Debug, Clone)]
pub enum SlugRule {
    /// Slug is capture group 1 of the pattern applied to the href. Anchors
    /// whose href does not match are dropped.
    PathCapture(Regex),
    /// Href must be site-relative (start with a single `/`). Slug is the last
    /// non-empty path segment, or the slugified link text when the path has
    /// none.
    LastSegment,
}

impl SlugRule {
    /// Derive a slug, or `None` if the anchor should be skipped.
    pub fn derive(&self, href: &str, text: &str) -> Option<String> {
        match self {
            SlugRule::PathCapture(pattern) => pattern
                .captures(href)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string()),
            SlugRule::LastSegment => {
                if !href.starts_with('/') || href.starts_with("//") {
                    return None;
                }
                let path = href.split('?').next().unwrap_or(href);
                let slug = path
                    .split('/')
                    .filter(|segment| !segment.is_empty())
                    .next_back()
                    .map(str::to_string)
                    .unwrap_or_else(|| slugify_text(text));
                Some(slug)
            }
        }
    }
}

/// Everything needed to scrape one documentation site.
#[derive(Debug, Clone)]
pub struct SourceSpec {
    /// Short tag stored on each component (`"mui"`).
    pub key: String,
    /// Framework name used in issue bodies (`"Material UI (MUI)"`).
    pub display_name: String,
    /// Page listing the components.
    pub page_url: String,
    /// Base that hrefs are resolved against.
    pub base_url: String,
    /// Container that must appear before the page counts as loaded.
    pub wait_selector: String,
    /// Anchors to collect.
    pub link_selector: String,
    /// Category label stored on each component.
    pub category: String,
    pub slug_rule: SlugRule,
}

/// All known sources, in scrape order.
pub fn builtin_sources() -> Vec<SourceSpec> {
    vec![mui::source(), framework7::source()]
}

/// Resolve source keys against [`builtin_sources`], keeping registry order.
///
/// An empty `keys` slice selects every source.
///
/// # Errors
///
/// Returns the first key that names no known source.
pub fn select_sources(keys: &[String]) -> Result<Vec<SourceSpec>, String> {
    let all = builtin_sources();
    if let Some(unknown) = keys.iter().find(|k| !all.iter().any(|s| &s.key == *k)) {
        return Err(unknown.clone());
    }
    Ok(all
        .into_iter()
        .filter(|s| keys.is_empty() || keys.contains(&s.key))
        .collect())
}

/// Framework display name for a source key, if the key is known.
pub fn display_name_for(key: &str) -> Option<String> {
    builtin_sources()
        .into_iter()
        .find(|s| s.key == key)
        .map(|s| s.display_name)
}

/// Extract component links from a rendered page.
///
/// Anchors are visited in DOM order. An anchor is skipped when it has no
/// `href`, its trimmed text is empty, its href contains `#`, the source's
/// [`SlugRule`] rejects it, or the resolved URL leaves the base URL's host.
///
/// # Errors
///
/// Returns an error if the link selector does not parse or the base URL is
/// invalid.
pub fn extract_components(html: &str, spec: &SourceSpec) -> Result<Vec<RawComponent>, ScrapeError> {
    let base = Url::parse(&spec.base_url)?;
    let selector = Selector::parse(&spec.link_selector)
        .map_err(|_| ScrapeError::InvalidSelector(spec.link_selector.clone()))?;
    let document = Html::parse_document(html);

    let mut components = Vec::new();
    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let text = element.text().collect::<String>();
        let name = text.trim();
        if href.is_empty() || name.is_empty() || href.contains('#') {
            continue;
        }
        let Some(slug) = spec.slug_rule.derive(href, name) else {
            debug!(source = %spec.key, href, "Skipping link without a slug");
            continue;
        };
        let url = match base.join(href) {
            Ok(u) if u.host_str() == base.host_str() => u.to_string(),
            Ok(u) => {
                debug!(source = %spec.key, href, host = ?u.host_str(), "Skipping off-site link");
                continue;
            }
            Err(e) => {
                debug!(source = %spec.key, href, error = %e, "Skipping unresolvable link");
                continue;
            }
        };
        components.push(RawComponent {
            name: name.to_string(),
            slug,
            url,
            category: spec.category.clone(),
        });
    }
    Ok(components)
}

/// Scrape one source.
///
/// Never fails: errors are logged and an empty vector is returned.
#[instrument(level = "info", skip_all, fields(source = %spec.key))]
pub async fn scrape_source<L: PageLoader>(
    loader: &mut L,
    spec: &SourceSpec,
    timeout: Duration,
) -> Vec<RawComponent> {
    info!(url = %spec.page_url, "Scraping {} components", spec.display_name);

    let html = match loader.load(&spec.page_url, &spec.wait_selector, timeout).await {
        Ok(html) => html,
        Err(e) => {
            error!(error = %e, url = %spec.page_url, "Error scraping source");
            return Vec::new();
        }
    };

    match extract_components(&html, spec) {
        Ok(components) => {
            info!(count = components.len(), "Found {} components", spec.display_name);
            components
        }
        Err(e) => {
            error!(error = %e, "Error extracting components");
            Vec::new()
        }
    }
}

/// Scrape every source, then close the loader.
///
/// The loader is closed whatever happened to the individual sources; a
/// failure to close is logged and does not discard the results.
pub async fn scrape_and_close<L: PageLoader>(
    mut loader: L,
    sources: &[SourceSpec],
    timeout: Duration,
) -> Vec<(SourceSpec, Vec<RawComponent>)> {
    let batches = scrape_all(&mut loader, sources, timeout).await;
    if let Err(e) = loader.close().await {
        warn!(error = %e, "Failed to close page loader");
    }
    batches
}

/// Scrape every source in order through one loader.
///
/// Sources are visited sequentially; a failing source contributes an empty
/// batch. The loader is not closed here.
pub async fn scrape_all<L: PageLoader>(
    loader: &mut L,
    sources: &[SourceSpec],
    timeout: Duration,
) -> Vec<(SourceSpec, Vec<RawComponent>)> {
    let mut batches = Vec::with_capacity(sources.len());
    for spec in sources {
        let components = scrape_source(loader, spec, timeout).await;
        batches.push((spec.clone(), components));
    }
    batches
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const MUI_HTML: &str = r##"
        <html><body>
          <nav>
            <a href="/material-ui/react-button/">Button</a>
            <a href="/material-ui/react-text-field/"> Text Field </a>
            <a href="/material-ui/react-chip/#basic">Chip</a>
            <a href="/material-ui/react-empty/">   </a>
            <a href="/material-ui/getting-started/">Getting started</a>
            <a>No href</a>
          </nav>
          <nav><a href="https://mirror.example.org/material-ui/react-slider/">Slider</a></nav>
          <main><a href="/material-ui/react-card/">Card</a></main>
        </body></html>
    "##;

    const F7_HTML: &str = r##"
        <html><body><div class="page-content">
          <div class="list-group"><a class="item-link" href="/kitchen-sink/core/accordion/">Accordion</a></div>
          <div class="list"><ul>
            <li><a href="/">Action Sheet</a></li>
            <li><a href="#">Hash</a></li>
            <li><a href="/kitchen-sink/core/badge/#top">Badge</a></li>
            <li><a href="relative/page/">Relative</a></li>
            <li><a href="https://github.com/framework7io">GitHub</a></li>
            <li><a href="//cdn.example.net/widgets/">Widgets</a></li>
            <li><a href="/kitchen-sink/core/dialog/?theme=md">Dialog</a></li>
          </ul></div>
        </div></body></html>
    "##;

    /// Serves canned HTML per URL; unknown URLs fail like a navigation error.
    struct FixtureLoader {
        pages: HashMap<String, String>,
        loads: Vec<String>,
        closes: usize,
    }

    impl FixtureLoader {
        fn new(pages: &[(&str, &str)]) -> Self {
            Self {
                pages: pages
                    .iter()
                    .map(|(u, h)| (u.to_string(), h.to_string()))
                    .collect(),
                loads: Vec::new(),
                closes: 0,
            }
        }
    }

    impl PageLoader for FixtureLoader {
        async fn load(
            &mut self,
            url: &str,
            wait_selector: &str,
            _timeout: Duration,
        ) -> Result<String, ScrapeError> {
            self.loads.push(url.to_string());
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| ScrapeError::SelectorNotFound {
                    selector: wait_selector.to_string(),
                    url: url.to_string(),
                })
        }

        async fn close(&mut self) -> Result<(), ScrapeError> {
            self.closes += 1;
            Ok(())
        }
    }

    impl PageLoader for &mut FixtureLoader {
        async fn load(
            &mut self,
            url: &str,
            wait_selector: &str,
            timeout: Duration,
        ) -> Result<String, ScrapeError> {
            (**self).load(url, wait_selector, timeout).await
        }

        async fn close(&mut self) -> Result<(), ScrapeError> {
            (**self).close().await
        }
    }

    #[test]
    fn test_extract_mui_components() {
        let components = extract_components(MUI_HTML, &mui::source()).unwrap();

        let slugs: Vec<&str> = components.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, vec!["button", "text-field"]);
        assert_eq!(components[0].url, "https://mui.com/material-ui/react-button/");
        assert_eq!(components[1].name, "Text Field");
        assert!(components.iter().all(|c| c.category == "MUI Component"));
    }

    #[test]
    fn test_extract_framework7_components() {
        let components = extract_components(F7_HTML, &framework7::source()).unwrap();

        let names: Vec<&str> = components.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Accordion", "Action Sheet", "Dialog"]);
        assert_eq!(components[0].slug, "accordion");
        assert_eq!(components[1].slug, "action-sheet");
        assert_eq!(components[1].url, "https://framework7.io/");
        assert_eq!(components[2].slug, "dialog");
        assert_eq!(
            components[2].url,
            "https://framework7.io/kitchen-sink/core/dialog/?theme=md"
        );
    }

    #[test]
    fn test_extract_never_emits_hash_or_empty_text() {
        for (html, spec) in [(MUI_HTML, mui::source()), (F7_HTML, framework7::source())] {
            for c in extract_components(html, &spec).unwrap() {
                assert!(!c.name.is_empty());
                assert!(!c.url.contains('#'));
            }
        }
    }

    #[test]
    fn test_extract_skips_off_site_links() {
        let html = r#"<html><body><div class="page-content"><div class="list"><ul>
            <li><a href="//evil.example/x/">X</a></li>
            <li><a href="/kitchen-sink/core/toggle/">Toggle</a></li>
        </ul></div></div></body></html>"#;
        let components = extract_components(html, &framework7::source()).unwrap();
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].url, "https://framework7.io/kitchen-sink/core/toggle/");

        let html = r#"<nav><a href="https://mirror.example.org/material-ui/react-slider/">Slider</a></nav>"#;
        assert!(extract_components(html, &mui::source()).unwrap().is_empty());
    }

    #[test]
    fn test_extract_invalid_selector() {
        let mut spec = mui::source();
        spec.link_selector = "a >>> b".to_string();
        assert!(matches!(
            extract_components(MUI_HTML, &spec),
            Err(ScrapeError::InvalidSelector(_))
        ));
    }

    #[test]
    fn test_select_sources() {
        let all = select_sources(&[]).unwrap();
        assert_eq!(
            all.iter().map(|s| s.key.as_str()).collect::<Vec<_>>(),
            vec!["mui", "framework7"]
        );

        let only = select_sources(&["framework7".to_string()]).unwrap();
        assert_eq!(only.len(), 1);
        assert_eq!(only[0].key, "framework7");

        assert_eq!(
            select_sources(&["vuetify".to_string()]).unwrap_err(),
            "vuetify"
        );
    }

    #[test]
    fn test_display_name_for() {
        assert_eq!(display_name_for("mui").as_deref(), Some("Material UI (MUI)"));
        assert_eq!(display_name_for("framework7").as_deref(), Some("Framework7"));
        assert_eq!(display_name_for("vuetify"), None);
    }

    #[tokio::test]
    async fn test_scrape_all_continues_after_failed_source() {
        let mut loader = FixtureLoader::new(&[(
            "https://framework7.io/kitchen-sink/core/?theme=md",
            F7_HTML,
        )]);

        let batches = scrape_all(&mut loader, &builtin_sources(), Duration::from_secs(1)).await;

        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].0.key, "mui");
        assert!(batches[0].1.is_empty());
        assert_eq!(batches[1].0.key, "framework7");
        assert_eq!(batches[1].1.len(), 3);
        assert_eq!(
            loader.loads,
            vec![
                "https://mui.com/components/".to_string(),
                "https://framework7.io/kitchen-sink/core/?theme=md".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_scrape_and_close_closes_after_failed_source() {
        let mut loader = FixtureLoader::new(&[]);

        let batches =
            scrape_and_close(&mut loader, &builtin_sources(), Duration::from_secs(1)).await;

        assert!(batches.iter().all(|(_, components)| components.is_empty()));
        assert_eq!(loader.loads.len(), 2);
        assert_eq!(loader.closes, 1);
    }
}
