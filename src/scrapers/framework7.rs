//! Framework7 kitchen sink component index.
//!
//! The [kitchen sink](https://framework7.io/kitchen-sink/core/?theme=md) is a
//! client-rendered app, so this source needs a real browser. Component pages
//! are linked with site-relative hrefs from its list views.

use super::{SlugRule, SourceSpec};

pub const KEY: &str = "framework7";

/// Source definition for the Framework7 kitchen sink.
pub fn source() -> SourceSpec {
    SourceSpec {
        key: KEY.to_string(),
        display_name: "Framework7".to_string(),
        page_url: "https://framework7.io/kitchen-sink/core/?theme=md".to_string(),
        base_url: "https://framework7.io".to_string(),
        wait_selector: ".page-content".to_string(),
        link_selector: ".list-group .item-link, .list li a".to_string(),
        category: "Framework7 Component".to_string(),
        slug_rule: SlugRule::LastSegment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_is_last_path_segment() {
        let spec = source();
        assert_eq!(
            spec.slug_rule.derive("/kitchen-sink/core/accordion/", "Accordion"),
            Some("accordion".to_string())
        );
    }

    #[test]
    fn test_slug_falls_back_to_text() {
        let spec = source();
        assert_eq!(
            spec.slug_rule.derive("/", "Action Sheet"),
            Some("action-sheet".to_string())
        );
    }

    #[test]
    fn test_relative_href_is_rejected() {
        let spec = source();
        assert_eq!(spec.slug_rule.derive("accordion/", "Accordion"), None);
        assert_eq!(spec.slug_rule.derive("https://example.com/x/", "X"), None);
    }

    #[test]
    fn test_protocol_relative_href_is_rejected() {
        let spec = source();
        assert_eq!(spec.slug_rule.derive("//evil.example/x/", "X"), None);
    }
}
