//! Material UI component index.
//!
//! Components are listed in the sidebar of [mui.com/components](https://mui.com/components/)
//! with links of the form `/material-ui/react-{slug}/`.

use super::{SlugRule, SourceSpec};
use once_cell::sync::Lazy;
use regex::Regex;

pub const KEY: &str = "mui";

static SLUG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/material-ui/react-(.+?)/?$").expect("valid MUI slug pattern"));

/// Source definition for the MUI sidebar.
pub fn source() -> SourceSpec {
    SourceSpec {
        key: KEY.to_string(),
        display_name: "Material UI (MUI)".to_string(),
        page_url: "https://mui.com/components/".to_string(),
        base_url: "https://mui.com".to_string(),
        wait_selector: "nav".to_string(),
        link_selector: r#"nav a[href*="/material-ui/react-"]"#.to_string(),
        category: "MUI Component".to_string(),
        slug_rule: SlugRule::PathCapture(SLUG_PATTERN.clone()),
    }
}
