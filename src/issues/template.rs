//! Issue title/body rendering.

use crate::models::Component;
use crate::scrapers::display_name_for;

/// Label attached to every issue alongside the source key.
pub const DEFAULT_LABEL: &str = "component";

/// A rendered issue, ready to hand to an [`IssueTracker`](super::IssueTracker).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueDraft {
    pub title: String,
    pub body: String,
    /// `[label, source]`, in that order.
    pub labels: Vec<String>,
}

/// Render the tracking issue for one component.
///
/// The framework name is looked up from the source key; keys that no
/// built-in source claims are shown verbatim.
pub fn render_issue(component: &Component, label: &str) -> IssueDraft {
    let Component {
        name,
        url,
        category,
        source,
        ..
    } = component;
    let framework = display_name_for(source).unwrap_or_else(|| source.clone());

    let title = format!("Implement {name} component");
    let body = format!(
        "## Component: {name}

### Source
- **Framework**: {framework}
- **Reference URL**: {url}
- **Category**: {category}

### Description
Implement the **{name}** component for the Flutterish library.

### Requirements
- [ ] Create Flutter widget implementation
- [ ] Follow Flutter best practices and conventions
- [ ] Ensure accessibility (Semantics widgets, ARIA labels)
- [ ] Add theme support (ThemeExtension)
- [ ] Write unit tests
- [ ] Write widget tests
- [ ] Add golden tests
- [ ] Update documentation
- [ ] Add example usage in example app

### Reference
Please refer to the original documentation at: {url}

### Notes
This component should be implemented following the patterns established in the existing Flutterish components (e.g., Stepper component).

---
*Auto-generated issue for component implementation*"
    );

    IssueDraft {
        title,
        body,
        labels: vec![label.to_string(), source.clone()],
    }
}
