//! Mobile navigation state.
//!
//! Open/closed lives on the nav element's `data-open` attribute and is
//! mirrored to `aria-expanded` on the hamburger button.

/// Attribute on the nav element carrying the open state
pub const DATA_OPEN_ATTR: &str = "data-open";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub open: bool,
}

impl NavState {
    /// Open only when the attribute is exactly `"true"`.
    pub fn from_attr(value: Option<&str>) -> Self {
        Self {
            open: value == Some("true"),
        }
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }

    /// Value for `data-open` on the nav
    pub fn data_open(&self) -> &'static str {
        bool_attr(self.open)
    }

    /// Value for `aria-expanded` on the hamburger
    pub fn aria_expanded(&self) -> &'static str {
        bool_attr(self.open)
    }
}

fn bool_attr(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Selector to scroll to for an in-page link, if the href names one.
///
/// `"#"` on its own and anything that isn't a fragment yield `None`.
pub fn scroll_target(href: &str) -> Option<&str> {
    let href = href.trim();
    if href.len() > 1 && href.starts_with('#') {
        Some(href)
    } else {
        None
    }
}
