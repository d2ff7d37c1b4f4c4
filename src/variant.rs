//! Page variants and the DOM contract each one binds to.
//!
//! Three variants of the enhancement layer exist. They share every behaviour
//! and differ only in a couple of selectors and in which optional widgets
//! (lightbox, filter toolbar) they wire up.

use serde::{Deserialize, Serialize};

/// Attribute on `<body>` announcing the variant to the enhancer
pub const VARIANT_ATTR: &str = "data-variant";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Theme, nav and contact form only
    Classic,
    /// Adds the lightbox; nav found as `header nav`
    Gallery,
    /// Everything, including the project filter toolbar
    #[default]
    Showcase,
}

/// Selectors the enhancer queries. Missing elements disable the feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DomContract {
    pub theme_toggle: &'static str,
    pub hamburger: &'static str,
    pub nav: &'static str,
    /// In-page links inside the nav
    pub nav_links: &'static str,
    pub contact_form: &'static str,
    pub gallery_images: &'static str,
    pub filter_buttons: &'static str,
    pub project_articles: &'static str,
}

const BASE: DomContract = DomContract {
    theme_toggle: "#theme-toggle",
    hamburger: ".hamburger",
    nav: "#main-nav",
    nav_links: "a[href^='#']",
    contact_form: ".contact-form",
    gallery_images: "#projects img",
    filter_buttons: "#project-filters [data-filter]",
    project_articles: "#projects article[data-category]",
};

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Classic, Variant::Gallery, Variant::Showcase];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::Gallery => "gallery",
            Variant::Showcase => "showcase",
        }
    }

    /// Unknown or missing names fall back to the default variant.
    pub fn parse(s: Option<&str>) -> Self {
        match s.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("classic") => Variant::Classic,
            Some("gallery") => Variant::Gallery,
            Some("showcase") => Variant::Showcase,
            _ => Variant::default(),
        }
    }

    pub fn contract(&self) -> DomContract {
        match self {
            Variant::Classic => BASE,
            Variant::Gallery => DomContract {
                nav: "header nav",
                contact_form: "#contact form",
                ..BASE
            },
            Variant::Showcase => DomContract {
                contact_form: "#contact form",
                ..BASE
            },
        }
    }

    pub fn has_lightbox(&self) -> bool {
        !matches!(self, Variant::Classic)
    }

    pub fn has_filter(&self) -> bool {
        matches!(self, Variant::Showcase)
    }
}
