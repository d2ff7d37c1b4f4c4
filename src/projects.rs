//! Portfolio projects and the category filter toolbar.

use serde::{Deserialize, Serialize};

/// Value of the toolbar button that shows every project
pub const ALL_FILTER: &str = "all";

/// A portfolio entry rendered as an `<article data-category>`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub category: String,
    /// Thumbnail shown in the grid
    pub image: String,
    /// Larger image for the lightbox
    #[serde(default)]
    pub full_image: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Category(String),
}

impl ProjectFilter {
    /// Parse a button's `data-filter` value.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(ALL_FILTER) {
            ProjectFilter::All
        } else {
            ProjectFilter::Category(value.to_string())
        }
    }

    /// Whether an article with this `data-category` stays visible.
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Category(wanted) => category
                .map(str::trim)
                .is_some_and(|c| c.eq_ignore_ascii_case(wanted)),
        }
    }

    /// Whether the toolbar button carrying `value` is the selected one
    pub fn is_selected_by(&self, value: &str) -> bool {
        match (self, ProjectFilter::parse(value)) {
            (ProjectFilter::All, ProjectFilter::All) => true,
            (ProjectFilter::Category(a), ProjectFilter::Category(b)) => a.eq_ignore_ascii_case(&b),
            _ => false,
        }
    }
}

/// Distinct categories in first-seen order, compared case-insensitively
pub fn categories(projects: &[Project]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for project in projects {
        let category = project.category.trim();
        if category.is_empty() {
            continue;
        }
        if !seen.iter().any(|c| c.eq_ignore_ascii_case(category)) {
            seen.push(category.to_string());
        }
    }
    seen
}
