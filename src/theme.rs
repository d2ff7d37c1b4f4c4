//! Theme preference with localStorage persistence.
//!
//! The page is light by default; the only persisted state is the string
//! `"dark"` or `"light"` under [`THEME_STORAGE_KEY`].

use std::collections::HashMap;

/// localStorage key holding the theme preference
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class applied to the document root while dark mode is active
pub const DARK_CLASS: &str = "dark";

/// Theme options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Only an exact `"dark"` restores dark mode; anything else is light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label for the toggle button (names the theme a click switches to)
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark theme",
            Theme::Dark => "Switch to light theme",
        }
    }
}

/// Per-origin key/value storage (localStorage in the browser).
pub trait PreferenceStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str);
}

/// In-memory store, used off-browser and in tests
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
    }
}

/// Read the persisted theme once at startup
pub fn load_theme(store: &impl PreferenceStore) -> Theme {
    Theme::from_stored(store.get_item(THEME_STORAGE_KEY).as_deref())
}

/// Flip the theme and persist the new value
pub fn toggle_theme(current: Theme, store: &mut impl PreferenceStore) -> Theme {
    let next = current.toggled();
    store.set_item(THEME_STORAGE_KEY, next.as_str());
    next
}
