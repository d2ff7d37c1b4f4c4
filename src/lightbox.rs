//! Image lightbox state.

/// Id of the overlay element
pub const LIGHTBOX_ID: &str = "lightbox";

/// Thumbnail attribute naming a larger image to show instead of `src`
pub const FULL_SRC_ATTR: &str = "data-full";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LightboxImage {
    pub src: String,
    pub alt: String,
}

impl LightboxImage {
    /// Build from a clicked thumbnail, preferring a non-empty `data-full`.
    pub fn from_thumbnail(src: &str, data_full: Option<&str>, alt: Option<&str>) -> Self {
        let src = data_full
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(src);
        Self {
            src: src.to_string(),
            alt: alt.unwrap_or_default().to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LightboxState {
    current: Option<LightboxImage>,
}

impl LightboxState {
    pub fn open(&mut self, image: LightboxImage) {
        self.current = Some(image);
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&LightboxImage> {
        self.current.as_ref()
    }
}

/// Keys that dismiss the overlay
pub fn closes_on_key(key: &str) -> bool {
    key == "Escape" || key == "Esc"
}
