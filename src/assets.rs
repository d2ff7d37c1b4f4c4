//! Embedded static assets for single-binary distribution.
//!
//! Everything under `public/` is compiled into the binary and served from
//! `/assets/...` by the preview server, or written out by the export.

use std::borrow::Cow;

use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "public/"]
pub struct Assets;

/// Asset bytes plus the content type to serve them with
pub struct Asset {
    pub data: Cow<'static, [u8]>,
    pub mime: String,
}

/// Look up an embedded asset by its path relative to `public/`
pub fn get(path: &str) -> Option<Asset> {
    let path = path.trim_start_matches('/');
    let file = Assets::get(path)?;
    let mime = mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string();
    Some(Asset {
        data: file.data,
        mime,
    })
}

/// Paths of every embedded asset
pub fn paths() -> impl Iterator<Item = Cow<'static, str>> {
    Assets::iter()
}
