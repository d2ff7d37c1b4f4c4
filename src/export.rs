//! Static export: writes the rendered page and its assets to a directory
//! that any static host can serve.

use std::fs;
use std::path::{Path, PathBuf};

use crate::assets;
use crate::config::SiteConfig;
use crate::error::{Result, SiteError};
use crate::ui::render_home;

/// Write `index.html`, `assets/*` and (when built) `pkg/*` under `out_dir`.
///
/// Returns every path written, in write order.
pub fn export_site(config: &SiteConfig, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    fs::create_dir_all(out_dir).map_err(|e| SiteError::io(out_dir, e))?;

    let index = out_dir.join("index.html");
    write_file(&index, render_home(config).as_bytes())?;
    written.push(index);

    for path in assets::paths() {
        let Some(asset) = assets::get(&path) else {
            continue;
        };
        let target = out_dir.join("assets").join(path.as_ref());
        write_file(&target, &asset.data)?;
        written.push(target);
    }

    let pkg_dir = Path::new(&config.pkg_dir);
    if pkg_dir.is_dir() {
        copy_dir(pkg_dir, &out_dir.join("pkg"), &mut written)?;
    } else {
        tracing::warn!(
            "No wasm build at {}; exported page will load without enhancements",
            pkg_dir.display()
        );
    }

    tracing::info!("Exported {} files to {}", written.len(), out_dir.display());
    Ok(written)
}

/// Copy every file under `source` (wasm-pack nests inline JS in `snippets/`)
fn copy_dir(source: &Path, target: &Path, written: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(source).map_err(|e| SiteError::io(source, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| SiteError::io(source, e))?;
        let path = entry.path();
        let dest = target.join(entry.file_name());
        let file_type = entry.file_type().map_err(|e| SiteError::io(&path, e))?;
        if file_type.is_dir() {
            copy_dir(&path, &dest, written)?;
        } else if file_type.is_file() {
            let data = fs::read(&path).map_err(|e| SiteError::io(&path, e))?;
            write_file(&dest, &data)?;
            written.push(dest);
        }
    }
    Ok(())
}

fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| SiteError::io(parent, e))?;
    }
    fs::write(path, data).map_err(|e| SiteError::io(path, e))
}
