//! Configuration management
//!
//! Site content and preview-server settings, layered from built-in defaults,
//! an optional `site.toml` in the config directory, and `PORTFOLIO_*`
//! environment variables.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::projects::Project;
use crate::variant::Variant;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub variant: Variant,

    #[serde(default)]
    pub site: SiteInfo,

    #[serde(default = "default_sections")]
    pub sections: Vec<Section>,

    #[serde(default = "default_projects")]
    pub projects: Vec<Project>,

    #[serde(default)]
    pub contact: ContactConfig,

    /// wasm-pack output served under /pkg by the preview server
    #[serde(default = "default_pkg_dir")]
    pub pkg_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            variant: Variant::default(),
            site: SiteInfo::default(),
            sections: default_sections(),
            projects: default_projects(),
            contact: ContactConfig::default(),
            pkg_dir: default_pkg_dir(),
        }
    }
}

fn default_port() -> u16 {
    8080
}

fn default_pkg_dir() -> String {
    "pkg".to_string()
}

/// Missing fields fall back to the sample content, so a single
/// `PORTFOLIO_SITE__OWNER` is enough to rebrand the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    pub owner: String,
    pub title: String,
    pub tagline: String,
    pub about: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            owner: "Alex Morgan".to_string(),
            title: "Alex Morgan - Portfolio".to_string(),
            tagline: "Designer and developer building small, careful things for the web."
                .to_string(),
            about: "I work across interface design and front-end engineering, with a soft \
                    spot for tooling that gets out of the way."
                .to_string(),
        }
    }
}

/// In-page navigation entry; `id` is the section element id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub label: String,
}

impl Section {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

fn default_sections() -> Vec<Section> {
    [("about", "About"), ("projects", "Projects"), ("contact", "Contact")]
        .into_iter()
        .map(|(id, label)| Section {
            id: id.to_string(),
            label: label.to_string(),
        })
        .collect()
}

fn default_projects() -> Vec<Project> {
    let sample = [
        ("Atlas", "web", "atlas", "A map-first travel journal with offline sync."),
        ("Ledger", "tools", "ledger", "Plain-text bookkeeping with a tiny query language."),
        ("Kiln", "design", "kiln", "Brand system and type specimen for a ceramics studio."),
        ("Tidepool", "web", "tidepool", "Live tide charts for coastal swimmers."),
    ];
    sample
        .into_iter()
        .map(|(title, category, slug, description)| Project {
            title: title.to_string(),
            category: category.to_string(),
            image: format!("/assets/projects/{slug}.svg"),
            full_image: Some(format!("/assets/projects/{slug}-full.svg")),
            description: description.to_string(),
            url: None,
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Form action; when unset the form only simulates a successful send
    #[serde(default)]
    pub action: Option<String>,
    /// Address shown beside the form
    #[serde(default)]
    pub email: Option<String>,
}

/// Get config directory (PORTFOLIO_CONFIG_DIR, XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("PORTFOLIO_CONFIG_DIR") {
        return std::path::PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join("Library/Application Support/portfolio-site");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return std::path::PathBuf::from(xdg).join("portfolio-site");
        }
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join(".config/portfolio-site");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return std::path::PathBuf::from(appdata).join("portfolio-site");
        }
    }

    // Fallback to current directory
    std::path::PathBuf::from(".")
}

pub fn load_config() -> Result<SiteConfig> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        // Start with defaults
        .set_default("port", default_port() as i64)?
        // Load from site.toml (or .json/.yaml) if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join("site").to_string_lossy()).required(false),
        )
        // Override with environment variables (PORTFOLIO_PORT, PORTFOLIO_SITE__OWNER, etc.)
        .add_source(
            ::config::Environment::with_prefix("PORTFOLIO")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    // Port precedence: PORTFOLIO_PORT > PORT > config file > default
    if let Ok(port) = std::env::var("PORTFOLIO_PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    } else if let Ok(port) = std::env::var("PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    }

    let config = builder.build()?;
    let site: SiteConfig = config.try_deserialize()?;

    tracing::debug!(
        "Loaded site config from {} (variant: {}, {} projects)",
        config_dir.display(),
        site.variant.as_str(),
        site.projects.len()
    );

    Ok(site)
}
