//! Layout component wrapping the page with head, header and footer.

use chrono::Datelike;
use dioxus::prelude::*;

use super::nav::Nav;
use crate::config::Section;
use crate::variant::Variant;

/// Loads the wasm-pack output; its start function wires up the page.
const ENHANCER_BOOTSTRAP: &str = r#"
import init from '/pkg/portfolio_site.js';
init().catch((e) => console.warn('Enhancements unavailable:', e));
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Site owner, used for the brand and footer
    pub owner: String,
    /// In-page sections for the nav
    pub sections: Vec<Section>,
    /// Which DOM contract the enhancer binds to
    pub variant: Variant,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping the page.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("PORTFOLIO_VERSION");
    let year = chrono::Local::now().year();

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            meta { name: "generator", content: "portfolio-site {version}" }
            title { "{props.title}" }
            link { rel: "stylesheet", href: "/assets/style.css" }
            link { rel: "icon", r#type: "image/svg+xml", href: "/assets/favicon.svg" }
        }
        body { id: "top", "data-variant": props.variant.as_str(),
            a { class: "skip-link", href: "#main", "Skip to content" }
            Nav { brand: props.owner.clone(), sections: props.sections.clone() }
            main { id: "main",
                {props.children}
            }
            footer { class: "site-footer",
                small { "© {year} {props.owner}" }
            }
            script { r#type: "module", dangerous_inner_html: ENHANCER_BOOTSTRAP }
        }
    }
}
