//! The single portfolio page: hero, about, projects, contact.

use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::ui::components::{ContactSection, Layout, LightboxShell, ProjectGrid};

#[component]
pub fn HomePage(config: SiteConfig) -> Element {
    let variant = config.variant;
    let site = config.site.clone();

    rsx! {
        Layout {
            title: site.title.clone(),
            owner: site.owner.clone(),
            sections: config.sections.clone(),
            variant: variant,

            section { class: "hero",
                h1 { "{site.owner}" }
                p { class: "tagline", "{site.tagline}" }
            }
            section { id: "about", class: "about",
                h2 { "About" }
                p { "{site.about}" }
            }
            ProjectGrid {
                projects: config.projects.clone(),
                show_filter: variant.has_filter(),
            }
            ContactSection {
                action: config.contact.action.clone(),
                email: config.contact.email.clone(),
            }
            if variant.has_lightbox() {
                LightboxShell {}
            }
        }
    }
}
