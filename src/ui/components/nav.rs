//! Site header with brand, hamburger and section navigation.

use dioxus::prelude::*;

use super::theme::ThemeToggle;
use crate::config::Section;
use crate::nav::NavState;

#[derive(Props, Clone, PartialEq)]
pub struct NavProps {
    /// Brand text linking back to the top of the page
    pub brand: String,
    /// In-page sections, in menu order
    pub sections: Vec<Section>,
}

/// Header navigation. The nav starts closed (`data-open="false"`); the
/// hamburger only matters on narrow screens.
#[component]
pub fn Nav(props: NavProps) -> Element {
    let state = NavState::default();

    rsx! {
        header { class: "site-header",
            a { class: "brand", href: "#top", "{props.brand}" }
            button {
                class: "hamburger",
                r#type: "button",
                "aria-controls": "main-nav",
                "aria-expanded": state.aria_expanded(),
                "aria-label": "Toggle navigation",
                span { class: "hamburger-bar" }
                span { class: "hamburger-bar" }
                span { class: "hamburger-bar" }
            }
            nav {
                id: "main-nav",
                "data-open": state.data_open(),
                "aria-label": "Primary",
                ul {
                    for section in props.sections.iter() {
                        li {
                            a { href: section.href(), "{section.label}" }
                        }
                    }
                }
            }
            ThemeToggle {}
        }
    }
}
