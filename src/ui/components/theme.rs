//! Theme toggle button.

use dioxus::prelude::*;

use crate::theme::Theme;

/// Dark/light toggle. Rendered light; the enhancer restores the stored
/// preference and keeps `aria-pressed` in sync with the dark state.
#[component]
pub fn ThemeToggle() -> Element {
    let initial = Theme::default();

    rsx! {
        button {
            id: "theme-toggle",
            class: "theme-toggle",
            r#type: "button",
            "aria-pressed": if initial.is_dark() { "true" } else { "false" },
            "aria-label": initial.toggle_label(),
            title: initial.toggle_label(),
            span { class: "theme-toggle-icon", "aria-hidden": "true", "◐" }
        }
    }
}
