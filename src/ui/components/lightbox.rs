//! Empty lightbox overlay, filled in by the enhancer on thumbnail click.

use dioxus::prelude::*;

use crate::lightbox::LIGHTBOX_ID;

#[component]
pub fn LightboxShell() -> Element {
    rsx! {
        div {
            id: LIGHTBOX_ID,
            class: "lightbox",
            role: "dialog",
            "aria-modal": "true",
            "aria-label": "Image preview",
            hidden: true,
            button {
                class: "lightbox-close",
                r#type: "button",
                "aria-label": "Close image preview",
                "×"
            }
            img { class: "lightbox-image", src: "", alt: "" }
        }
    }
}
