//! Enlarged-image overlay for project thumbnails.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent};

use super::{listen, query_all, query_in};
use crate::lightbox::{closes_on_key, LightboxImage, LightboxState, FULL_SRC_ATTR, LIGHTBOX_ID};
use crate::variant::DomContract;

pub(super) fn setup_lightbox(document: &Document, contract: &DomContract) -> Option<()> {
    let images = query_all(document, contract.gallery_images);
    if images.is_empty() {
        return None;
    }

    let overlay = ensure_overlay(document)?;
    let state = Rc::new(RefCell::new(LightboxState::default()));

    for img in images {
        let overlay = overlay.clone();
        let state = state.clone();
        let thumb = img.clone();
        listen(&img, "click", move |_| {
            let image = LightboxImage::from_thumbnail(
                &thumb.get_attribute("src").unwrap_or_default(),
                thumb.get_attribute(FULL_SRC_ATTR).as_deref(),
                thumb.get_attribute("alt").as_deref(),
            );
            show(&overlay, &image);
            state.borrow_mut().open(image);
        });
    }

    // Click anywhere on the backdrop or close button; clicks on the image itself don't close
    {
        let overlay_el = overlay.clone();
        let state = state.clone();
        listen(&overlay, "click", move |event| {
            let on_image = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .is_some_and(|el| el.tag_name().eq_ignore_ascii_case("img"));
            if !on_image {
                hide(&overlay_el);
                state.borrow_mut().close();
            }
        });
    }

    listen(document, "keydown", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(|e| e.key()) else {
            return;
        };
        if closes_on_key(&key) && state.borrow().is_open() {
            hide(&overlay);
            state.borrow_mut().close();
        }
    });

    Some(())
}

/// Reuse the server-rendered overlay, or build one on the fly
fn ensure_overlay(document: &Document) -> Option<Element> {
    if let Some(existing) = document.get_element_by_id(LIGHTBOX_ID) {
        return Some(existing);
    }

    let overlay = document.create_element("div").ok()?;
    overlay.set_id(LIGHTBOX_ID);
    overlay.set_class_name("lightbox");
    let _ = overlay.set_attribute("role", "dialog");
    let _ = overlay.set_attribute("aria-modal", "true");
    let _ = overlay.set_attribute("aria-label", "Image preview");
    let _ = overlay.set_attribute("hidden", "");

    let close = document.create_element("button").ok()?;
    close.set_class_name("lightbox-close");
    let _ = close.set_attribute("type", "button");
    let _ = close.set_attribute("aria-label", "Close image preview");
    close.set_text_content(Some("×"));

    let img = document.create_element("img").ok()?;
    img.set_class_name("lightbox-image");

    overlay.append_child(&close).ok()?;
    overlay.append_child(&img).ok()?;
    document.body()?.append_child(&overlay).ok()?;
    Some(overlay)
}

fn show(overlay: &Element, image: &LightboxImage) {
    if let Some(img) = query_in(overlay, "img") {
        let _ = img.set_attribute("src", &image.src);
        let _ = img.set_attribute("alt", &image.alt);
    }
    let _ = overlay.remove_attribute("hidden");
    if let Some(close) = query_in(overlay, ".lightbox-close")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let _ = close.focus();
    }
}

fn hide(overlay: &Element) {
    let _ = overlay.set_attribute("hidden", "");
}
