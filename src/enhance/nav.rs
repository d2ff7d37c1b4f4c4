//! Hamburger toggle and smooth-scrolling nav links.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::{listen, query, query_all_in};
use crate::nav::{scroll_target, NavState, DATA_OPEN_ATTR};
use crate::variant::DomContract;

pub(super) fn setup_hamburger(document: &Document, contract: &DomContract) -> Option<()> {
    let button = query(document, contract.hamburger)?;
    let nav = query(document, contract.nav)?;

    let btn = button.clone();
    listen(&button, "click", move |_| {
        let state = NavState::from_attr(nav.get_attribute(DATA_OPEN_ATTR).as_deref()).toggled();
        let _ = nav.set_attribute(DATA_OPEN_ATTR, state.data_open());
        let _ = btn.set_attribute("aria-expanded", state.aria_expanded());
    });
    Some(())
}

/// Close the mobile menu when an in-page link is followed, and scroll the
/// target into view smoothly.
pub(super) fn close_menu_on_link_click(document: &Document, contract: &DomContract) -> Option<()> {
    let nav = query(document, contract.nav)?;

    for link in query_all_in(&nav, contract.nav_links) {
        let doc = document.clone();
        let nav = nav.clone();
        let hamburger = contract.hamburger;
        let href = link.get_attribute("href");

        listen(&link, "click", move |event| {
            let state = NavState::from_attr(nav.get_attribute(DATA_OPEN_ATTR).as_deref());
            if state.open {
                let closed = state.closed();
                let _ = nav.set_attribute(DATA_OPEN_ATTR, closed.data_open());
                if let Some(btn) = query(&doc, hamburger) {
                    let _ = btn.set_attribute("aria-expanded", closed.aria_expanded());
                }
            }

            let Some(fragment) = href.as_deref().and_then(scroll_target) else {
                return;
            };
            if let Some(target) = query(&doc, fragment) {
                // Instant jump would cut the smooth scroll short, so the
                // fragment goes into history by hand
                event.prevent_default();
                scroll_smooth(&target);
                push_fragment(fragment);
            }
        });
    }
    Some(())
}

/// Record `#id` in the address bar and history, as following the link would
fn push_fragment(fragment: &str) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let _ = history.push_state_with_url(&JsValue::NULL, "", Some(fragment));
}

fn scroll_smooth(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}
