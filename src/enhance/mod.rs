//! Browser enhancement layer (wasm32 only).
//!
//! Binds the pure behaviour in `theme`, `nav`, `lightbox`, `projects` and
//! `contact` to the server-rendered markup. Every routine looks up its
//! elements once at startup and returns early when they're missing, leaving
//! that feature disabled. Listeners live for the lifetime of the page.

mod contact;
mod filter;
mod lightbox;
mod nav;
mod storage;
mod theme;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, DocumentReadyState, Element, Event, EventTarget};

use crate::variant::{Variant, VARIANT_ATTR};

pub use storage::LocalStorage;

/// wasm-bindgen entry point, run when the module is initialised
#[wasm_bindgen(start)]
pub fn start() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() == DocumentReadyState::Loading {
        let doc = document.clone();
        listen(&document, "DOMContentLoaded", move |_| init(&doc));
    } else {
        init(&document);
    }
}

fn init(document: &Document) {
    let variant = Variant::parse(
        document
            .body()
            .and_then(|body| body.get_attribute(VARIANT_ATTR))
            .as_deref(),
    );
    let contract = variant.contract();

    theme::init_theme(document);
    report("theme toggle", theme::setup_theme_toggle(document, &contract));
    report("hamburger", nav::setup_hamburger(document, &contract));
    report("nav links", nav::close_menu_on_link_click(document, &contract));
    if variant.has_lightbox() {
        report("lightbox", lightbox::setup_lightbox(document, &contract));
    }
    if variant.has_filter() {
        report("project filter", filter::setup_project_filter(document, &contract));
    }
    report("contact form", contact::setup_contact_form(document, &contract));
}

fn report(feature: &str, wired: Option<()>) {
    if wired.is_none() {
        web_sys::console::debug_1(&format!("{feature}: elements not found, skipped").into());
    }
}

/// Attach a listener for the lifetime of the page
fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(e) =
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        web_sys::console::warn_1(&format!("Failed to listen for {event}: {e:?}").into());
        return;
    }
    // Page-lifetime listener; never removed
    closure.forget();
}

/// First match in the document; invalid selectors count as no match
fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

fn query_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

fn elements(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
