//! Dark/light class on `<html>` plus the `#theme-toggle` button.

use web_sys::{Document, Element};

use super::{listen, query, LocalStorage};
use crate::theme::{load_theme, toggle_theme, Theme, DARK_CLASS};
use crate::variant::DomContract;

/// Restore the stored preference. Only ever adds the dark class.
pub(super) fn init_theme(document: &Document) {
    if load_theme(&LocalStorage::open()).is_dark() {
        apply(document, Theme::Dark);
    }
}

pub(super) fn setup_theme_toggle(document: &Document, contract: &DomContract) -> Option<()> {
    let button = query(document, contract.theme_toggle)?;
    sync_button(&button, current(document));

    let doc = document.clone();
    let btn = button.clone();
    listen(&button, "click", move |_| {
        let mut store = LocalStorage::open();
        let next = toggle_theme(current(&doc), &mut store);
        apply(&doc, next);
        sync_button(&btn, next);
    });
    Some(())
}

fn current(document: &Document) -> Theme {
    let dark = document
        .document_element()
        .is_some_and(|root| root.class_list().contains(DARK_CLASS));
    if dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}

fn apply(document: &Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        let _ = root
            .class_list()
            .toggle_with_force(DARK_CLASS, theme.is_dark());
    }
}

fn sync_button(button: &Element, theme: Theme) {
    let _ = button.set_attribute("aria-pressed", if theme.is_dark() { "true" } else { "false" });
    let _ = button.set_attribute("aria-label", theme.toggle_label());
    let _ = button.set_attribute("title", theme.toggle_label());
}
