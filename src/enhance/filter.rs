//! Project filter toolbar.

use std::rc::Rc;

use web_sys::{Document, Element};

use super::{listen, query_all};
use crate::projects::ProjectFilter;
use crate::variant::DomContract;

pub(super) fn setup_project_filter(document: &Document, contract: &DomContract) -> Option<()> {
    let buttons = Rc::new(query_all(document, contract.filter_buttons));
    if buttons.is_empty() {
        return None;
    }

    for button in buttons.iter() {
        let doc = document.clone();
        let all_buttons = buttons.clone();
        let articles = contract.project_articles;
        let clicked = button.clone();

        listen(button, "click", move |_| {
            let filter =
                ProjectFilter::parse(&clicked.get_attribute("data-filter").unwrap_or_default());

            for b in all_buttons.iter() {
                let pressed = b.is_same_node(Some(clicked.as_ref()));
                let _ = b.set_attribute("aria-pressed", if pressed { "true" } else { "false" });
            }
            for article in query_all(&doc, articles) {
                apply(&article, &filter);
            }
        });
    }
    Some(())
}

fn apply(article: &Element, filter: &ProjectFilter) {
    if filter.matches(article.get_attribute("data-category").as_deref()) {
        let _ = article.remove_attribute("hidden");
    } else {
        let _ = article.set_attribute("hidden", "");
    }
}
