//! Live contact-form validation with inline errors.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use super::{listen, query, query_in};
use crate::contact::{
    described_by, submit_outcome, ContactForm, Field, SubmitOutcome, ERROR_COLOR, LIVE_REGION_ID,
    STATUS_CLEAR_DELAY_MS,
};
use crate::variant::DomContract;

struct FormFields {
    form: HtmlFormElement,
    name: Element,
    email: Element,
    message: Element,
    live: Option<Element>,
}

pub(super) fn setup_contact_form(document: &Document, contract: &DomContract) -> Option<()> {
    let form: HtmlFormElement = query(document, contract.contact_form)?.dyn_into().ok()?;
    let field = |f: Field| query_in(&form, &format!("#{}", f.id()));

    let fields = Rc::new(FormFields {
        name: field(Field::Name)?,
        email: field(Field::Email)?,
        message: field(Field::Message)?,
        live: query_in(&form, &format!("#{LIVE_REGION_ID}")),
        form: form.clone(),
    });

    for f in Field::ALL {
        let fields_ref = fields.clone();
        listen(fields.element(f), "input", move |_| {
            fields_ref.show_result(f, f.validate(&field_value(fields_ref.element(f))));
        });
    }

    let fields_ref = fields.clone();
    listen(&form, "submit", move |event| {
        let validation = fields_ref.values().validate();
        // Every field gets its error shown, not just the first
        for f in Field::ALL {
            fields_ref.show_result(f, validation.result(f));
        }

        let outcome = submit_outcome(&validation, fields_ref.form.get_attribute("action").as_deref());
        if outcome.prevents_default() {
            event.prevent_default();
        }
        if let Some(text) = outcome.live_message() {
            fields_ref.set_live(text);
        }
        if outcome == SubmitOutcome::Simulate {
            fields_ref.form.reset();
            if let Some(live) = fields_ref.live.clone() {
                Timeout::new(STATUS_CLEAR_DELAY_MS, move || live.set_text_content(Some("")))
                    .forget();
            }
        }
    });

    Some(())
}

impl FormFields {
    fn element(&self, field: Field) -> &Element {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn values(&self) -> ContactForm {
        ContactForm {
            name: field_value(&self.name),
            email: field_value(&self.email),
            message: field_value(&self.message),
        }
    }

    fn show_result<E: ToString>(&self, field: Field, result: Result<(), E>) {
        match result {
            Ok(()) => self.clear_error(field),
            Err(e) => self.set_error(field, &e.to_string()),
        }
    }

    fn set_error(&self, field: Field, message: &str) {
        let input = self.element(field);
        let _ = input.set_attribute("aria-invalid", "true");

        let error_id = field.error_id();
        let span = query_in(&self.form, &format!("#{error_id}"))
            .or_else(|| self.create_error_span(input, &error_id));
        if let Some(span) = span {
            span.set_text_content(Some(message));
        }
    }

    /// Inserted once, right after the input, and linked via aria-describedby
    fn create_error_span(&self, input: &Element, error_id: &str) -> Option<Element> {
        let span = input.owner_document()?.create_element("span").ok()?;
        span.set_id(error_id);
        let _ = span.set_attribute("style", &format!("color: {ERROR_COLOR}; display: block;"));
        input.insert_adjacent_element("afterend", &span).ok()?;

        let existing = input.get_attribute("aria-describedby");
        let _ = input.set_attribute("aria-describedby", &described_by(existing.as_deref(), error_id));
        Some(span)
    }

    fn clear_error(&self, field: Field) {
        let _ = self.element(field).remove_attribute("aria-invalid");
        if let Some(span) = query_in(&self.form, &format!("#{}", field.error_id())) {
            span.set_text_content(Some(""));
        }
    }

    fn set_live(&self, text: &str) {
        if let Some(live) = &self.live {
            live.set_text_content(Some(text));
        }
    }
}

fn field_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        textarea.value()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{INVALID_SUBMIT_MESSAGE, SUCCESS_MESSAGE};
    use crate::enhance::testing::{count, dispatch, fixture, select, text};
    use crate::variant::Variant;
    use wasm_bindgen_test::*;

    fn form_html(action: &str) -> String {
        format!(
            r#"<section id="contact">
                <form class="contact-form" {action} novalidate>
                    <input id="name" aria-describedby="name-hint">
                    <span id="name-hint">Your full name</span>
                    <input id="email" type="email">
                    <textarea id="message"></textarea>
                    <button type="submit">Send</button>
                    <p id="form-live" role="status" aria-live="polite"></p>
                </form>
            </section>"#
        )
    }

    fn wired(action: &str) -> Document {
        let document = fixture(&form_html(action));
        setup_contact_form(&document, &Variant::Showcase.contract()).expect("form wired");
        document
    }

    fn fill(document: &Document, name: &str, email: &str, message: &str) {
        let input = |id: &str| select(document, id).dyn_into::<HtmlInputElement>().expect("input");
        input("#name").set_value(name);
        input("#email").set_value(email);
        select(document, "#message")
            .dyn_into::<HtmlTextAreaElement>()
            .expect("textarea")
            .set_value(message);
    }

    #[wasm_bindgen_test]
    fn invalid_submit_flags_every_field() {
        let document = wired("");
        let form = select(&document, "#contact form");

        assert!(!dispatch(&form, "submit"), "invalid submit must be prevented");
        assert_eq!(text(&select(&document, "#form-live")), INVALID_SUBMIT_MESSAGE);

        for f in Field::ALL {
            let input = select(&document, &format!("#{}", f.id()));
            assert_eq!(input.get_attribute("aria-invalid").as_deref(), Some("true"));
            let span = input.next_element_sibling().expect("error span after input");
            assert_eq!(span.id(), f.error_id());
        }
        assert_eq!(
            text(&select(&document, "#name-error")),
            "Please enter your name."
        );
        assert_eq!(
            select(&document, "#name").get_attribute("aria-describedby").as_deref(),
            Some("name-hint name-error")
        );
        assert_eq!(
            select(&document, "#email").get_attribute("aria-describedby").as_deref(),
            Some("email-error")
        );

        // A second failed submit reuses the spans
        assert!(!dispatch(&form, "submit"));
        assert_eq!(count(&document, "#name-error"), 1);
        assert_eq!(
            select(&document, "#name").get_attribute("aria-describedby").as_deref(),
            Some("name-hint name-error")
        );
    }

    #[wasm_bindgen_test]
    fn input_events_validate_live() {
        let document = wired("");
        let email = select(&document, "#email");

        fill(&document, "", "ada@", "");
        dispatch(&email, "input");
        assert_eq!(email.get_attribute("aria-invalid").as_deref(), Some("true"));
        assert_eq!(
            text(&select(&document, "#email-error")),
            "Please enter a valid email address."
        );
        // Only the edited field is checked
        assert_eq!(count(&document, "#name-error"), 0);

        fill(&document, "", "ada@example.com", "");
        dispatch(&email, "input");
        assert!(!email.has_attribute("aria-invalid"));
        assert_eq!(text(&select(&document, "#email-error")), "");
    }

    #[wasm_bindgen_test]
    fn valid_submit_without_action_resets_form() {
        let document = wired("");
        fill(&document, "Ada", "ada@example.com", "Hello there, world");

        assert!(!dispatch(&select(&document, "#contact form"), "submit"));
        assert_eq!(text(&select(&document, "#form-live")), SUCCESS_MESSAGE);

        let name = select(&document, "#name")
            .dyn_into::<HtmlInputElement>()
            .expect("input");
        assert_eq!(name.value(), "");
        let message = select(&document, "#message")
            .dyn_into::<HtmlTextAreaElement>()
            .expect("textarea");
        assert_eq!(message.value(), "");
    }

    #[wasm_bindgen_test]
    fn valid_submit_with_action_proceeds() {
        let document = wired(r#"action="/send" method="post""#);
        fill(&document, "Ada", "ada@example.com", "Hello there, world");

        assert!(dispatch(&select(&document, "#contact form"), "submit"));
        assert_eq!(text(&select(&document, "#form-live")), "");
        assert_eq!(count(&document, "[aria-invalid]"), 0);
    }
}
