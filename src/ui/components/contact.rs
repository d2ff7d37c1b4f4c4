//! Contact form. Validation happens client-side in the enhancer.

use dioxus::prelude::*;

use crate::contact::{Field, LIVE_REGION_ID};

#[derive(Props, Clone, PartialEq)]
pub struct ContactSectionProps {
    /// Form action; `None` leaves the form without a target
    #[props(default)]
    pub action: Option<String>,
    /// Address shown above the form
    #[props(default)]
    pub email: Option<String>,
}

#[component]
pub fn ContactSection(props: ContactSectionProps) -> Element {
    let method = props.action.as_ref().map(|_| "post");

    rsx! {
        section { id: "contact", class: "contact",
            h2 { "Contact" }
            if let Some(email) = props.email.clone() {
                p {
                    "Prefer email? "
                    a { href: "mailto:{email}", "{email}" }
                }
            }
            form {
                class: "contact-form",
                action: props.action.clone(),
                method: method,
                novalidate: true,
                div { class: "field",
                    label { r#for: Field::Name.id(), "Name" }
                    input {
                        id: Field::Name.id(),
                        name: Field::Name.id(),
                        r#type: "text",
                        autocomplete: "name",
                        required: true,
                    }
                }
                div { class: "field",
                    label { r#for: Field::Email.id(), "Email" }
                    input {
                        id: Field::Email.id(),
                        name: Field::Email.id(),
                        r#type: "email",
                        autocomplete: "email",
                        required: true,
                    }
                }
                div { class: "field",
                    label { r#for: Field::Message.id(), "Message" }
                    textarea {
                        id: Field::Message.id(),
                        name: Field::Message.id(),
                        rows: "5",
                        required: true,
                    }
                }
                button { class: "submit", r#type: "submit", "Send" }
                p {
                    id: LIVE_REGION_ID,
                    class: "form-live",
                    role: "status",
                    "aria-live": "polite",
                }
            }
        }
    }
}
