//! Contact form validation.
//!
//! Three independent field checks. Submission runs every check (no
//! short-circuit) so all invalid fields are flagged at once, then decides
//! whether to block, simulate success, or let the browser submit.

use std::sync::LazyLock;

use regex::Regex;

/// Minimum message length, in UTF-16 code units after trimming (a browser
/// string's `length`)
pub const MIN_MESSAGE_CHARS: usize = 10;

/// Id of the polite live region under the form
pub const LIVE_REGION_ID: &str = "form-live";

/// Live text when any field is invalid on submit
pub const INVALID_SUBMIT_MESSAGE: &str = "Please fix the highlighted fields and try again.";

/// Live text when the form is valid and has no action to submit to
pub const SUCCESS_MESSAGE: &str = "Thanks! Your message looks good.";

/// Delay before the success text is cleared
pub const STATUS_CLEAR_DELAY_MS: u32 = 3000;

/// Inline error text colour
pub const ERROR_COLOR: &str = "#b00020";

/// `local@domain.tld` with no whitespace or `@` in any part. "Whitespace" is
/// the browser's set: U+FEFF counts, U+0085 doesn't.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[^@\x{FEFF}[\s--\x{85}]]+@[^@\x{FEFF}[\s--\x{85}]]+\.[^@\x{FEFF}[\s--\x{85}]]+$",
    )
    .expect("valid email pattern")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Please enter your name.")]
    NameMissing,
    #[error("Please enter your email.")]
    EmailMissing,
    #[error("Please enter a valid email address.")]
    EmailInvalid,
    #[error("Please enter a message.")]
    MessageMissing,
    #[error("Message should be at least {} characters.", MIN_MESSAGE_CHARS)]
    MessageTooShort,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Element id of the input
    pub fn id(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    /// Element id of the inline error span that follows the input
    pub fn error_id(&self) -> String {
        format!("{}-error", self.id())
    }

    pub fn validate(&self, value: &str) -> Result<(), FieldError> {
        match self {
            Field::Name => validate_name(value),
            Field::Email => validate_email(value),
            Field::Message => validate_message(value),
        }
    }
}

/// Whitespace as the browser's `String.prototype.trim` sees it
fn is_browser_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

fn browser_trim(value: &str) -> &str {
    value.trim_matches(is_browser_whitespace)
}

pub fn validate_name(value: &str) -> Result<(), FieldError> {
    if browser_trim(value).is_empty() {
        return Err(FieldError::NameMissing);
    }
    Ok(())
}

pub fn validate_email(value: &str) -> Result<(), FieldError> {
    let value = browser_trim(value);
    if value.is_empty() {
        return Err(FieldError::EmailMissing);
    }
    if !EMAIL_RE.is_match(value) {
        return Err(FieldError::EmailInvalid);
    }
    Ok(())
}

pub fn validate_message(value: &str) -> Result<(), FieldError> {
    let value = browser_trim(value);
    if value.is_empty() {
        return Err(FieldError::MessageMissing);
    }
    if value.encode_utf16().count() < MIN_MESSAGE_CHARS {
        return Err(FieldError::MessageTooShort);
    }
    Ok(())
}

/// Current values of the three inputs
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Run every field check; never stops at the first failure.
    pub fn validate(&self) -> Validation {
        Validation {
            name: validate_name(&self.name),
            email: validate_email(&self.email),
            message: validate_message(&self.message),
        }
    }
}

/// Per-field results of a full validation pass
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Validation {
    pub name: Result<(), FieldError>,
    pub email: Result<(), FieldError>,
    pub message: Result<(), FieldError>,
}

impl Validation {
    pub fn result(&self, field: Field) -> Result<(), FieldError> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.name.is_ok() & self.email.is_ok() & self.message.is_ok()
    }

    pub fn errors(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(|f| self.result(f).err().map(|e| (f, e)))
    }
}

/// What the submit handler does
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Prevent submission and announce [`INVALID_SUBMIT_MESSAGE`]
    Block,
    /// Prevent submission, announce [`SUCCESS_MESSAGE`], reset, clear later
    Simulate,
    /// Let the browser submit to the form's action
    Forward,
}

impl SubmitOutcome {
    /// Text for the live region, if any
    pub fn live_message(&self) -> Option<&'static str> {
        match self {
            SubmitOutcome::Block => Some(INVALID_SUBMIT_MESSAGE),
            SubmitOutcome::Simulate => Some(SUCCESS_MESSAGE),
            SubmitOutcome::Forward => None,
        }
    }

    pub fn prevents_default(&self) -> bool {
        !matches!(self, SubmitOutcome::Forward)
    }
}

/// Decide the submit outcome; an empty `action` counts as no target.
pub fn submit_outcome(validation: &Validation, action: Option<&str>) -> SubmitOutcome {
    if !validation.is_valid() {
        SubmitOutcome::Block
    } else if action.map_or(true, |a| a.trim().is_empty()) {
        SubmitOutcome::Simulate
    } else {
        SubmitOutcome::Forward
    }
}

/// `aria-describedby` value linking an input to its error span
pub fn described_by(existing: Option<&str>, error_id: &str) -> String {
    let mut ids: Vec<&str> = existing
        .unwrap_or_default()
        .split_whitespace()
        .collect();
    if !ids.contains(&error_id) {
        ids.push(error_id);
    }
    ids.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn name_must_not_be_blank() {
        assert_eq!(validate_name(""), Err(FieldError::NameMissing));
        assert_eq!(validate_name("   "), Err(FieldError::NameMissing));
        assert_eq!(validate_name("Ada"), Ok(()));
    }

    #[test]
    fn email_accepts_simple_shapes() {
        assert_eq!(validate_email("ada@example.com"), Ok(()));
        assert_eq!(validate_email("  a.b+c@mail.example.org "), Ok(()));
    }

    #[test]
    fn email_rejects_empty_and_malformed() {
        assert_eq!(validate_email(""), Err(FieldError::EmailMissing));
        assert_eq!(validate_email("  "), Err(FieldError::EmailMissing));
        for bad in [
            "ada",
            "ada@",
            "ada@example",
            "@example.com",
            "ada@@example.com",
            "ada lovelace@example.com",
            "ada@exa mple.com",
            "ada@example.",
        ] {
            assert_eq!(validate_email(bad), Err(FieldError::EmailInvalid), "{bad}");
        }
    }

    #[test]
    fn message_needs_ten_trimmed_characters() {
        assert_eq!(validate_message(""), Err(FieldError::MessageMissing));
        assert_eq!(validate_message("     "), Err(FieldError::MessageMissing));
        assert_eq!(validate_message("too short"), Err(FieldError::MessageTooShort));
        // Padding doesn't count toward the minimum
        assert_eq!(
            validate_message("   123456789   "),
            Err(FieldError::MessageTooShort)
        );
        assert_eq!(validate_message("1234567890"), Ok(()));
    }

    #[test]
    fn message_length_counts_utf16_units() {
        // Each emoji is a surrogate pair: five of them make ten units
        assert_eq!(validate_message("😀😀😀😀😀"), Ok(()));
        assert_eq!(validate_message("😀😀😀😀"), Err(FieldError::MessageTooShort));
        assert_eq!(validate_message("ééééééééé"), Err(FieldError::MessageTooShort));
    }

    #[test]
    fn trimming_matches_browser_whitespace() {
        assert_eq!(validate_name("\u{FEFF}"), Err(FieldError::NameMissing));
        assert_eq!(validate_name("\u{A0}\u{2003}\n\t"), Err(FieldError::NameMissing));
        // NEL isn't whitespace to the browser
        assert_eq!(validate_name("\u{85}"), Ok(()));
        assert_eq!(
            validate_message("\u{FEFF}123456789\u{FEFF}"),
            Err(FieldError::MessageTooShort)
        );
        assert_eq!(validate_email("\u{FEFF}ada@example.com\u{FEFF}"), Ok(()));
    }

    #[test]
    fn email_parts_reject_browser_whitespace() {
        assert_eq!(
            validate_email("ada\u{FEFF}x@example.com"),
            Err(FieldError::EmailInvalid)
        );
        assert_eq!(
            validate_email("ada@exa\u{2003}mple.com"),
            Err(FieldError::EmailInvalid)
        );
        assert_eq!(validate_email("ada\u{85}x@example.com"), Ok(()));
    }

    #[test]
    fn error_messages_are_fixed_strings() {
        assert_eq!(FieldError::NameMissing.to_string(), "Please enter your name.");
        assert_eq!(FieldError::EmailMissing.to_string(), "Please enter your email.");
        assert_eq!(
            FieldError::EmailInvalid.to_string(),
            "Please enter a valid email address."
        );
        assert_eq!(FieldError::MessageMissing.to_string(), "Please enter a message.");
        assert_eq!(
            FieldError::MessageTooShort.to_string(),
            "Message should be at least 10 characters."
        );
    }

    #[test]
    fn validation_reports_every_invalid_field() {
        let v = form("", "nope", "hi").validate();
        assert!(!v.is_valid());
        let errors: Vec<_> = v.errors().collect();
        assert_eq!(
            errors,
            vec![
                (Field::Name, FieldError::NameMissing),
                (Field::Email, FieldError::EmailInvalid),
                (Field::Message, FieldError::MessageTooShort),
            ]
        );
    }

    #[test]
    fn invalid_submit_is_blocked() {
        let v = form("Ada", "bad", "Hello there, world").validate();
        let outcome = submit_outcome(&v, None);
        assert_eq!(outcome, SubmitOutcome::Block);
        assert!(outcome.prevents_default());
        assert_eq!(
            outcome.live_message(),
            Some("Please fix the highlighted fields and try again.")
        );

        // An action doesn't matter when fields are invalid
        assert_eq!(submit_outcome(&v, Some("/send")), SubmitOutcome::Block);
    }

    #[test]
    fn valid_submit_without_action_is_simulated() {
        let v = form("Ada", "ada@example.com", "Hello there, world").validate();
        assert!(v.is_valid());

        for action in [None, Some(""), Some("  ")] {
            let outcome = submit_outcome(&v, action);
            assert_eq!(outcome, SubmitOutcome::Simulate);
            assert!(outcome.prevents_default());
            assert_eq!(outcome.live_message(), Some("Thanks! Your message looks good."));
        }
    }

    #[test]
    fn valid_submit_with_action_is_forwarded() {
        let v = form("Ada", "ada@example.com", "Hello there, world").validate();
        let outcome = submit_outcome(&v, Some("https://formspree.io/f/abc"));
        assert_eq!(outcome, SubmitOutcome::Forward);
        assert!(!outcome.prevents_default());
        assert_eq!(outcome.live_message(), None);
    }

    #[test]
    fn field_ids() {
        assert_eq!(Field::Name.id(), "name");
        assert_eq!(Field::Email.error_id(), "email-error");
        assert_eq!(
            Field::Message.validate("x"),
            Err(FieldError::MessageTooShort)
        );
        assert_eq!(form("a", "b", "c").value(Field::Email), "b");
    }

    #[test]
    fn described_by_appends_without_duplicates() {
        assert_eq!(described_by(None, "name-error"), "name-error");
        assert_eq!(described_by(Some(""), "name-error"), "name-error");
        assert_eq!(
            described_by(Some("name-hint"), "name-error"),
            "name-hint name-error"
        );
        assert_eq!(
            described_by(Some("name-hint name-error"), "name-error"),
            "name-hint name-error"
        );
    }
}
