//! Contact form payload, validation, and the submit flow.
//!
//! DESIGN
//! ======
//! Validation is synchronous and all-or-nothing: every failing field is
//! collected into one [`ValidationError`] and nothing is sent. A valid
//! payload goes through exactly one relay call; the outcome is reported via
//! a [`NotificationSink`] and the form is cleared only on success.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::fmt;

use crate::net::relay::{FormRelay, SubmitError, deliver};
use crate::state::notification::{NotificationKind, NotificationSink};

pub const SENDING_MESSAGE: &str = "Sending message...";
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again.";

/// Form field names, in display order.
pub const FIELD_NAMES: [&str; 4] = ["name", "email", "subject", "message"];

/// The four visible contact form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactPayload {
    /// Build from a by-name lookup over the submitted form data. Names the
    /// lookup does not know read as empty.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let field = |name: &str| lookup(name).unwrap_or_default();
        Self {
            name: field(FIELD_NAMES[0]),
            email: field(FIELD_NAMES[1]),
            subject: field(FIELD_NAMES[2]),
            message: field(FIELD_NAMES[3]),
        }
    }

    /// `(field name, value)` pairs in form order.
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            (FIELD_NAMES[0], self.name.as_str()),
            (FIELD_NAMES[1], self.email.as_str()),
            (FIELD_NAMES[2], self.subject.as_str()),
            (FIELD_NAMES[3], self.message.as_str()),
        ]
    }
}

/// One failed validation rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    NameRequired,
    EmailRequired,
    EmailInvalid,
    SubjectRequired,
    MessageRequired,
}

impl FieldError {
    pub fn message(self) -> &'static str {
        match self {
            Self::NameRequired => "Name is required",
            Self::EmailRequired => "Email is required",
            Self::EmailInvalid => "Valid email is required",
            Self::SubjectRequired => "Subject is required",
            Self::MessageRequired => "Message is required",
        }
    }

    /// Form field the rule applies to.
    pub fn field(self) -> &'static str {
        match self {
            Self::NameRequired => "name",
            Self::EmailRequired | Self::EmailInvalid => "email",
            Self::SubjectRequired => "subject",
            Self::MessageRequired => "message",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// All validation failures of one submission attempt.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{}", join_messages(.0))]
pub struct ValidationError(pub Vec<FieldError>);

impl ValidationError {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }
}

fn join_messages(errors: &[FieldError]) -> String {
    errors.iter().map(|e| e.message()).collect::<Vec<_>>().join(", ")
}

/// Check every field, collecting all failures.
///
/// # Errors
///
/// Returns [`ValidationError`] listing every failing rule in field order.
pub fn validate(payload: &ContactPayload) -> Result<(), ValidationError> {
    let mut errors = Vec::new();
    if payload.name.trim().is_empty() {
        errors.push(FieldError::NameRequired);
    }
    if payload.email.trim().is_empty() {
        errors.push(FieldError::EmailRequired);
    }
    if !is_valid_email(&payload.email) {
        errors.push(FieldError::EmailInvalid);
    }
    if payload.subject.trim().is_empty() {
        errors.push(FieldError::SubjectRequired);
    }
    if payload.message.trim().is_empty() {
        errors.push(FieldError::MessageRequired);
    }
    if errors.is_empty() { Ok(()) } else { Err(ValidationError(errors)) }
}

/// Basic `local@domain.tld` shape: one `@`, no whitespace, non-empty local
/// part, and a dot inside the domain with text on both sides.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// A contact form as the submit flow sees it.
pub trait ContactForm {
    /// Current field values.
    fn payload(&self) -> ContactPayload;
    /// The form's `action` attribute.
    fn action(&self) -> Option<String>;
    /// Clear every field.
    fn reset(&mut self);
}

/// Result of one submit attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid(ValidationError),
    Sent,
    Failed(SubmitError),
}

/// Validate, send, and report one submission.
pub async fn submit<F, R, N>(form: &mut F, relay: &R, sink: &N) -> SubmitOutcome
where
    F: ContactForm + ?Sized,
    R: FormRelay + ?Sized,
    N: NotificationSink + ?Sized,
{
    let payload = form.payload();
    if let Err(e) = validate(&payload) {
        sink.notify(NotificationKind::Error, &e.to_string());
        return SubmitOutcome::Invalid(e);
    }

    sink.notify(NotificationKind::Info, SENDING_MESSAGE);
    let action = form.action();
    match deliver(relay, action.as_deref(), &payload).await {
        Ok(()) => {
            sink.notify(NotificationKind::Success, SUCCESS_MESSAGE);
            form.reset();
            SubmitOutcome::Sent
        }
        Err(e) => {
            log::error!("form submission error: {e}");
            sink.notify(NotificationKind::Error, FAILURE_MESSAGE);
            SubmitOutcome::Failed(e)
        }
    }
}
