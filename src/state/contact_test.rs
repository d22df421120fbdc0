use super::*;

use std::cell::RefCell;

use async_trait::async_trait;
use futures::executor::block_on;

use crate::config::NotificationConfig;
use crate::net::relay::RelayResponse;
use crate::state::notification::{Notification, NotificationCenter};

fn filled() -> ContactPayload {
    ContactPayload {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        subject: "Project".to_owned(),
        message: "Let's talk".to_owned(),
    }
}

struct MockForm {
    payload: ContactPayload,
    action: Option<String>,
}

impl MockForm {
    fn new(payload: ContactPayload) -> Self {
        Self { payload, action: Some("https://relay.test/f/abc".to_owned()) }
    }
}

impl ContactForm for MockForm {
    fn payload(&self) -> ContactPayload {
        self.payload.clone()
    }

    fn action(&self) -> Option<String> {
        self.action.clone()
    }

    fn reset(&mut self) {
        self.payload = ContactPayload::default();
    }
}

struct MockRelay {
    answer: Result<RelayResponse, SubmitError>,
    calls: RefCell<usize>,
}

impl MockRelay {
    fn status(status: u16) -> Self {
        Self { answer: Ok(RelayResponse { status, body: String::new() }), calls: RefCell::new(0) }
    }

    fn offline() -> Self {
        Self { answer: Err(SubmitError::Transport("network down".to_owned())), calls: RefCell::new(0) }
    }
}

#[async_trait(?Send)]
impl FormRelay for MockRelay {
    async fn post(&self, _endpoint: &str, _payload: &ContactPayload) -> Result<RelayResponse, SubmitError> {
        *self.calls.borrow_mut() += 1;
        self.answer.clone()
    }
}

/// Sink backed by the real single-notification center.
struct CenterSink {
    center: RefCell<NotificationCenter>,
    history: RefCell<Vec<NotificationKind>>,
}

impl CenterSink {
    fn new() -> Self {
        Self {
            center: RefCell::new(NotificationCenter::new(NotificationConfig::default())),
            history: RefCell::new(Vec::new()),
        }
    }

    fn visible(&self) -> Option<Notification> {
        self.center.borrow().current().cloned()
    }
}

impl NotificationSink for CenterSink {
    fn notify(&self, kind: NotificationKind, message: &str) {
        self.history.borrow_mut().push(kind);
        self.center.borrow_mut().show(kind, message);
    }
}

// =============================================================
// Validation
// =============================================================

#[test]
fn filled_payload_is_valid() {
    assert_eq!(validate(&filled()), Ok(()));
}

#[test]
fn bad_email_is_rejected_with_email_message() {
    let payload = ContactPayload {
        name: "A".to_owned(),
        email: "bad".to_owned(),
        subject: "S".to_owned(),
        message: "M".to_owned(),
    };
    let err = validate(&payload).expect_err("should be invalid");
    assert_eq!(err.errors(), &[FieldError::EmailInvalid]);
    assert_eq!(err.to_string(), "Valid email is required");
}

#[test]
fn whitespace_only_fields_count_as_empty() {
    let payload = ContactPayload {
        name: "   ".to_owned(),
        email: "a@b.co".to_owned(),
        subject: "\t".to_owned(),
        message: "\n".to_owned(),
    };
    let err = validate(&payload).expect_err("should be invalid");
    assert_eq!(
        err.errors(),
        &[FieldError::NameRequired, FieldError::SubjectRequired, FieldError::MessageRequired]
    );
}

#[test]
fn all_failures_are_joined_in_field_order() {
    let err = validate(&ContactPayload::default()).expect_err("should be invalid");
    assert_eq!(
        err.to_string(),
        "Name is required, Email is required, Valid email is required, Subject is required, Message is required"
    );
}

#[test]
fn empty_email_fails_presence_and_shape() {
    let payload = ContactPayload { email: String::new(), ..filled() };
    let err = validate(&payload).expect_err("should be invalid");
    assert_eq!(err.errors(), &[FieldError::EmailRequired, FieldError::EmailInvalid]);
    assert_eq!(err.to_string(), "Email is required, Valid email is required");
    assert_eq!(FieldError::EmailRequired.field(), "email");
}

#[test]
fn whitespace_email_fails_presence_and_shape() {
    let payload = ContactPayload { email: "   ".to_owned(), ..filled() };
    let err = validate(&payload).expect_err("should be invalid");
    assert_eq!(err.errors(), &[FieldError::EmailRequired, FieldError::EmailInvalid]);
}

#[test]
fn email_shape_rules() {
    assert!(is_valid_email("ada@example.com"));
    assert!(is_valid_email("a.b+c@mail.example.org"));
    assert!(is_valid_email("a@b.c"));

    assert!(!is_valid_email("bad"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("ada@"));
    assert!(!is_valid_email("ada@example"));
    assert!(!is_valid_email("ada@.com"));
    assert!(!is_valid_email("ada@example."));
    assert!(!is_valid_email("ada@@example.com"));
    assert!(!is_valid_email("a@b@c.com"));
    assert!(!is_valid_email("ada lovelace@example.com"));
    assert!(!is_valid_email(" ada@example.com"));
}

#[test]
fn payload_from_lookup_reads_every_named_control() {
    // Form data carries values for inputs, textareas, and selects alike.
    let entries = [("name", "Ada"), ("email", "ada@example.com"), ("subject", "Hiring"), ("message", "Hi")];
    let payload = ContactPayload::from_lookup(|name| {
        entries.iter().find(|(key, _)| *key == name).map(|(_, value)| (*value).to_owned())
    });
    assert_eq!(payload.subject, "Hiring");
    assert!(validate(&payload).is_ok());
}

#[test]
fn payload_from_lookup_treats_missing_names_as_empty() {
    let payload = ContactPayload::from_lookup(|name| (name == "name").then(|| "Ada".to_owned()));
    assert_eq!(payload.name, "Ada");
    assert_eq!(payload.email, "");
    assert_eq!(payload.subject, "");
    assert_eq!(payload.message, "");
}

#[test]
fn payload_fields_are_in_form_order() {
    let names = filled().fields().map(|(name, _)| name);
    assert_eq!(names, FIELD_NAMES);
}

// =============================================================
// Submit flow
// =============================================================

#[test]
fn invalid_submission_sends_nothing() {
    let mut form = MockForm::new(ContactPayload { email: "bad".to_owned(), ..filled() });
    let relay = MockRelay::status(200);
    let sink = CenterSink::new();

    let outcome = block_on(submit(&mut form, &relay, &sink));

    assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
    assert_eq!(*relay.calls.borrow(), 0);
    assert_eq!(*sink.history.borrow(), vec![NotificationKind::Error]);
    assert_eq!(form.payload.email, "bad");
}

#[test]
fn successful_submission_clears_fields_and_shows_success() {
    let mut form = MockForm::new(filled());
    let relay = MockRelay::status(200);
    let sink = CenterSink::new();

    let outcome = block_on(submit(&mut form, &relay, &sink));

    assert_eq!(outcome, SubmitOutcome::Sent);
    assert_eq!(*relay.calls.borrow(), 1);
    assert_eq!(form.payload, ContactPayload::default());
    assert_eq!(*sink.history.borrow(), vec![NotificationKind::Info, NotificationKind::Success]);
    let visible = sink.visible().expect("one notification visible");
    assert_eq!(visible.kind, NotificationKind::Success);
    assert_eq!(visible.message, SUCCESS_MESSAGE);
}

#[test]
fn rejected_submission_keeps_fields_and_shows_error() {
    let mut form = MockForm::new(filled());
    let relay = MockRelay::status(500);
    let sink = CenterSink::new();

    let outcome = block_on(submit(&mut form, &relay, &sink));

    assert_eq!(outcome, SubmitOutcome::Failed(SubmitError::Rejected { status: 500 }));
    assert_eq!(form.payload, filled());
    let visible = sink.visible().expect("one notification visible");
    assert_eq!(visible.kind, NotificationKind::Error);
    assert_eq!(visible.message, FAILURE_MESSAGE);
}

#[test]
fn network_failure_keeps_fields_and_shows_error() {
    let mut form = MockForm::new(filled());
    let relay = MockRelay::offline();
    let sink = CenterSink::new();

    let outcome = block_on(submit(&mut form, &relay, &sink));

    assert!(matches!(outcome, SubmitOutcome::Failed(SubmitError::Transport(_))));
    assert_eq!(form.payload, filled());
    assert_eq!(sink.visible().map(|n| n.kind), Some(NotificationKind::Error));
}

#[test]
fn missing_action_fails_without_request() {
    let mut form = MockForm::new(filled());
    form.action = None;
    let relay = MockRelay::status(200);
    let sink = CenterSink::new();

    let outcome = block_on(submit(&mut form, &relay, &sink));

    assert_eq!(outcome, SubmitOutcome::Failed(SubmitError::MissingEndpoint));
    assert_eq!(*relay.calls.borrow(), 0);
    assert_eq!(sink.visible().map(|n| n.message), Some(FAILURE_MESSAGE.to_owned()));
}
