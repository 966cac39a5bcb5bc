use std::cell::Cell;
use std::future::ready;
use std::task::Poll;

use futures::executor::block_on;
use records::contact::NETWORK_ERROR_MESSAGE;
use time::macros::datetime;

use super::*;
use crate::storage::MemoryStore;

const NOW: OffsetDateTime = datetime!(2026-10-01 12:00 UTC);

fn fields(email: &str) -> BTreeMap<String, String> {
    [("name", "Mei"), ("email", email), ("subject", "Housing"), ("message", "Any tips?")]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect()
}

fn never_post(_: String, _: BTreeMap<String, String>) -> std::future::Ready<SubmitOutcome> {
    panic!("POST must not be sent")
}

#[test]
fn valid_submission_without_endpoint_is_logged_once() {
    let prefs = PreferenceRegistry::new(MemoryStore::new());
    let feedback = block_on(submit(&prefs, fields("mei@example.edu"), None, NOW, never_post));

    assert_eq!(feedback.kind, FeedbackKind::Success);
    assert_eq!(feedback.message, SUCCESS_MESSAGE);
    assert!(feedback.reset_form);
    let log = prefs.submissions();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].fields.get("subject").map(String::as_str), Some("Housing"));
}

#[test]
fn each_submission_is_newer_than_the_last() {
    let prefs = PreferenceRegistry::new(MemoryStore::new());
    block_on(submit(&prefs, fields("mei@example.edu"), None, NOW, never_post));
    block_on(submit(&prefs, fields("mei@example.edu"), None, NOW, never_post));

    let log = prefs.submissions();
    assert_eq!(log.len(), 2);
    assert!(log[1].timestamp > log[0].timestamp);
}

#[test]
fn missing_fields_are_reported_and_not_logged() {
    let prefs = PreferenceRegistry::new(MemoryStore::new());
    let mut partial = fields("mei@example.edu");
    partial.insert("message".to_owned(), "   ".to_owned());

    let feedback = block_on(submit(&prefs, partial, None, NOW, never_post));

    assert_eq!(feedback, Feedback::error("Please fill in all required fields."));
    assert!(prefs.submissions().is_empty());
}

#[test]
fn invalid_email_is_reported() {
    let prefs = PreferenceRegistry::new(MemoryStore::new());
    let feedback = block_on(submit(&prefs, fields("not-an-email"), None, NOW, never_post));
    assert_eq!(feedback.message, "Please enter a valid email address.");
    assert!(!feedback.reset_form);
}

#[test]
fn rejected_post_shows_server_message_and_keeps_form() {
    let prefs = PreferenceRegistry::new(MemoryStore::new());
    let posted = Cell::new(false);
    let feedback = block_on(submit(
        &prefs,
        fields("mei@example.edu"),
        Some("/api/contact".to_owned()),
        NOW,
        |endpoint, _| {
            assert_eq!(endpoint, "/api/contact");
            posted.set(true);
            ready(SubmitOutcome::Rejected { message: NETWORK_ERROR_MESSAGE.to_owned() })
        },
    ));

    assert!(posted.get());
    assert_eq!(feedback, Feedback::error(NETWORK_ERROR_MESSAGE));
    assert!(prefs.submissions().is_empty());
}

#[test]
fn accepted_post_is_logged() {
    let prefs = PreferenceRegistry::new(MemoryStore::new());
    let feedback = block_on(submit(&prefs, fields("mei@example.edu"), Some("/api/contact".to_owned()), NOW, |_, sent| {
        assert_eq!(sent.len(), 4);
        ready(SubmitOutcome::Accepted { message: None })
    }));
    assert_eq!(feedback.kind, FeedbackKind::Success);
    assert_eq!(prefs.submissions().len(), 1);
}

/// Pending on the first poll, like a response still in flight.
async fn in_flight(outcome: SubmitOutcome) -> SubmitOutcome {
    let mut polled = false;
    futures::future::poll_fn(|cx| {
        if polled {
            Poll::Ready(())
        } else {
            polled = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    })
    .await;
    outcome
}

#[test]
fn post_that_suspends_before_answering_still_completes() {
    let prefs = PreferenceRegistry::new(MemoryStore::new());
    let feedback = block_on(submit(&prefs, fields("mei@example.edu"), Some("/api/contact".to_owned()), NOW, |_, _| {
        in_flight(SubmitOutcome::Accepted { message: None })
    }));
    assert_eq!(feedback.kind, FeedbackKind::Success);
    assert_eq!(prefs.submissions().len(), 1);
}

#[test]
fn storage_failure_shows_save_error() {
    let prefs = PreferenceRegistry::new(MemoryStore::new());
    prefs.store().set_unavailable(true);
    let feedback = block_on(submit(&prefs, fields("mei@example.edu"), None, NOW, never_post));
    assert_eq!(feedback, Feedback::error(SAVE_FAILED_MESSAGE));
}

#[test]
fn blank_endpoint_attribute_means_none() {
    assert_eq!(endpoint_from_attribute(None), None);
    assert_eq!(endpoint_from_attribute(Some("  ".to_owned())), None);
    assert_eq!(endpoint_from_attribute(Some(" /api/contact ".to_owned())), Some("/api/contact".to_owned()));
}
