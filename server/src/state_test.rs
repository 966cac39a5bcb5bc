use time::macros::datetime;

use super::*;

fn message(subject: &str) -> ReceivedMessage {
    ReceivedMessage {
        form: ContactForm {
            name: "Mei".into(),
            email: "mei@example.edu".into(),
            subject: subject.into(),
            message: "Hello".into(),
        },
        received_at: datetime!(2026-10-01 09:30 UTC),
    }
}

#[test]
fn inbox_keeps_newest_messages_within_limit() {
    let mut inbox = ContactInbox::new(2);
    assert_eq!(inbox.push(message("a")), 0);
    assert_eq!(inbox.push(message("b")), 0);
    assert_eq!(inbox.push(message("c")), 1);

    let subjects: Vec<&str> = inbox.iter().map(|m| m.form.subject.as_str()).collect();
    assert_eq!(subjects, ["b", "c"]);
    assert_eq!(inbox.len(), 2);
}

#[test]
fn zero_limit_still_holds_one_message() {
    let mut inbox = ContactInbox::new(0);
    inbox.push(message("a"));
    assert_eq!(inbox.len(), 1);
}

#[test]
fn received_message_serializes_flat() {
    let value = serde_json::to_value(message("Visa")).unwrap();
    assert_eq!(value["subject"], "Visa");
    assert_eq!(value["received_at"], "2026-10-01T09:30:00Z");
}

#[tokio::test]
async fn app_state_starts_with_empty_inbox() {
    let state = AppState::new(10);
    assert!(state.inbox.read().await.is_empty());
}
