use super::*;
use time::macros::datetime;

fn fields(name: &str) -> BTreeMap<String, String> {
    [("name".to_owned(), name.to_owned()), ("email".to_owned(), "a@b.co".to_owned())]
        .into_iter()
        .collect()
}

#[test]
fn first_entry_uses_now() {
    let mut log = Vec::new();
    let now = datetime!(2026-10-19 12:00 UTC);
    let entry = append_capped(&mut log, fields("Mei"), now);
    assert_eq!(entry.timestamp, now);
    assert_eq!(log, vec![entry]);
}

#[test]
fn clock_going_backwards_still_yields_newer_timestamp() {
    let mut log = Vec::new();
    let first = append_capped(&mut log, fields("a"), datetime!(2026-10-19 12:00 UTC));
    let second = append_capped(&mut log, fields("b"), datetime!(2026-10-19 11:59 UTC));
    let third = append_capped(&mut log, fields("c"), second.timestamp);
    assert!(second.timestamp > first.timestamp);
    assert!(third.timestamp > second.timestamp);
    assert_eq!(second.timestamp - first.timestamp, Duration::milliseconds(1));
}

#[test]
fn log_is_capped_by_dropping_oldest() {
    let mut log = Vec::new();
    let start = datetime!(2026-01-01 0:00 UTC);
    for i in 0..=MAX_FORM_SUBMISSIONS {
        let minutes = i64::try_from(i).expect("small index");
        append_capped(&mut log, fields(&format!("n{i}")), start + Duration::minutes(minutes));
    }
    assert_eq!(log.len(), MAX_FORM_SUBMISSIONS);
    assert_eq!(log[0].fields["name"], "n1");
    assert_eq!(log[MAX_FORM_SUBMISSIONS - 1].fields["name"], format!("n{MAX_FORM_SUBMISSIONS}"));
}

#[test]
fn submitted_timestamp_field_cannot_shadow_capture_time() {
    let mut log = Vec::new();
    let mut submitted = fields("Mei");
    submitted.insert("timestamp".to_owned(), "1999-01-01".to_owned());
    let entry = append_capped(&mut log, submitted, datetime!(2026-10-19 12:00 UTC));
    assert!(!entry.fields.contains_key("timestamp"));
}

#[test]
fn serializes_fields_flat_next_to_timestamp() {
    let entry = FormSubmission { fields: fields("Mei"), timestamp: datetime!(2026-10-19 12:00 UTC) };
    let json = serde_json::to_value(&entry).expect("serialize");
    assert_eq!(json["name"], "Mei");
    assert_eq!(json["timestamp"], "2026-10-19T12:00:00Z");

    let parsed: FormSubmission = serde_json::from_value(json).expect("deserialize");
    assert_eq!(parsed, entry);
}
