use super::*;

fn all() -> LoadState<Event> {
    LoadState::from_fetch(serde_json::from_str(include_str!("../../../site/data/events.json")).ok())
}

#[test]
fn related_events_share_type() {
    let all = all();
    let mixer = find_event(&all, Some("evt-welcome-mixer")).expect("fixture event");
    let ids: Vec<String> = related_events(&all, mixer).records().iter().map(|e| e.id.clone()).collect();
    assert_eq!(ids, ["evt-city-tour"]);
}

#[test]
fn unknown_or_missing_id_finds_nothing() {
    let all = all();
    assert!(find_event(&all, Some("evt-nope")).is_none());
    assert!(find_event(&all, None).is_none());
    assert!(find_event(&LoadState::Failed, Some("evt-welcome-mixer")).is_none());
}

#[test]
fn labels_combine_date_time_and_capacity() {
    let all = all();
    let mut event = find_event(&all, Some("evt-cv-workshop")).expect("fixture event").clone();
    event.time = "14:00".to_owned();
    event.capacity = 40;
    assert_eq!(date_time_label(&event), "Jan 20, 2027 at 14:00");
    assert_eq!(capacity_label(&event), "40 people");
    event.time = String::new();
    assert_eq!(date_time_label(&event), "Jan 20, 2027");
}

#[test]
fn render_links_contact_and_keeps_description_markup() {
    let all = all();
    let mut event = find_event(&all, Some("evt-lunar-new-year")).expect("fixture event").clone();
    event.contact = "club@example.edu".to_owned();
    event.description = "<ul><li>Dumplings</li></ul>".to_owned();
    let html = render_event(&event, false);
    assert!(html.contains(r#"<a href="mailto:club@example.edu">club@example.edu</a>"#));
    assert!(html.contains("<ul><li>Dumplings</li></ul>"));
    assert!(html.contains("Save Event"));
}

#[test]
fn lone_type_renders_empty_related_state() {
    let all = all();
    let workshop = find_event(&all, Some("evt-cv-workshop")).expect("fixture event");
    assert!(render_related(&related_events(&all, workshop)).contains("No related events available"));
}
