use super::*;

#[derive(Clone, Debug, PartialEq)]
struct Item {
    id: &'static str,
    group: &'static str,
}

fn items() -> Vec<Item> {
    vec![
        Item { id: "a", group: "x" },
        Item { id: "b", group: "x" },
        Item { id: "c", group: "y" },
        Item { id: "d", group: "x" },
        Item { id: "e", group: "x" },
        Item { id: "f", group: "x" },
    ]
}

#[test]
fn page_title_appends_site_name() {
    assert_eq!(page_title("Mixer"), "Mixer - International Student Platform");
}

#[test]
fn find_by_id_handles_missing_unknown_and_failed() {
    let loaded = LoadState::from_records(items());
    assert_eq!(find_by_id(&loaded, Some("c"), |i| i.id).map(|i| i.group), Some("y"));
    assert!(find_by_id(&loaded, None, |i| i.id).is_none());
    assert!(find_by_id(&loaded, Some("zzz"), |i| i.id).is_none());
    assert!(find_by_id(&LoadState::<Item>::Failed, Some("a"), |i| i.id).is_none());
}

#[test]
fn related_excludes_current_and_caps_at_three() {
    let all = items();
    let related = related(&all, "a", |i| i.id, |i| i.group == "x");
    let ids: Vec<&str> = related.records().iter().map(|i| i.id).collect();
    assert_eq!(ids, ["b", "d", "e"]);
}

#[test]
fn related_with_no_peers_is_empty() {
    let all = items();
    assert_eq!(related(&all, "c", |i| i.id, |i| i.group == "y"), LoadState::Empty);
}

#[test]
fn bookmark_button_reflects_state() {
    let on = bookmark_button(ItemKind::Tip, true);
    assert!(on.contains(r#"id="bookmark-btn""#));
    assert!(on.contains("bookmarked"));
    assert!(on.contains(r#"<span class="bookmark-text">Bookmarked</span>"#));
    let off = bookmark_button(ItemKind::Event, false);
    assert!(!off.contains(" bookmarked"));
    assert!(off.contains("Save Event"));
    assert!(off.contains("🤍"));
}
