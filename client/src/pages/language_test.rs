use super::*;

fn tips() -> LoadState<Tip> {
    LoadState::from_fetch(serde_json::from_str(include_str!("../../../site/data/tips.json")).ok())
}

#[test]
fn options_cover_every_language_and_select_current() {
    let html = render_language_options(Language::Fr);
    assert_eq!(html.matches("<option").count(), Language::ALL.len());
    assert!(html.contains(r#"<option value="fr" selected>Français</option>"#));
    assert!(html.contains(r#"<option value="en">English</option>"#));
}

#[test]
fn language_tips_are_academic_language_resources() {
    let found = language_tips(&tips());
    let ids: Vec<&str> = found.records().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["tip-language-exchange"]);
}

#[test]
fn no_language_tips_shows_suggestions() {
    let html = render_language_tips(&LoadState::Empty);
    assert_eq!(html.matches(r#"<div class="card">"#).count(), 3);
    assert!(html.contains("tips.html?filter=Academic"));
    assert!(!html.contains("error_loading"));
}

#[test]
fn failed_fetch_shows_error_state() {
    let html = render_language_tips(&LoadState::Failed);
    assert!(html.contains(r#"data-i18n="error_loading""#));
    assert!(html.contains("Error loading language resources"));
}

#[test]
fn change_message_uses_display_name() {
    assert_eq!(change_message(Language::Zh), "Language changed to 中文 (Chinese)");
}
