use super::*;

#[test]
fn codes_round_trip_through_from_code() {
    for lang in Language::ALL {
        assert_eq!(Language::from_code(lang.code()), Some(lang));
    }
}

#[test]
fn unknown_codes_are_rejected() {
    assert_eq!(Language::from_code("pt"), None);
    assert_eq!(Language::from_code(""), None);
    assert_eq!("xx".parse::<Language>(), Err(UnknownLanguage("xx".to_owned())));
}

#[test]
fn default_is_english() {
    assert_eq!(Language::default(), Language::En);
}

#[test]
fn display_name_for_unknown_code_falls_back_to_english() {
    assert_eq!(Language::display_name_for_code("ko"), "한국어 (Korean)");
    assert_eq!(Language::display_name_for_code("klingon"), "English");
}

#[test]
fn serde_uses_lowercase_codes() {
    assert_eq!(serde_json::to_string(&Language::Fr).expect("serialize"), "\"fr\"");
    let parsed: Language = serde_json::from_str("\"ja\"").expect("deserialize");
    assert_eq!(parsed, Language::Ja);
    assert!(serde_json::from_str::<Language>("\"pt\"").is_err());
}

#[test]
fn native_names_match_selector_labels() {
    let names: Vec<&str> = Language::ALL.iter().map(|lang| lang.native_name()).collect();
    assert_eq!(names, ["English", "中文", "Español", "Français", "Deutsch", "日本語", "한국어"]);
}
