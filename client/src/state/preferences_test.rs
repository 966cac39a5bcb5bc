use super::*;
use crate::storage::MemoryStore;
use time::macros::datetime;

fn registry() -> PreferenceRegistry<MemoryStore> {
    PreferenceRegistry::new(MemoryStore::new())
}

fn contact_fields() -> BTreeMap<String, String> {
    [
        ("name", "Mei"),
        ("email", "mei@example.edu"),
        ("subject", "Housing"),
        ("message", "Hello"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_owned(), v.to_owned()))
    .collect()
}

// =============================================================
// Keys
// =============================================================

#[test]
fn default_keys_are_namespaced_per_domain() {
    let keys = StorageKeys::default();
    assert_eq!(keys.bookmarks, "isp.bookmarks");
    assert_eq!(keys.likes, "isp.likes");
    assert_eq!(keys.group_memberships, "isp.groupMemberships");
    assert_eq!(keys.language, "isp.language");
    assert_eq!(keys.form_submissions, "isp.formSubmissions");
}

#[test]
fn custom_namespace_isolates_registries() {
    let store = MemoryStore::new();
    let a = PreferenceRegistry::with_keys(&store, StorageKeys::with_namespace("a"));
    let b = PreferenceRegistry::with_keys(&store, StorageKeys::with_namespace("b"));
    a.toggle_bookmark("tip-1").expect("toggle");
    assert!(a.is_bookmarked("tip-1"));
    assert!(!b.is_bookmarked("tip-1"));
}

// =============================================================
// Toggle domains
// =============================================================

#[test]
fn toggle_twice_is_an_involution_in_every_domain() {
    let prefs = registry();
    for domain in [ToggleDomain::Bookmark, ToggleDomain::Like, ToggleDomain::GroupMembership] {
        let before = prefs.is_set(domain, "x");
        assert_eq!(prefs.toggle(domain, "x").expect("toggle"), !before);
        assert_eq!(prefs.toggle(domain, "x").expect("toggle"), before);
        assert_eq!(prefs.is_set(domain, "x"), before);
    }
}

#[test]
fn unseen_id_toggles_to_set() {
    let prefs = registry();
    assert!(prefs.toggle_group_membership("g1").expect("toggle"));
    assert!(prefs.is_group_member("g1"));
}

#[test]
fn bookmarks_never_hold_duplicates() {
    let prefs = registry();
    for _ in 0..5 {
        prefs.toggle_bookmark("a").expect("toggle");
        prefs.toggle_bookmark("b").expect("toggle");
    }
    assert_eq!(prefs.bookmarks(), vec!["a".to_owned(), "b".to_owned()]);

    assert!(!prefs.toggle_bookmark("a").expect("toggle"));
    assert_eq!(prefs.bookmarks(), vec!["b".to_owned()]);

    assert!(prefs.toggle_bookmark("a").expect("toggle"));
    assert_eq!(prefs.bookmarks(), vec!["b".to_owned(), "a".to_owned()]);
}

#[test]
fn duplicate_bookmarks_from_storage_collapse_and_stay_collapsed() {
    let prefs = PreferenceRegistry::new(MemoryStore::new().with_raw("isp.bookmarks", r#"["a","a","b"]"#));
    assert_eq!(prefs.bookmarks(), vec!["a".to_owned(), "b".to_owned()]);
    assert!(prefs.toggle_bookmark("c").expect("toggle"));
    assert_eq!(prefs.store().raw("isp.bookmarks").as_deref(), Some(r#"["a","b","c"]"#));
}

#[test]
fn domains_are_independent() {
    let prefs = registry();
    prefs.toggle_like("shared-id").expect("toggle");
    assert!(prefs.is_liked("shared-id"));
    assert!(!prefs.is_bookmarked("shared-id"));
    assert!(!prefs.is_group_member("shared-id"));
}

#[test]
fn likes_persist_as_flag_map_without_false_entries() {
    let prefs = registry();
    prefs.toggle_like("t1").expect("toggle");
    prefs.toggle_like("t2").expect("toggle");
    prefs.toggle_like("t2").expect("toggle");
    assert_eq!(prefs.store().raw("isp.likes").as_deref(), Some(r#"{"t1":true}"#));
    assert_eq!(prefs.liked_threads(), vec!["t1".to_owned()]);
}

#[test]
fn explicit_false_in_storage_reads_as_not_liked() {
    let prefs = PreferenceRegistry::new(MemoryStore::new().with_raw("isp.likes", r#"{"t1":false}"#));
    assert!(!prefs.is_liked("t1"));
    assert!(prefs.toggle_like("t1").expect("toggle"));
}

#[test]
fn malformed_storage_reads_as_empty_domain() {
    let store = MemoryStore::new()
        .with_raw("isp.bookmarks", "nope")
        .with_raw("isp.groupMemberships", "[1,2]")
        .with_raw("isp.formSubmissions", "{}");
    let prefs = PreferenceRegistry::new(store);
    assert!(prefs.bookmarks().is_empty());
    assert!(prefs.joined_groups().is_empty());
    assert!(prefs.submissions().is_empty());
}

#[test]
fn failed_toggle_write_reports_error_and_leaves_state() {
    let prefs = registry();
    prefs.toggle_bookmark("a").expect("toggle");
    prefs.store().set_unavailable(true);
    assert_eq!(prefs.toggle_bookmark("b"), Err(StoreError::Unavailable));
    prefs.store().set_unavailable(false);
    assert_eq!(prefs.bookmarks(), vec!["a".to_owned()]);
}

// =============================================================
// Language
// =============================================================

#[test]
fn language_defaults_to_english() {
    assert_eq!(registry().language(), Language::En);
}

#[test]
fn set_language_then_get_returns_it() {
    let prefs = registry();
    prefs.set_language(Language::Fr).expect("set");
    assert_eq!(prefs.language(), Language::Fr);
    assert_eq!(prefs.store().raw("isp.language").as_deref(), Some("\"fr\""));
}

#[test]
fn language_read_failure_falls_back_to_english() {
    let prefs = registry();
    prefs.set_language(Language::Fr).expect("set");
    prefs.store().set_unavailable(true);
    assert_eq!(prefs.language(), Language::En);
}

#[test]
fn bare_legacy_code_is_accepted() {
    let prefs = PreferenceRegistry::new(MemoryStore::new().with_raw("isp.language", "ja"));
    assert_eq!(prefs.language(), Language::Ja);
}

#[test]
fn stored_unknown_code_reads_as_english() {
    let prefs = PreferenceRegistry::new(MemoryStore::new().with_raw("isp.language", "\"pt\""));
    assert_eq!(prefs.language(), Language::En);
}

#[test]
fn set_language_code_rejects_unknown_without_writing() {
    let prefs = registry();
    prefs.set_language(Language::De).expect("set");
    let err = prefs.set_language_code("pt").expect_err("unknown code");
    assert_eq!(err, PreferenceError::UnknownLanguage(UnknownLanguage("pt".to_owned())));
    assert_eq!(prefs.language(), Language::De);
    assert_eq!(prefs.set_language_code("ko"), Ok(Language::Ko));
}

// =============================================================
// Form submissions
// =============================================================

#[test]
fn append_adds_exactly_one_newer_entry() {
    let prefs = registry();
    let first = prefs
        .append_submission(contact_fields(), datetime!(2026-10-19 09:00 UTC))
        .expect("append");
    let before = prefs.submissions();
    let second = prefs
        .append_submission(contact_fields(), datetime!(2026-10-19 09:00 UTC))
        .expect("append");
    let after = prefs.submissions();
    assert_eq!(after.len(), before.len() + 1);
    assert!(second.timestamp > first.timestamp);
    assert_eq!(after.last(), Some(&second));
}

#[test]
fn append_failure_leaves_log_unchanged() {
    let prefs = registry();
    prefs
        .append_submission(contact_fields(), datetime!(2026-10-19 09:00 UTC))
        .expect("append");
    prefs.store().set_unavailable(true);
    assert!(prefs.append_submission(contact_fields(), datetime!(2026-10-19 10:00 UTC)).is_err());
    prefs.store().set_unavailable(false);
    assert_eq!(prefs.submissions().len(), 1);
}

// =============================================================
// Snapshot
// =============================================================

#[test]
fn snapshot_reflects_every_domain() {
    let prefs = registry();
    prefs.toggle_bookmark("tip-1").expect("toggle");
    prefs.toggle_like("thread-1").expect("toggle");
    prefs.toggle_group_membership("group-1").expect("toggle");
    prefs.set_language(Language::Es).expect("set");

    let snapshot = prefs.snapshot();
    assert!(snapshot.is_bookmarked("tip-1"));
    assert!(snapshot.is_liked("thread-1"));
    assert!(snapshot.is_group_member("group-1"));
    assert!(!snapshot.is_liked("tip-1"));
    assert_eq!(snapshot.language, Language::Es);
}
