use super::*;
use crate::state::preferences::PreferenceRegistry;
use records::Language;

#[test]
fn native_browser_storage_fails_closed() {
    let store = BrowserStorage;
    assert_eq!(store.get("isp.language"), None);
    assert_eq!(store.set("isp.language", "\"fr\""), Err(StoreError::Unavailable));
    assert_eq!(store.remove("isp.language"), Err(StoreError::Unavailable));
}

#[test]
fn registry_over_unavailable_storage_reads_defaults() {
    let prefs = PreferenceRegistry::new(BrowserStorage);
    assert_eq!(prefs.language(), Language::En);
    assert!(prefs.bookmarks().is_empty());
    assert_eq!(prefs.toggle_bookmark("tip-1"), Err(StoreError::Unavailable));
    assert!(!prefs.is_bookmarked("tip-1"));
}
