use super::*;
use crate::storage::MemoryStore;

#[test]
fn toggle_twice_restores_original_state() {
    let mut set = MembershipSet::new();
    assert!(set.toggle("a"));
    assert!(set.contains("a"));
    assert!(!set.toggle("a"));
    assert!(!set.contains("a"));
    assert!(set.is_empty());
}

#[test]
fn insert_is_idempotent() {
    let mut set = MembershipSet::new();
    assert!(set.insert("a"));
    assert!(!set.insert("a"));
    assert_eq!(set.len(), 1);
}

#[test]
fn iteration_follows_insertion_order() {
    let set: MembershipSet = ["c", "a", "b"].into_iter().collect();
    assert_eq!(set.iter().collect::<Vec<_>>(), ["c", "a", "b"]);
}

#[test]
fn equality_ignores_order() {
    let left: MembershipSet = ["a", "b"].into_iter().collect();
    let right: MembershipSet = ["b", "a"].into_iter().collect();
    assert_eq!(left, right);
}

#[test]
fn list_format_drops_duplicates_on_load() {
    let store = MemoryStore::new().with_raw("bookmarks", r#"["a","b","a","c","b"]"#);
    let set = MembershipSet::load(&store, "bookmarks", SetFormat::List);
    assert_eq!(set.iter().collect::<Vec<_>>(), ["a", "b", "c"]);
}

#[test]
fn flag_map_treats_false_as_absent() {
    let store = MemoryStore::new().with_raw("likes", r#"{"t1":true,"t2":false}"#);
    let set = MembershipSet::load(&store, "likes", SetFormat::FlagMap);
    assert!(set.contains("t1"));
    assert!(!set.contains("t2"));
    assert_eq!(set.len(), 1);
}

#[test]
fn saves_in_each_format() {
    let store = MemoryStore::new();
    let set: MembershipSet = ["b", "a"].into_iter().collect();
    set.save(&store, "list", SetFormat::List).expect("save list");
    set.save(&store, "map", SetFormat::FlagMap).expect("save map");
    assert_eq!(store.raw("list").as_deref(), Some(r#"["b","a"]"#));
    assert_eq!(store.raw("map").as_deref(), Some(r#"{"a":true,"b":true}"#));
}

#[test]
fn malformed_or_missing_data_loads_empty() {
    let store = MemoryStore::new().with_raw("likes", "{oops");
    assert!(MembershipSet::load(&store, "likes", SetFormat::FlagMap).is_empty());
    assert!(MembershipSet::load(&store, "absent", SetFormat::List).is_empty());
}
