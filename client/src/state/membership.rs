//! Id sets backing the toggle preference domains.
//!
//! DESIGN
//! ======
//! Membership is held as a real set rather than a map where a missing key
//! means "false". The two persisted shapes (an id array for bookmarks, an
//! id→bool object for likes and group memberships) are decoded into the same
//! set type; a `false` entry in an object decodes as "not a member", so
//! there is no third "explicitly false" state in memory.

#[cfg(test)]
#[path = "membership_test.rs"]
mod membership_test;

use std::collections::{BTreeMap, HashSet};

use crate::storage::{KeyValueStore, StoreError, load_json, save_json};

/// How a [`MembershipSet`] is laid out in storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetFormat {
    /// JSON array of ids, insertion order.
    List,
    /// JSON object mapping id to `true`.
    FlagMap,
}

/// Insertion-ordered set of opaque string ids.
#[derive(Clone, Debug, Default)]
pub struct MembershipSet {
    order: Vec<String>,
    index: HashSet<String>,
}

impl MembershipSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains(id)
    }

    /// Add `id`. Returns `false` if it was already present.
    pub fn insert(&mut self, id: &str) -> bool {
        if !self.index.insert(id.to_owned()) {
            return false;
        }
        self.order.push(id.to_owned());
        true
    }

    /// Remove `id`. Returns `false` if it was not present.
    pub fn remove(&mut self, id: &str) -> bool {
        if !self.index.remove(id) {
            return false;
        }
        self.order.retain(|existing| existing != id);
        true
    }

    /// Flip membership of `id` and return the new state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.remove(id) {
            false
        } else {
            self.insert(id)
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Read the set stored under `key`. Missing or malformed data reads as
    /// the empty set.
    pub fn load(store: &impl KeyValueStore, key: &str, format: SetFormat) -> Self {
        match format {
            SetFormat::List => load_json::<Vec<String>>(store, key)
                .map(|ids| ids.iter().map(String::as_str).collect())
                .unwrap_or_default(),
            SetFormat::FlagMap => load_json::<BTreeMap<String, bool>>(store, key)
                .map(|flags| {
                    flags
                        .iter()
                        .filter(|(_, member)| **member)
                        .map(|(id, _)| id.as_str())
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    /// Write the whole set under `key`.
    ///
    /// # Errors
    ///
    /// Propagates the store's write error.
    pub fn save(&self, store: &impl KeyValueStore, key: &str, format: SetFormat) -> Result<(), StoreError> {
        match format {
            SetFormat::List => save_json(store, key, &self.order),
            SetFormat::FlagMap => {
                let flags: BTreeMap<&str, bool> = self.iter().map(|id| (id, true)).collect();
                save_json(store, key, &flags)
            }
        }
    }
}

impl<'a> FromIterator<&'a str> for MembershipSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl PartialEq for MembershipSet {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for MembershipSet {}
