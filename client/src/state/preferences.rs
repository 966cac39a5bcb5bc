//! Typed preference registry over a [`KeyValueStore`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page owns one registry. It exposes five independently keyed
//! preference domains: bookmarks, thread likes, study-group memberships, the
//! interface language, and the contact form submission log. The first three
//! share one toggle contract (`is_set` / `toggle`) and differ only in their
//! storage key and persisted shape.
//!
//! TRADE-OFFS
//! ==========
//! Each operation re-reads its key so two pages (or tabs) see each other's
//! writes on the next interaction. Writes from concurrent tabs are not merged:
//! the last write of a key wins.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use std::collections::BTreeMap;

use records::{Language, UnknownLanguage};
use time::OffsetDateTime;

use super::membership::{MembershipSet, SetFormat};
use super::submissions::{FormSubmission, append_capped};
use crate::storage::{KeyValueStore, StoreError, load_json, save_json};

/// Failure from a preference write.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PreferenceError {
    #[error(transparent)]
    UnknownLanguage(#[from] UnknownLanguage),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The three toggle domains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToggleDomain {
    Bookmark,
    Like,
    GroupMembership,
}

impl ToggleDomain {
    fn format(self) -> SetFormat {
        match self {
            Self::Bookmark => SetFormat::List,
            Self::Like | Self::GroupMembership => SetFormat::FlagMap,
        }
    }
}

/// Namespaced storage keys, one per preference domain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageKeys {
    pub bookmarks: String,
    pub likes: String,
    pub group_memberships: String,
    pub language: String,
    pub form_submissions: String,
}

impl StorageKeys {
    pub const DEFAULT_NAMESPACE: &'static str = "isp";

    #[must_use]
    pub fn with_namespace(namespace: &str) -> Self {
        let key = |domain: &str| format!("{namespace}.{domain}");
        Self {
            bookmarks: key("bookmarks"),
            likes: key("likes"),
            group_memberships: key("groupMemberships"),
            language: key("language"),
            form_submissions: key("formSubmissions"),
        }
    }

    fn toggle_key(&self, domain: ToggleDomain) -> &str {
        match domain {
            ToggleDomain::Bookmark => &self.bookmarks,
            ToggleDomain::Like => &self.likes,
            ToggleDomain::GroupMembership => &self.group_memberships,
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::with_namespace(Self::DEFAULT_NAMESPACE)
    }
}

/// All preferences read once, for an initial paint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreferenceSnapshot {
    pub bookmarks: MembershipSet,
    pub likes: MembershipSet,
    pub groups: MembershipSet,
    pub language: Language,
}

impl PreferenceSnapshot {
    #[must_use]
    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.bookmarks.contains(id)
    }

    #[must_use]
    pub fn is_liked(&self, id: &str) -> bool {
        self.likes.contains(id)
    }

    #[must_use]
    pub fn is_group_member(&self, id: &str) -> bool {
        self.groups.contains(id)
    }
}

/// Typed accessors for every preference domain.
#[derive(Debug)]
pub struct PreferenceRegistry<S> {
    store: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> PreferenceRegistry<S> {
    pub fn new(store: S) -> Self {
        Self::with_keys(store, StorageKeys::default())
    }

    pub fn with_keys(store: S, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    // =========================================================================
    // TOGGLE DOMAINS
    // =========================================================================

    /// Current members of a toggle domain.
    pub fn members(&self, domain: ToggleDomain) -> MembershipSet {
        MembershipSet::load(&self.store, self.keys.toggle_key(domain), domain.format())
    }

    /// True iff `id` is bookmarked / liked / joined.
    pub fn is_set(&self, domain: ToggleDomain, id: &str) -> bool {
        self.members(domain).contains(id)
    }

    /// Flip `id` in `domain` and return the new state. An unseen id becomes
    /// set.
    ///
    /// # Errors
    ///
    /// Returns the store error when the updated set cannot be written; the
    /// stored state is then unchanged.
    pub fn toggle(&self, domain: ToggleDomain, id: &str) -> Result<bool, StoreError> {
        let mut members = self.members(domain);
        let now_set = members.toggle(id);
        members.save(&self.store, self.keys.toggle_key(domain), domain.format())?;
        Ok(now_set)
    }

    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.is_set(ToggleDomain::Bookmark, id)
    }

    /// # Errors
    ///
    /// See [`Self::toggle`].
    pub fn toggle_bookmark(&self, id: &str) -> Result<bool, StoreError> {
        self.toggle(ToggleDomain::Bookmark, id)
    }

    /// Bookmarked ids in the order they were added.
    pub fn bookmarks(&self) -> Vec<String> {
        self.members(ToggleDomain::Bookmark).iter().map(str::to_owned).collect()
    }

    pub fn is_liked(&self, thread_id: &str) -> bool {
        self.is_set(ToggleDomain::Like, thread_id)
    }

    /// # Errors
    ///
    /// See [`Self::toggle`].
    pub fn toggle_like(&self, thread_id: &str) -> Result<bool, StoreError> {
        self.toggle(ToggleDomain::Like, thread_id)
    }

    pub fn liked_threads(&self) -> Vec<String> {
        self.members(ToggleDomain::Like).iter().map(str::to_owned).collect()
    }

    pub fn is_group_member(&self, group_id: &str) -> bool {
        self.is_set(ToggleDomain::GroupMembership, group_id)
    }

    /// # Errors
    ///
    /// See [`Self::toggle`].
    pub fn toggle_group_membership(&self, group_id: &str) -> Result<bool, StoreError> {
        self.toggle(ToggleDomain::GroupMembership, group_id)
    }

    pub fn joined_groups(&self) -> Vec<String> {
        self.members(ToggleDomain::GroupMembership).iter().map(str::to_owned).collect()
    }

    // =========================================================================
    // LANGUAGE
    // =========================================================================

    /// Stored language, or English when unset, unknown, or unreadable.
    pub fn language(&self) -> Language {
        let Some(raw) = self.store.get(&self.keys.language) else {
            return Language::default();
        };
        // Older pages stored the bare code rather than a JSON string.
        let code = serde_json::from_str::<String>(&raw).unwrap_or(raw);
        Language::from_code(&code).unwrap_or_default()
    }

    /// # Errors
    ///
    /// Propagates the store's write error.
    pub fn set_language(&self, language: Language) -> Result<(), StoreError> {
        save_json(&self.store, &self.keys.language, &language)
    }

    /// Store a language given as a raw code. Unknown codes are rejected and
    /// nothing is written.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError::UnknownLanguage`] for unsupported codes and
    /// [`PreferenceError::Store`] when the write fails.
    pub fn set_language_code(&self, code: &str) -> Result<Language, PreferenceError> {
        let language: Language = code.parse()?;
        self.set_language(language)?;
        Ok(language)
    }

    // =========================================================================
    // FORM SUBMISSIONS
    // =========================================================================

    /// Every recorded submission, oldest first.
    pub fn submissions(&self) -> Vec<FormSubmission> {
        load_json(&self.store, &self.keys.form_submissions).unwrap_or_default()
    }

    /// Record a submission captured at `now`.
    ///
    /// # Errors
    ///
    /// Propagates the store's write error; the log is then unchanged.
    pub fn append_submission(
        &self,
        fields: BTreeMap<String, String>,
        now: OffsetDateTime,
    ) -> Result<FormSubmission, StoreError> {
        let mut log = self.submissions();
        let entry = append_capped(&mut log, fields, now);
        save_json(&self.store, &self.keys.form_submissions, &log)?;
        Ok(entry)
    }

    // =========================================================================
    // SNAPSHOT
    // =========================================================================

    /// Read every display-relevant domain once.
    pub fn snapshot(&self) -> PreferenceSnapshot {
        PreferenceSnapshot {
            bookmarks: self.members(ToggleDomain::Bookmark),
            likes: self.members(ToggleDomain::Like),
            groups: self.members(ToggleDomain::GroupMembership),
            language: self.language(),
        }
    }
}
