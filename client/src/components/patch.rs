//! Node-level DOM edits applied after a preference toggle.
//!
//! DESIGN
//! ======
//! A toggle never repaints its list. The page computes the new state, asks
//! this module for the handful of edits that state implies, and applies them
//! through `util::dom`. Keeping the edits as data makes them testable
//! without a browser.

#[cfg(test)]
#[path = "patch_test.rs"]
mod patch_test;

use records::{Group, Thread};

use crate::components::cards::{ItemKind, heart_icon};
use crate::util::html::attr_selector;

pub const JOINED_CLASS: &str = "joined";
pub const BOOKMARKED_CLASS: &str = "bookmarked";
pub const DETAIL_BOOKMARK_ID: &str = "bookmark-btn";

/// One edit to every element matching `selector`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DomPatch {
    /// Replace the text content.
    Text { selector: String, text: String },
    /// Add (`enabled`) or remove a class.
    Class { selector: String, class: &'static str, enabled: bool },
}

impl DomPatch {
    #[must_use]
    pub fn selector(&self) -> &str {
        match self {
            Self::Text { selector, .. } | Self::Class { selector, .. } => selector,
        }
    }
}

#[must_use]
pub fn join_label(joined: bool) -> &'static str {
    if joined { "Leave Group" } else { "Join Group" }
}

#[must_use]
pub fn members_label(group: &Group, joined: bool) -> String {
    format!("{}/{} members", group.displayed_members(joined), group.max_members)
}

/// Icon swap for a card's bookmark button.
#[must_use]
pub fn bookmark_patches(kind: ItemKind, id: &str, bookmarked: bool) -> Vec<DomPatch> {
    let button = format!(".bookmark-btn{}", attr_selector(kind.id_attribute(), id));
    vec![DomPatch::Text { selector: format!("{button} .bookmark-icon"), text: heart_icon(bookmarked).to_owned() }]
}

/// Icon, text, and class of the detail page's bookmark button.
#[must_use]
pub fn detail_bookmark_patches(kind: ItemKind, bookmarked: bool) -> Vec<DomPatch> {
    let button = format!("#{DETAIL_BOOKMARK_ID}");
    vec![
        DomPatch::Text { selector: format!("{button} .bookmark-icon"), text: heart_icon(bookmarked).to_owned() },
        DomPatch::Text { selector: format!("{button} .bookmark-text"), text: kind.bookmark_text(bookmarked).to_owned() },
        DomPatch::Class { selector: button, class: BOOKMARKED_CLASS, enabled: bookmarked },
    ]
}

/// Icon and derived count of a thread's like button.
#[must_use]
pub fn like_patches(thread: &Thread, liked: bool) -> Vec<DomPatch> {
    let button = format!(".like-btn{}", attr_selector("data-thread-id", &thread.id));
    vec![
        DomPatch::Text { selector: format!("{button} .like-icon"), text: heart_icon(liked).to_owned() },
        DomPatch::Text { selector: format!("{button} .like-count"), text: thread.displayed_likes(liked).to_string() },
    ]
}

/// Join button label and class, plus the derived member count.
#[must_use]
pub fn group_patches(group: &Group, joined: bool) -> Vec<DomPatch> {
    let card = format!(".study-group{}", attr_selector("data-group-id", &group.id));
    let button = format!("{card} .join-btn");
    vec![
        DomPatch::Text { selector: button.clone(), text: join_label(joined).to_owned() },
        DomPatch::Class { selector: button, class: JOINED_CLASS, enabled: joined },
        DomPatch::Text { selector: format!("{card} .members"), text: members_label(group, joined) },
    ]
}
