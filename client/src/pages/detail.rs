//! Pieces shared by the tip and event detail pages.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use crate::components::cards::{ItemKind, heart_icon};
use crate::components::patch::{BOOKMARKED_CLASS, DETAIL_BOOKMARK_ID};
use crate::state::load::LoadState;

pub const LOADING_ID: &str = "loading-state";
pub const ERROR_ID: &str = "error-state";
pub const RELATED_LIMIT: usize = 3;

const TITLE_SUFFIX: &str = "International Student Platform";

#[must_use]
pub fn page_title(title: &str) -> String {
    format!("{title} - {TITLE_SUFFIX}")
}

/// The record named by the `?id=` parameter. A missing id, a failed fetch,
/// and an unknown id all yield `None`.
#[must_use]
pub fn find_by_id<'a, T>(all: &'a LoadState<T>, id: Option<&str>, id_of: impl Fn(&T) -> &str) -> Option<&'a T> {
    let id = id?.trim();
    all.records().iter().find(|record| id_of(*record) == id)
}

/// Up to three other records in the same group as `current`, as a list
/// state so "none related" renders the empty state.
#[must_use]
pub fn related<T: Clone>(
    all: &[T],
    current_id: &str,
    id_of: impl Fn(&T) -> &str,
    same_group: impl Fn(&T) -> bool,
) -> LoadState<T> {
    LoadState::from_records(
        all.iter()
            .filter(|record| id_of(*record) != current_id && same_group(*record))
            .take(RELATED_LIMIT)
            .cloned()
            .collect(),
    )
}

/// Detail page bookmark button with icon and text.
#[must_use]
pub fn bookmark_button(kind: ItemKind, bookmarked: bool) -> String {
    let class = if bookmarked {
        format!("btn bookmark-detail-btn {BOOKMARKED_CLASS}")
    } else {
        "btn bookmark-detail-btn".to_owned()
    };
    format!(
        r#"<button id="{DETAIL_BOOKMARK_ID}" class="{class}"><span class="bookmark-icon">{}</span> <span class="bookmark-text">{}</span></button>"#,
        heart_icon(bookmarked),
        kind.bookmark_text(bookmarked),
    )
}

/// Swap the loading placeholder for the content or the error state.
#[cfg(feature = "hydrate")]
pub fn show_outcome(content_id: &str, found: bool) {
    use crate::util::dom;

    dom::set_visible(LOADING_ID, false);
    dom::set_visible(content_id, found);
    dom::set_visible(ERROR_ID, !found);
}

/// Flip the shown record's bookmark from the detail page button.
#[cfg(feature = "hydrate")]
pub fn attach_bookmark(session: &super::Session, kind: ItemKind, id: String) {
    use crate::components::patch::detail_bookmark_patches;
    use crate::util::dom;

    let prefs = std::rc::Rc::clone(&session.prefs);
    dom::on_click("#bookmark-btn", move |_| match prefs.toggle_bookmark(&id) {
        Ok(bookmarked) => dom::apply_patches(&detail_bookmark_patches(kind, bookmarked)),
        Err(err) => log::warn!("bookmark {id} not saved: {err}"),
    });
}
