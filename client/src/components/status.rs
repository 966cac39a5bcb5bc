//! Error and empty states for fixture-backed lists.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use crate::state::load::LoadState;
use crate::util::html::escape;

/// English fallback text for a list's error and empty states. The
/// `data-i18n` pass replaces it with the active language's wording.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListMessages {
    pub error: &'static str,
    pub empty: &'static str,
}

#[must_use]
pub fn error_state(message: &str) -> String {
    format!(r#"<p class="state-message state-error" data-i18n="error_loading">{}</p>"#, escape(message))
}

#[must_use]
pub fn empty_state(message: &str) -> String {
    format!(r#"<p class="state-message state-empty" data-i18n="no_content">{}</p>"#, escape(message))
}

/// Render a loaded list: the error state for `Failed`, the empty state for
/// `Empty`, otherwise `item` for each record in order.
#[must_use]
pub fn render_list<T>(state: &LoadState<T>, messages: &ListMessages, item: impl Fn(&T) -> String) -> String {
    match state {
        LoadState::Failed => error_state(messages.error),
        LoadState::Empty => empty_state(messages.empty),
        LoadState::Ready(records) => records.iter().map(item).collect(),
    }
}
