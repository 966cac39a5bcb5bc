//! Language page: selector, current-language label, and language-learning
//! tips.
//!
//! Switching reloads the string table, persists the choice, and re-runs the
//! localization pass over the whole document. An unsupported code from the
//! selector is logged and ignored.

#[cfg(test)]
#[path = "language_test.rs"]
mod language_test;

use records::{Language, Tip};

use crate::components::cards::tip_card;
use crate::components::status::error_state;
use crate::state::load::LoadState;
use crate::util::html::escape;

pub const SELECT_ID: &str = "language-select";
pub const APPLY_ID: &str = "apply-language";
pub const CURRENT_ID: &str = "current-lang-display";
pub const TIPS_ID: &str = "language-tips-container";

const ERROR_MESSAGE: &str = "Error loading language resources";

/// Shown when no tip qualifies as a language resource.
const SUGGESTIONS: [(&str, &str, &str, &str); 3] = [
    (
        "📚 Academic Writing Tips",
        "Learn about academic integrity, proper citations, and essay structure to improve your academic writing skills.",
        "tips.html?filter=Academic",
        "View Academic Tips",
    ),
    (
        "🗣️ Communication Skills",
        "Develop your English communication skills through practice, cultural exchange, and language learning resources.",
        "community.html",
        "Join Language Exchange",
    ),
    (
        "📖 Study Strategies",
        "Effective study techniques and time management strategies to help you succeed in your academic journey.",
        "tips.html?filter=Academic",
        "View Study Tips",
    ),
];

/// `<option>` list for the selector with `current` preselected.
#[must_use]
pub fn render_language_options(current: Language) -> String {
    Language::ALL
        .into_iter()
        .map(|lang| {
            let selected = if lang == current { " selected" } else { "" };
            format!(r#"<option value="{}"{selected}>{}</option>"#, lang.code(), lang.native_name())
        })
        .collect()
}

#[must_use]
pub fn language_tips(all: &LoadState<Tip>) -> LoadState<Tip> {
    all.filtered(Tip::is_language_resource)
}

fn suggestion_cards() -> String {
    SUGGESTIONS
        .iter()
        .map(|(title, body, href, link)| {
            format!(
                r#"<div class="card"><div class="card-content"><h3>{}</h3><p>{}</p><a href="{}" class="btn btn-secondary">{}</a></div></div>"#,
                escape(title),
                escape(body),
                escape(href),
                escape(link),
            )
        })
        .collect()
}

/// Language-learning tips; static suggestions when none match.
#[must_use]
pub fn render_language_tips(state: &LoadState<Tip>) -> String {
    match state {
        LoadState::Failed => error_state(ERROR_MESSAGE),
        LoadState::Empty => suggestion_cards(),
        LoadState::Ready(tips) => tips.iter().map(|tip| tip_card(tip, None)).collect(),
    }
}

#[must_use]
pub fn change_message(language: Language) -> String {
    format!("Language changed to {}", language.display_name())
}

#[cfg(feature = "hydrate")]
pub async fn start(session: super::Session) {
    use crate::net::api::{TIPS_URL, fetch_json};
    use crate::util::dom;

    let current = session.localizer.borrow().language();
    session.paint(SELECT_ID, &render_language_options(current));
    dom::set_text(CURRENT_ID, current.display_name());

    let apply_session = session.clone();
    dom::on_event(APPLY_ID, "click", move |_| {
        let session = apply_session.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Some(active) = switch_to_selected(&session).await {
                dom::show_toast(&change_message(active));
            }
        });
    });
    let change_session = session.clone();
    dom::on_event(SELECT_ID, "change", move |_| {
        let session = change_session.clone();
        wasm_bindgen_futures::spawn_local(async move {
            switch_to_selected(&session).await;
        });
    });

    let tips = language_tips(&LoadState::from_fetch(fetch_json::<Vec<Tip>>(TIPS_URL).await));
    session.paint(TIPS_ID, &render_language_tips(&tips));
}

/// Load the language chosen in the selector. Returns the language that ended
/// up active, or `None` when the selector held an unsupported code.
#[cfg(feature = "hydrate")]
async fn switch_to_selected(session: &super::Session) -> Option<Language> {
    use wasm_bindgen::JsCast;

    use crate::util::dom;

    let select = dom::by_id(SELECT_ID)?.dyn_into::<web_sys::HtmlSelectElement>().ok()?;
    let wanted = match select.value().parse::<Language>() {
        Ok(language) => language,
        Err(err) => {
            log::warn!("{err}");
            return None;
        }
    };
    let mut next = session.localizer.borrow().clone();
    let active = next.load(wanted, session.prefs.as_ref()).await;
    next.apply_to_document();
    *session.localizer.borrow_mut() = next;
    dom::set_text(CURRENT_ID, active.display_name());
    select.set_value(active.code());
    Some(active)
}
