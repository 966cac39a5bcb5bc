//! Tips listing: category filter buttons and bookmark toggles.

#[cfg(test)]
#[path = "tips_test.rs"]
mod tips_test;

use records::Tip;

use crate::components::cards::tip_card;
use crate::components::status::{ListMessages, render_list};
use crate::state::load::{Filter, LoadState};
use crate::state::preferences::PreferenceSnapshot;

pub const CONTAINER_ID: &str = "tips-container";

pub const MESSAGES: ListMessages =
    ListMessages { error: "Error loading tips", empty: "No tips available for this category" };

/// Tips shown under `filter`. Filtering a loaded list down to nothing is
/// `Empty`, never `Failed`.
#[must_use]
pub fn visible_tips(all: &LoadState<Tip>, filter: &Filter) -> LoadState<Tip> {
    all.filtered(|tip| filter.matches(&tip.category))
}

#[must_use]
pub fn render_tips(state: &LoadState<Tip>, prefs: &PreferenceSnapshot) -> String {
    render_list(state, &MESSAGES, |tip| tip_card(tip, Some(prefs.is_bookmarked(&tip.id))))
}

#[cfg(feature = "hydrate")]
pub async fn start(session: super::Session) {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::components::cards::ItemKind;
    use crate::net::api::{TIPS_URL, fetch_json};
    use crate::util::dom;

    let all = LoadState::from_fetch(fetch_json::<Vec<Tip>>(TIPS_URL).await);
    let filter = Filter::from_param(dom::query_param("filter").as_deref());
    dom::mark_active_filter(filter.as_param());
    let filter = Rc::new(RefCell::new(filter));
    let all = Rc::new(all);

    let paint = {
        let session = session.clone();
        let all = Rc::clone(&all);
        let filter = Rc::clone(&filter);
        move || {
            let html = render_tips(&visible_tips(&all, &filter.borrow()), &session.prefs.snapshot());
            session.paint(CONTAINER_ID, &html);
        }
    };
    paint();

    dom::on_click(".filter-btn", move |button| {
        let next = Filter::from_param(button.get_attribute("data-filter").as_deref());
        dom::mark_active_filter(next.as_param());
        *filter.borrow_mut() = next;
        paint();
    });
    dom::on_click(".bookmark-btn[data-tip-id]", move |button| {
        if let Some(id) = button.get_attribute("data-tip-id") {
            session.toggle_card_bookmark(ItemKind::Tip, &id);
        }
    });
}
