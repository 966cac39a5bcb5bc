//! Events listing: sorted by date, type filter buttons, bookmark toggles.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use records::Event;
use records::fixture::sort_events_by_date;

use crate::components::cards::event_card;
use crate::components::status::{ListMessages, render_list};
use crate::state::load::{Filter, LoadState};
use crate::state::preferences::PreferenceSnapshot;

pub const CONTAINER_ID: &str = "events-container";

pub const MESSAGES: ListMessages =
    ListMessages { error: "Error loading events", empty: "No events available for this category" };

/// Classify a fetch and sort the events earliest first.
#[must_use]
pub fn load_events(fetched: Option<Vec<Event>>) -> LoadState<Event> {
    LoadState::from_fetch(fetched).map_records(|mut events| {
        sort_events_by_date(&mut events);
        events
    })
}

#[must_use]
pub fn visible_events(all: &LoadState<Event>, filter: &Filter) -> LoadState<Event> {
    all.filtered(|event| filter.matches(&event.kind))
}

#[must_use]
pub fn render_events(state: &LoadState<Event>, prefs: &PreferenceSnapshot) -> String {
    render_list(state, &MESSAGES, |event| event_card(event, Some(prefs.is_bookmarked(&event.id))))
}

#[cfg(feature = "hydrate")]
pub async fn start(session: super::Session) {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::components::cards::ItemKind;
    use crate::net::api::{EVENTS_URL, fetch_json};
    use crate::util::dom;

    let all = Rc::new(load_events(fetch_json(EVENTS_URL).await));
    let filter = Filter::from_param(dom::query_param("filter").as_deref());
    dom::mark_active_filter(filter.as_param());
    let filter = Rc::new(RefCell::new(filter));

    let paint = {
        let session = session.clone();
        let all = Rc::clone(&all);
        let filter = Rc::clone(&filter);
        move || {
            let html = render_events(&visible_events(&all, &filter.borrow()), &session.prefs.snapshot());
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
    dom::on_click(".bookmark-btn[data-event-id]", move |button| {
        if let Some(id) = button.get_attribute("data-event-id") {
            session.toggle_card_bookmark(ItemKind::Event, &id);
        }
    });
}
