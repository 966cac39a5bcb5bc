//! Event detail page: the event named by `?id=`, its save button, and
//! related events of the same type.

#[cfg(test)]
#[path = "event_detail_test.rs"]
mod event_detail_test;

use records::Event;

use super::detail;
use crate::components::cards::{ItemKind, event_card};
use crate::components::status::{ListMessages, render_list};
use crate::state::load::LoadState;
use crate::util::date::display_date;
use crate::util::html::escape;

pub const CONTENT_ID: &str = "event-content";
pub const RELATED_ID: &str = "related-events-container";

pub const RELATED_MESSAGES: ListMessages =
    ListMessages { error: "Error loading content", empty: "No related events available" };

#[must_use]
pub fn find_event<'a>(all: &'a LoadState<Event>, id: Option<&str>) -> Option<&'a Event> {
    detail::find_by_id(all, id, |event| event.id.as_str())
}

#[must_use]
pub fn related_events(all: &LoadState<Event>, current: &Event) -> LoadState<Event> {
    detail::related(all.records(), &current.id, |event| event.id.as_str(), |event| event.kind == current.kind)
}

/// `Mar 5, 2027 at 18:00`, or just the date when no time is given.
#[must_use]
pub fn date_time_label(event: &Event) -> String {
    let date = display_date(&event.date);
    if event.time.trim().is_empty() { date } else { format!("{date} at {}", event.time) }
}

#[must_use]
pub fn capacity_label(event: &Event) -> String {
    format!("{} people", event.capacity)
}

/// Event body. `description` is trusted fixture HTML and is inserted as is.
#[must_use]
pub fn render_event(event: &Event, bookmarked: bool) -> String {
    format!(
        concat!(
            r#"<nav class="breadcrumb"><a href="events.html">Events</a> / "#,
            r#"<span id="breadcrumb-type">{kind}</span> / <span id="breadcrumb-title">{title}</span></nav>"#,
            r#"<header class="event-header">"#,
            r#"<div class="card-meta"><span class="type">{kind}</span><span class="date">{date}</span>"#,
            r#"<span class="organizer">by {organizer}</span></div>"#,
            r#"<h1 class="event-title">{title}</h1>{button}</header>"#,
            r#"<img class="event-image" src="{image}" alt="{title}">"#,
            r#"<p class="event-summary">{summary}</p>"#,
            r#"<dl class="event-info">"#,
            "<dt>When</dt><dd>{when}</dd>",
            "<dt>Where</dt><dd>{location}<br><small>{address}</small></dd>",
            "<dt>Price</dt><dd>{price}</dd>",
            "<dt>Capacity</dt><dd>{capacity}</dd>",
            r#"<dt>Contact</dt><dd><a href="mailto:{contact}">{contact}</a></dd>"#,
            "</dl>",
            r#"<div class="event-description">{description}</div>"#,
        ),
        kind = escape(&event.kind),
        title = escape(&event.title),
        date = escape(&display_date(&event.date)),
        organizer = escape(&event.organizer),
        button = detail::bookmark_button(ItemKind::Event, bookmarked),
        image = escape(&event.image),
        summary = escape(&event.summary),
        when = escape(&date_time_label(event)),
        location = escape(&event.location),
        address = escape(&event.address),
        price = escape(&event.price),
        capacity = capacity_label(event),
        contact = escape(&event.contact),
        description = event.description,
    )
}

#[must_use]
pub fn render_related(state: &LoadState<Event>) -> String {
    render_list(state, &RELATED_MESSAGES, |event| event_card(event, None))
}

#[cfg(feature = "hydrate")]
pub async fn start(session: super::Session) {
    use crate::net::api::{EVENTS_URL, fetch_json};
    use crate::util::dom;

    let id = dom::query_param("id");
    if id.is_none() {
        detail::show_outcome(CONTENT_ID, false);
        return;
    }
    let all = LoadState::from_fetch(fetch_json::<Vec<Event>>(EVENTS_URL).await);
    let Some(event) = find_event(&all, id.as_deref()) else {
        detail::show_outcome(CONTENT_ID, false);
        return;
    };
    session.paint(CONTENT_ID, &render_event(event, session.prefs.is_bookmarked(&event.id)));
    detail::show_outcome(CONTENT_ID, true);
    session.paint(RELATED_ID, &render_related(&related_events(&all, event)));
    if let Some(document) = dom::document() {
        document.set_title(&detail::page_title(&event.title));
    }
    detail::attach_bookmark(&session, ItemKind::Event, event.id.clone());
}
