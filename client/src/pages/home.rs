//! Home page: featured tips and the next few upcoming events.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use records::fixture::sort_events_by_date;
use records::{Event, Tip};
use time::Date;

use crate::components::cards::{ItemKind, bookmark_button};
use crate::components::status::{ListMessages, render_list};
use crate::state::load::LoadState;
use crate::state::preferences::PreferenceSnapshot;
use crate::util::date::display_date;
use crate::util::html::escape;

pub const FEATURED_TIPS_ID: &str = "featured-tips-container";
pub const UPCOMING_EVENTS_ID: &str = "upcoming-events-container";
pub const HOME_LIMIT: usize = 3;

pub const MESSAGES: ListMessages = ListMessages { error: "Error loading content", empty: "No content available" };

#[must_use]
pub fn featured_tips(all: &LoadState<Tip>) -> LoadState<Tip> {
    all.filtered(|tip| tip.featured).map_records(|tips| tips.into_iter().take(HOME_LIMIT).collect())
}

/// Events on or after `today`, soonest first.
#[must_use]
pub fn upcoming_events(all: &LoadState<Event>, today: Date) -> LoadState<Event> {
    all.filtered(|event| event.is_upcoming(today)).map_records(|mut events| {
        sort_events_by_date(&mut events);
        events.truncate(HOME_LIMIT);
        events
    })
}

fn featured_tip_card(tip: &Tip, bookmarked: bool) -> String {
    format!(
        concat!(
            r#"<a href="{href}" class="tip-card" data-tip-id="{id}">"#,
            r#"<div class="card-image"><img src="{image}" alt="{title}" loading="lazy">{button}</div>"#,
            r#"<div class="card-content">"#,
            r#"<div class="card-meta"><span class="category">{category}</span></div>"#,
            r#"<h3 class="card-title">{title}</h3>"#,
            r#"<p class="card-summary">{summary}</p>"#,
            "</div></a>",
        ),
        href = escape(&ItemKind::Tip.detail_href(&tip.id)),
        id = escape(&tip.id),
        image = escape(&tip.image),
        title = escape(&tip.title),
        button = bookmark_button(ItemKind::Tip, &tip.id, bookmarked),
        category = escape(&tip.category),
        summary = escape(&tip.summary),
    )
}

fn upcoming_event_card(event: &Event, bookmarked: bool) -> String {
    format!(
        concat!(
            r#"<a href="{href}" class="event-card" data-event-id="{id}">"#,
            r#"<div class="card-image"><img src="{image}" alt="{title}" loading="lazy">{button}</div>"#,
            r#"<div class="card-content">"#,
            r#"<div class="card-meta"><span class="type">{kind}</span></div>"#,
            r#"<h3 class="card-title">{title}</h3>"#,
            r#"<p class="card-summary">{summary}</p>"#,
            r#"<div class="event-details"><p>📅 {date}</p><p>📍 {location}</p></div>"#,
            "</div></a>",
        ),
        href = escape(&ItemKind::Event.detail_href(&event.id)),
        id = escape(&event.id),
        image = escape(&event.image),
        title = escape(&event.title),
        button = bookmark_button(ItemKind::Event, &event.id, bookmarked),
        kind = escape(&event.kind),
        summary = escape(&event.summary),
        date = escape(&display_date(&event.date)),
        location = escape(&event.location),
    )
}

#[must_use]
pub fn render_featured_tips(state: &LoadState<Tip>, prefs: &PreferenceSnapshot) -> String {
    render_list(state, &MESSAGES, |tip| featured_tip_card(tip, prefs.is_bookmarked(&tip.id)))
}

#[must_use]
pub fn render_upcoming_events(state: &LoadState<Event>, prefs: &PreferenceSnapshot) -> String {
    render_list(state, &MESSAGES, |event| upcoming_event_card(event, prefs.is_bookmarked(&event.id)))
}

#[cfg(feature = "hydrate")]
pub async fn start(session: super::Session) {
    use crate::net::api::{EVENTS_URL, TIPS_URL, fetch_json};
    use crate::util::{date, dom};

    let (tips, events) = futures::join!(fetch_json::<Vec<Tip>>(TIPS_URL), fetch_json::<Vec<Event>>(EVENTS_URL));
    let snapshot = session.prefs.snapshot();
    let tips = featured_tips(&LoadState::from_fetch(tips));
    let events = upcoming_events(&LoadState::from_fetch(events), date::today());
    session.paint(FEATURED_TIPS_ID, &render_featured_tips(&tips, &snapshot));
    session.paint(UPCOMING_EVENTS_ID, &render_upcoming_events(&events, &snapshot));

    let tip_session = session.clone();
    dom::on_click(".bookmark-btn[data-tip-id]", move |button| {
        if let Some(id) = button.get_attribute("data-tip-id") {
            tip_session.toggle_card_bookmark(ItemKind::Tip, &id);
        }
    });
    dom::on_click(".bookmark-btn[data-event-id]", move |button| {
        if let Some(id) = button.get_attribute("data-event-id") {
            session.toggle_card_bookmark(ItemKind::Event, &id);
        }
    });
}
