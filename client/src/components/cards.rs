//! Tip and event cards used by the list, detail, and language pages.
//!
//! Card markup carries the record id as `data-tip-id` / `data-event-id` so
//! click delegation and toggle patches can find the card again without a
//! re-render. Fixture text is escaped; only detail bodies are trusted HTML.

#[cfg(test)]
#[path = "cards_test.rs"]
mod cards_test;

use records::{Event, Tip};

use crate::util::date::{badge_parts, display_date};
use crate::util::html::escape;

pub const BOOKMARKED_ICON: &str = "❤️";
pub const NOT_BOOKMARKED_ICON: &str = "🤍";

/// Heart shown for a bookmarked or liked item.
#[must_use]
pub fn heart_icon(active: bool) -> &'static str {
    if active { BOOKMARKED_ICON } else { NOT_BOOKMARKED_ICON }
}

/// Which kind of record a bookmark refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    Tip,
    Event,
}

impl ItemKind {
    /// Attribute holding the record id on cards and bookmark buttons.
    #[must_use]
    pub fn id_attribute(self) -> &'static str {
        match self {
            Self::Tip => "data-tip-id",
            Self::Event => "data-event-id",
        }
    }

    #[must_use]
    pub fn bookmark_aria_label(self) -> &'static str {
        match self {
            Self::Tip => "Bookmark this tip",
            Self::Event => "Save this event",
        }
    }

    /// Button text on the detail page.
    #[must_use]
    pub fn bookmark_text(self, bookmarked: bool) -> &'static str {
        match (self, bookmarked) {
            (Self::Tip, true) => "Bookmarked",
            (Self::Tip, false) => "Bookmark",
            (Self::Event, true) => "Event Saved",
            (Self::Event, false) => "Save Event",
        }
    }

    #[must_use]
    pub fn detail_href(self, id: &str) -> String {
        let page = match self {
            Self::Tip => "tip-detail.html",
            Self::Event => "event-detail.html",
        };
        format!("{page}?id={}", urlencoding::encode(id))
    }
}

#[must_use]
pub fn bookmark_button(kind: ItemKind, id: &str, bookmarked: bool) -> String {
    format!(
        r#"<button class="bookmark-btn" aria-label="{label}" {attr}="{id}"><span class="bookmark-icon">{icon}</span></button>"#,
        label = kind.bookmark_aria_label(),
        attr = kind.id_attribute(),
        id = escape(id),
        icon = heart_icon(bookmarked),
    )
}

#[must_use]
pub fn tag_list(tags: &[String]) -> String {
    tags.iter().map(|tag| format!(r#"<span class="tag">{}</span>"#, escape(tag))).collect()
}

/// Month/day badge, or nothing for an unparseable date.
#[must_use]
pub fn date_badge(raw: &str) -> String {
    badge_parts(raw).map_or_else(String::new, |(month, day)| {
        format!(
            r#"<div class="event-date-badge"><span class="month">{month}</span><span class="day">{day}</span></div>"#
        )
    })
}

fn card_image(image: &str, alt: &str, overlay: &str) -> String {
    format!(
        r#"<div class="card-image"><img src="{}" alt="{}" loading="lazy">{overlay}</div>"#,
        escape(image),
        escape(alt),
    )
}

fn read_more(kind: ItemKind, id: &str) -> String {
    format!(
        r#"<a href="{}" class="btn btn-secondary" data-i18n="read_more">Read More</a>"#,
        escape(&kind.detail_href(id)),
    )
}

/// Full tip card. `bookmarked` of `None` omits the bookmark button.
#[must_use]
pub fn tip_card(tip: &Tip, bookmarked: Option<bool>) -> String {
    let button = bookmarked.map_or_else(String::new, |on| bookmark_button(ItemKind::Tip, &tip.id, on));
    format!(
        concat!(
            r#"<div class="card tip-card" data-tip-id="{id}" data-category="{category}">"#,
            "{image}",
            r#"<div class="card-content">"#,
            r#"<div class="card-meta"><span class="category">{category}</span><span class="date">{date}</span></div>"#,
            r#"<h3 class="card-title">{title}</h3>"#,
            r#"<p class="card-summary">{summary}</p>"#,
            r#"<div class="card-tags">{tags}</div>"#,
            "{more}",
            "</div></div>",
        ),
        id = escape(&tip.id),
        category = escape(&tip.category),
        image = card_image(&tip.image, &tip.title, &button),
        date = escape(&display_date(&tip.date)),
        title = escape(&tip.title),
        summary = escape(&tip.summary),
        tags = tag_list(&tip.tags),
        more = read_more(ItemKind::Tip, &tip.id),
    )
}

/// Full event card with date badge. `bookmarked` of `None` omits the
/// bookmark button.
#[must_use]
pub fn event_card(event: &Event, bookmarked: Option<bool>) -> String {
    let overlay = bookmarked.map_or_else(String::new, |on| bookmark_button(ItemKind::Event, &event.id, on))
        + &date_badge(&event.date);
    format!(
        concat!(
            r#"<div class="card event-card" data-event-id="{id}" data-type="{kind}">"#,
            "{image}",
            r#"<div class="card-content">"#,
            r#"<div class="card-meta"><span class="type">{kind}</span><span class="date">{date}</span></div>"#,
            r#"<h3 class="card-title">{title}</h3>"#,
            r#"<p class="card-summary">{summary}</p>"#,
            r#"<div class="event-details">"#,
            r"<p><strong>📍 Location:</strong> {location}</p>",
            r"<p><strong>🕒 Time:</strong> {time}</p>",
            r"<p><strong>💰 Price:</strong> {price}</p>",
            "</div>",
            "{more}",
            "</div></div>",
        ),
        id = escape(&event.id),
        kind = escape(&event.kind),
        image = card_image(&event.image, &event.title, &overlay),
        date = escape(&display_date(&event.date)),
        title = escape(&event.title),
        summary = escape(&event.summary),
        location = escape(&event.location),
        time = escape(&event.time),
        price = escape(&event.price),
        more = read_more(ItemKind::Event, &event.id),
    )
}
