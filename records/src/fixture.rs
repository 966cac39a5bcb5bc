//! Read-only fixture records served as static JSON documents.
//!
//! DESIGN
//! ======
//! Every record is keyed by an opaque string `id`, which is the join key
//! against the browser-side preference store. Fixture authors sometimes write
//! ids as bare numbers, so ids accept either form and are normalized to
//! strings. Text fields other than `id` and `title` are optional and default
//! to empty so one sloppy record does not fail the whole document.

#[cfg(test)]
#[path = "fixture_test.rs"]
mod fixture_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use time::Date;
use time::macros::format_description;

/// A practical tip article for international students.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tip {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub category: String,
    /// Publication date, `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub summary: String,
    /// Article body as trusted HTML.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Tip {
    /// Parsed publication date, if the fixture carries a valid one.
    #[must_use]
    pub fn parsed_date(&self) -> Option<Date> {
        parse_date(&self.date)
    }

    /// Whether this tip belongs on the language-learning resource list.
    #[must_use]
    pub fn is_language_resource(&self) -> bool {
        self.category == "Academic"
            && (self.tags.iter().any(|tag| tag == "language-learning")
                || self.title.to_lowercase().contains("language"))
    }
}

/// A scheduled community event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    /// Event type used by the filter buttons (e.g. `"Social"`, `"Workshop"`).
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Event date, `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub capacity: u32,
    #[serde(default)]
    pub organizer: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub summary: String,
    /// Long description as trusted HTML.
    #[serde(default)]
    pub description: String,
}

impl Event {
    #[must_use]
    pub fn parsed_date(&self) -> Option<Date> {
        parse_date(&self.date)
    }

    /// True when the event happens on or after `today`. Undated events are
    /// never upcoming.
    #[must_use]
    pub fn is_upcoming(&self, today: Date) -> bool {
        self.parsed_date().is_some_and(|date| date >= today)
    }
}

/// Sort events by date, earliest first. Events without a parseable date keep
/// their relative order and go last.
pub fn sort_events_by_date(events: &mut [Event]) {
    events.sort_by_key(|event| {
        let date = event.parsed_date();
        (date.is_none(), date)
    });
}

/// A forum discussion thread.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Thread {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub content: String,
    /// Like count recorded in the fixture, excluding this browser's like.
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub replies: u32,
    #[serde(default)]
    pub category: String,
}

impl Thread {
    /// Like count to display: the fixture count plus one when liked locally.
    #[must_use]
    pub fn displayed_likes(&self, liked: bool) -> u32 {
        self.likes.saturating_add(u32::from(liked))
    }
}

/// A study group students can join.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Group {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    /// Member count recorded in the fixture, excluding this browser.
    #[serde(default)]
    pub members: u32,
    #[serde(default)]
    pub max_members: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub meeting_day: String,
    #[serde(default)]
    pub meeting_time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub contact: String,
}

impl Group {
    #[must_use]
    pub fn displayed_members(&self, joined: bool) -> u32 {
        self.members.saturating_add(u32::from(joined))
    }
}

/// Parse a fixture date. Accepts `YYYY-MM-DD` or anything that starts with it
/// (such as an RFC 3339 timestamp).
#[must_use]
pub fn parse_date(raw: &str) -> Option<Date> {
    let day = raw.trim().get(..10)?;
    Date::parse(day, format_description!("[year]-[month]-[day]")).ok()
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string or number id")),
    }
}
