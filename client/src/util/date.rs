//! Date labels for cards and detail pages.
//!
//! Fixture dates that fail to parse are shown verbatim rather than hidden.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use records::fixture::parse_date;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// `2027-03-05` → `Mar 5, 2027`.
#[must_use]
pub fn display_date(raw: &str) -> String {
    parse_date(raw)
        .and_then(|date| date.format(format_description!("[month repr:short] [day padding:none], [year]")).ok())
        .unwrap_or_else(|| raw.to_owned())
}

/// Short month and day-of-month for the event date badge.
#[must_use]
pub fn badge_parts(raw: &str) -> Option<(String, u8)> {
    let date = parse_date(raw)?;
    let month = date.format(format_description!("[month repr:short]")).ok()?;
    Some((month, date.day()))
}

/// Today's date (UTC).
#[must_use]
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Current year for the footer.
#[must_use]
pub fn current_year() -> i32 {
    today().year()
}
