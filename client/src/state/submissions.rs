//! Local log of contact form submissions.
//!
//! The log is append-only from the page's point of view. Entries carry the
//! submitted fields flattened next to an RFC 3339 `timestamp`, which keeps
//! the stored JSON readable and compatible with logs written by older pages.

#[cfg(test)]
#[path = "submissions_test.rs"]
mod submissions_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

/// Upper bound on stored submissions; the oldest entry is dropped beyond it.
pub const MAX_FORM_SUBMISSIONS: usize = 100;

const TIMESTAMP_FIELD: &str = "timestamp";

/// One recorded form submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSubmission {
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// Timestamp for a new entry: `now`, unless that would not be strictly after
/// `previous`, in which case one millisecond after `previous`.
#[must_use]
pub fn next_timestamp(previous: Option<OffsetDateTime>, now: OffsetDateTime) -> OffsetDateTime {
    match previous {
        Some(last) if now <= last => last + Duration::milliseconds(1),
        _ => now,
    }
}

/// Append a submission to `log`, enforcing the strictly increasing timestamp
/// and the size cap. Returns the recorded entry.
pub fn append_capped(
    log: &mut Vec<FormSubmission>,
    mut fields: BTreeMap<String, String>,
    now: OffsetDateTime,
) -> FormSubmission {
    fields.remove(TIMESTAMP_FIELD);
    let entry = FormSubmission {
        fields,
        timestamp: next_timestamp(log.last().map(|last| last.timestamp), now),
    };
    log.push(entry.clone());
    if log.len() > MAX_FORM_SUBMISSIONS {
        let excess = log.len() - MAX_FORM_SUBMISSIONS;
        log.drain(..excess);
    }
    entry
}
