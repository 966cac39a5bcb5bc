//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! only mutable piece is the contact inbox, a bounded queue of accepted
//! submissions behind a `tokio::sync::RwLock`. It is a preview aid, not a
//! store: nothing survives a restart.

use std::collections::VecDeque;
use std::sync::Arc;

use records::ContactForm;
use serde::Serialize;
use time::OffsetDateTime;
use tokio::sync::RwLock;

/// A submission accepted by `POST /api/contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceivedMessage {
    #[serde(flatten)]
    pub form: ContactForm,
    #[serde(with = "time::serde::rfc3339")]
    pub received_at: OffsetDateTime,
}

/// Bounded FIFO of received messages; the oldest is dropped when full.
#[derive(Debug)]
pub struct ContactInbox {
    messages: VecDeque<ReceivedMessage>,
    limit: usize,
}

impl ContactInbox {
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self { messages: VecDeque::new(), limit: limit.max(1) }
    }

    /// Store `message`, evicting the oldest entries beyond the limit.
    /// Returns how many were evicted.
    pub fn push(&mut self, message: ReceivedMessage) -> usize {
        self.messages.push_back(message);
        let mut evicted = 0;
        while self.messages.len() > self.limit {
            self.messages.pop_front();
            evicted += 1;
        }
        evicted
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReceivedMessage> {
        self.messages.iter()
    }
}

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub inbox: Arc<RwLock<ContactInbox>>,
}

impl AppState {
    #[must_use]
    pub fn new(contact_inbox_limit: usize) -> Self {
        Self { inbox: Arc::new(RwLock::new(ContactInbox::new(contact_inbox_limit))) }
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
