//! Shared record model for the student platform site.
//!
//! This crate owns the shapes that cross the client/server boundary: the
//! read-only fixture records served as static JSON, the language code set,
//! and the contact form with its validation rules. Both `client` (compiled to
//! WASM) and `server` depend on it, so it stays free of browser and runtime
//! dependencies.

pub mod contact;
pub mod fixture;
pub mod language;

pub use contact::{ContactError, ContactForm, SubmitResponse};
pub use fixture::{Event, Group, Thread, Tip};
pub use language::{Language, UnknownLanguage};
