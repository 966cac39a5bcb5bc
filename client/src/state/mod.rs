//! Client-side state: persisted preferences and loaded fixture lists.
//!
//! SYSTEM CONTEXT
//! ==============
//! `preferences` is the typed registry over browser storage, `membership`
//! and `submissions` are its building blocks, and `load` models what a page
//! knows about its fixture data.

pub mod load;
pub mod membership;
pub mod preferences;
pub mod submissions;
