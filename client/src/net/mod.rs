//! Networking: fixture GETs and form POSTs.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no backend API beyond static JSON fixtures and an optional form
//! endpoint; `api` covers both. Record shapes live in the `records` crate.

pub mod api;
