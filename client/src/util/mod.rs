//! Utility helpers shared across client pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! `html` and `date` are pure string helpers used by the renderers. `dom`
//! holds the browser glue and only exists in hydrate builds.

pub mod date;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod html;
