//! Reusable HTML fragments shared by several pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages compose these pieces into their list renderers. Each piece is a pure
//! function returning a string, so every one is tested natively. `patch`
//! describes the small DOM edits that follow a preference toggle.

pub mod cards;
pub mod patch;
pub mod status;
