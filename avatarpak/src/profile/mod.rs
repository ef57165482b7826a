//! Synthetic profile metadata for offline-activated users.
//!
//! The console tool expects an `online.json` document alongside the textures
//! when the account was activated offline. The document is entirely static:
//! placeholder resource URLs, empty names, a zeroed trophy summary and a
//! verification flag. Nothing in it is user-configurable; it exists only to
//! satisfy the consumer's expected file shape.
//!
//! The `trophySummary` field is a JSON document *embedded as a string* in the
//! outer document. [`TrophySummary`] models it as a typed struct and custom
//! serde functions handle the string embedding, so tests can assert on the
//! typed value instead of raw text.

mod document;
mod error;

pub use document::{EarnedTrophies, OnlineProfile, TrophySummary};
pub use error::ProfileError;
