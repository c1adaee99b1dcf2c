//! Per-table normalization stages for the World Cup archive.
//!
//! Each source table gets one stage: [`normalize_editions`] and
//! [`normalize_matches`] coerce display text into typed rows,
//! [`normalize_players`] passes the roster through unchanged. Stages consume
//! the loader's all-UTF-8 frames, never mutate them, and share one failure
//! policy: structural problems (missing columns, malformed years or counts)
//! abort the table, while an unparseable match date or time drops only that
//! row.

mod columns;
pub mod datetime;
mod editions;
mod error;
mod matches;
pub mod numeric;
mod players;

pub use editions::normalize_editions;
pub use error::{NormalizeError, Result};
pub use matches::{NormalizedMatches, normalize_matches};
pub use players::normalize_players;
