//! Winner-centric aggregates for the World Cup archive pipeline.
//!
//! Consumes the normalized editions, matches, and roster tables and derives
//! four aggregates keyed by winner name or home/away pairing. Pure
//! in-memory computation; nothing here reads files or writes output.

mod error;
mod winners;

pub use error::{AnalysisError, Result};
pub use winners::{TeamPair, WinnerAnalysis, analyze_winners};
