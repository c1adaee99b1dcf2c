//! Normalization for the player roster table.

use polars::prelude::DataFrame;
use tracing::debug;

/// Identity stage for the roster table.
///
/// The roster has no typed coercions yet. The stage exists so the pipeline
/// keeps its loader -> normalizer -> aggregation shape and future roster
/// coercions have a defined seam. Column checks happen downstream at the
/// stage that reads the columns.
pub fn normalize_players(df: DataFrame) -> DataFrame {
    debug!(rows = df.height(), "players passed through");
    df
}
