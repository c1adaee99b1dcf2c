//! Normalization for the tournament-editions table.

use polars::prelude::DataFrame;
use tracing::debug;
use wcup_model::{Edition, SourceTable};

use crate::columns::{header_lookup, required_str_column};
use crate::error::{NormalizeError, Result};
use crate::numeric::{coerce_i64, coerce_year, parse_i64, strip_grouping_separators};

/// Coerces every edition row into typed form.
///
/// All coercions here are fatal: a malformed year or count signals a corrupt
/// or incompatible source file, so the whole run aborts rather than dropping
/// rows.
pub fn normalize_editions(df: &DataFrame) -> Result<Vec<Edition>> {
    const TABLE: SourceTable = SourceTable::Editions;

    let lookup = header_lookup(df);
    let years = required_str_column(df, &lookup, TABLE, "Year")?;
    let winners = required_str_column(df, &lookup, TABLE, "Winner")?;
    let goals = required_str_column(df, &lookup, TABLE, "GoalsScored")?;
    let qualified = required_str_column(df, &lookup, TABLE, "QualifiedTeams")?;
    let played = required_str_column(df, &lookup, TABLE, "MatchesPlayed")?;
    let attendance = required_str_column(df, &lookup, TABLE, "Attendance")?;

    let mut editions = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        editions.push(Edition {
            year: coerce_year(TABLE, years.get(idx))?,
            winner: winners.get(idx).unwrap_or("").to_string(),
            goals_scored: coerce_i64(TABLE, "GoalsScored", goals.get(idx))?,
            qualified_teams: coerce_i64(TABLE, "QualifiedTeams", qualified.get(idx))?,
            matches_played: coerce_i64(TABLE, "MatchesPlayed", played.get(idx))?,
            attendance: coerce_attendance(attendance.get(idx))?,
        });
    }
    debug!(rows = editions.len(), "editions normalized");
    Ok(editions)
}

/// Edition attendance carries `.` grouping separators; strip them before the
/// integer parse. The error reports the value as it appeared in the source.
fn coerce_attendance(value: Option<&str>) -> Result<i64> {
    let raw = value.unwrap_or("");
    parse_i64(&strip_grouping_separators(raw)).ok_or_else(|| NormalizeError::FieldCoercion {
        table: SourceTable::Editions,
        column: "Attendance".to_string(),
        value: raw.to_string(),
    })
}
