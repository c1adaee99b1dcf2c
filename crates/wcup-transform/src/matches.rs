//! Normalization for the matches table.

use polars::prelude::DataFrame;
use tracing::debug;
use wcup_model::{MatchRecord, SourceTable};

use crate::columns::{header_lookup, required_str_column};
use crate::datetime::{parse_match_date, parse_match_time, split_datetime};
use crate::error::Result;
use crate::numeric::{coerce_year, parse_i64_lenient};

/// Output of [`normalize_matches`]: the retained rows plus how many rows
/// were discarded for an unparseable date or time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedMatches {
    pub records: Vec<MatchRecord>,
    pub dropped: usize,
}

/// Splits each row's combined date-time field and keeps only rows where
/// both halves parse.
///
/// Dropping is a per-row policy for the derived date and time fields only.
/// A malformed `Year` is still fatal for the whole table, the same policy
/// as the editions table, and it applies even to rows that would have been
/// dropped anyway.
pub fn normalize_matches(df: &DataFrame) -> Result<NormalizedMatches> {
    const TABLE: SourceTable = SourceTable::Matches;

    let lookup = header_lookup(df);
    let years = required_str_column(df, &lookup, TABLE, "Year")?;
    let datetimes = required_str_column(df, &lookup, TABLE, "Datetime")?;
    let homes = required_str_column(df, &lookup, TABLE, "Home Team Name")?;
    let aways = required_str_column(df, &lookup, TABLE, "Away Team Name")?;
    let attendances = required_str_column(df, &lookup, TABLE, "Attendance")?;

    let mut records = Vec::with_capacity(df.height());
    let mut dropped = 0usize;
    for idx in 0..df.height() {
        let year = coerce_year(TABLE, years.get(idx))?;
        let combined = datetimes.get(idx).unwrap_or("");
        let parsed = split_datetime(combined).and_then(|(date_part, time_part)| {
            let date = parse_match_date(date_part)?;
            let time = parse_match_time(time_part)?;
            Some((date, time))
        });
        let Some((date, time)) = parsed else {
            dropped += 1;
            continue;
        };
        records.push(MatchRecord {
            year,
            date,
            time,
            home_team: homes.get(idx).unwrap_or("").to_string(),
            away_team: aways.get(idx).unwrap_or("").to_string(),
            attendance: attendances.get(idx).and_then(parse_i64_lenient),
        });
    }
    if dropped > 0 {
        debug!(dropped, "match rows dropped for unparseable date or time");
    }
    debug!(rows = records.len(), "matches normalized");
    Ok(NormalizedMatches { records, dropped })
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

    use super::*;
    use crate::error::NormalizeError;

    fn matches_frame(rows: &[[&str; 5]]) -> DataFrame {
        let headers = [
            "Year",
            "Datetime",
            "Home Team Name",
            "Away Team Name",
            "Attendance",
        ];
        let columns: Vec<Column> = headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                let values: Vec<String> = rows.iter().map(|row| row[col].to_string()).collect();
                Series::new((*header).into(), values).into_column()
            })
            .collect();
        DataFrame::new(columns).unwrap()
    }

    #[test]
    fn splits_combined_field_into_typed_parts() {
        let df = matches_frame(&[["1930", "13 Jul 1930 - 15:00", "Uruguay", "Argentina", "93000"]]);
        let normalized = normalize_matches(&df).unwrap();
        assert_eq!(normalized.dropped, 0);
        let record = &normalized.records[0];
        assert_eq!(record.year, 1930);
        assert_eq!(record.date, NaiveDate::from_ymd_opt(1930, 7, 13).unwrap());
        assert_eq!(record.time, NaiveTime::from_hms_opt(15, 0, 0).unwrap());
        assert_eq!(record.home_team, "Uruguay");
        assert_eq!(record.away_team, "Argentina");
        assert_eq!(record.attendance, Some(93_000));
    }

    #[test]
    fn drops_one_row_per_malformed_datetime() {
        let df = matches_frame(&[
            ["1930", "13 Jul 1930 - 15:00", "Uruguay", "Argentina", "93000"],
            ["1930", "13 Jul 1930", "USA", "Paraguay", "18000"],
            ["1930", "13 XYZ 1930 - 15:00", "Belgium", "France", "24000"],
            ["1930", "14 Jul 1930 - 12:45", "Brazil", "Yugoslavia", "25000"],
        ]);
        let normalized = normalize_matches(&df).unwrap();
        assert_eq!(normalized.dropped, 2);
        assert_eq!(normalized.records.len(), 2);
        assert_eq!(normalized.records[0].home_team, "Uruguay");
        assert_eq!(normalized.records[1].home_team, "Brazil");
    }

    #[test]
    fn extra_whitespace_around_separator_still_parses() {
        let df = matches_frame(&[["1930", "13 Jul 1930  -   15:00", "Uruguay", "Argentina", ""]]);
        let normalized = normalize_matches(&df).unwrap();
        assert_eq!(normalized.dropped, 0);
        assert_eq!(
            normalized.records[0].date,
            NaiveDate::from_ymd_opt(1930, 7, 13).unwrap()
        );
    }

    #[test]
    fn malformed_year_is_fatal_even_on_a_droppable_row() {
        let df = matches_frame(&[["193O", "not a datetime", "Uruguay", "Argentina", ""]]);
        let err = normalize_matches(&df).unwrap_err();
        match err {
            NormalizeError::FieldCoercion { table, column, .. } => {
                assert_eq!(table, SourceTable::Matches);
                assert_eq!(column, "Year");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn attendance_is_best_effort() {
        let df = matches_frame(&[
            ["1930", "13 Jul 1930 - 15:00", "Uruguay", "Argentina", "93000.0"],
            ["1930", "14 Jul 1930 - 15:00", "USA", "Paraguay", ""],
            ["1930", "15 Jul 1930 - 15:00", "Belgium", "France", "unknown"],
        ]);
        let normalized = normalize_matches(&df).unwrap();
        let attendance: Vec<Option<i64>> = normalized
            .records
            .iter()
            .map(|record| record.attendance)
            .collect();
        assert_eq!(attendance, vec![Some(93_000), None, None]);
    }

    #[test]
    fn empty_table_yields_no_records() {
        let df = matches_frame(&[]);
        let normalized = normalize_matches(&df).unwrap();
        assert!(normalized.records.is_empty());
        assert_eq!(normalized.dropped, 0);
    }
}
