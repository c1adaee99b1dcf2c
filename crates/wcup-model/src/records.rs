//! Typed rows produced by the normalization stages.

use chrono::{NaiveDate, NaiveTime};

/// One tournament edition: a single year's summary statistics and winner.
///
/// `year` uniquely identifies an edition. The winner name is expected to
/// match team names in the match table for that edition, but the pipeline
/// does not enforce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edition {
    pub year: i32,
    pub winner: String,
    pub goals_scored: i64,
    pub qualified_teams: i64,
    pub matches_played: i64,
    /// Total attendance with the source's `.` grouping separators stripped.
    pub attendance: i64,
}

/// One played match with its combined date-time field split into typed parts.
///
/// Only rows whose date and time both parsed are materialized; the match
/// normalizer drops the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub year: i32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub home_team: String,
    pub away_team: String,
    /// Missing or unparseable attendance is carried as `None` and skipped by
    /// aggregate sums.
    pub attendance: Option<i64>,
}

/// One player participation record for a team.
///
/// `team_initials` is a short code ("URU") and lives in a different namespace
/// than the full team names used by the edition and match tables. `event`
/// packs sub-events (goals, cards) into a compact code left untouched here.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Player {
    pub player_name: String,
    pub team_initials: String,
    pub position: String,
    pub event: String,
}
