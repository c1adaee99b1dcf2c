//! JSON rendering of a completed analysis run.
//!
//! The payload is a stable, versioned view of the run: resolved source
//! paths, row counts (including dropped match rows), and the four
//! aggregates. Pair-keyed maps become arrays of objects so the document
//! stays plain JSON.

use std::collections::BTreeMap;

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use wcup_analysis::WinnerAnalysis;
use wcup_model::Player;

use crate::pipeline::TablePaths;

const REPORT_SCHEMA: &str = "wcup.analysis-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

/// Inputs for the JSON report.
pub struct ReportInput<'a> {
    pub paths: &'a TablePaths,
    pub edition_rows: usize,
    pub match_rows: usize,
    pub dropped_match_rows: usize,
    pub player_rows: usize,
    pub analysis: &'a WinnerAnalysis,
}

#[derive(Debug, Serialize)]
pub struct AnalysisReportPayload {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub sources: SourcesJson,
    pub tables: TableCountsJson,
    pub aggregates: AggregatesJson,
}

#[derive(Debug, Serialize)]
pub struct SourcesJson {
    pub editions: String,
    pub matches: String,
    pub players: String,
}

#[derive(Debug, Serialize)]
pub struct TableCountsJson {
    pub edition_rows: usize,
    pub match_rows: usize,
    pub dropped_match_rows: usize,
    pub player_rows: usize,
}

#[derive(Debug, Serialize)]
pub struct AggregatesJson {
    pub goals_by_winner: BTreeMap<String, i64>,
    pub matches_played_by_winner: Vec<PairCountJson>,
    pub attendance_by_winner: Vec<PairAttendanceJson>,
    pub key_players: Vec<Player>,
}

#[derive(Debug, Serialize)]
pub struct PairCountJson {
    pub home_team: String,
    pub away_team: String,
    pub matches: u64,
}

#[derive(Debug, Serialize)]
pub struct PairAttendanceJson {
    pub home_team: String,
    pub away_team: String,
    pub attendance: i64,
}

/// Builds the JSON payload for a completed run.
pub fn build_report(input: &ReportInput<'_>) -> AnalysisReportPayload {
    let analysis = input.analysis;
    AnalysisReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        sources: SourcesJson {
            editions: input.paths.editions.display().to_string(),
            matches: input.paths.matches.display().to_string(),
            players: input.paths.players.display().to_string(),
        },
        tables: TableCountsJson {
            edition_rows: input.edition_rows,
            match_rows: input.match_rows,
            dropped_match_rows: input.dropped_match_rows,
            player_rows: input.player_rows,
        },
        aggregates: AggregatesJson {
            goals_by_winner: analysis.goals_by_winner.clone(),
            matches_played_by_winner: analysis
                .matches_played_by_winner
                .iter()
                .map(|(pair, count)| PairCountJson {
                    home_team: pair.home.clone(),
                    away_team: pair.away.clone(),
                    matches: *count,
                })
                .collect(),
            attendance_by_winner: analysis
                .attendance_by_winner
                .iter()
                .map(|(pair, total)| PairAttendanceJson {
                    home_team: pair.home.clone(),
                    away_team: pair.away.clone(),
                    attendance: *total,
                })
                .collect(),
            key_players: analysis.key_players.clone(),
        },
    }
}

/// Renders the report as pretty-printed JSON.
pub fn render_analysis_json(input: &ReportInput<'_>) -> Result<String> {
    let payload = build_report(input);
    Ok(serde_json::to_string_pretty(&payload)?)
}
