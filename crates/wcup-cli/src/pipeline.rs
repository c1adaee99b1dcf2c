//! Staged analysis pipeline.
//!
//! The pipeline follows these stages in order:
//! 1. **Resolve**: locate the three source files under the data directory
//! 2. **Load**: read each CSV into an all-UTF-8 frame
//! 3. **Normalize**: coerce editions and matches into typed rows, pass the
//!    roster through
//! 4. **Analyze**: compute the four winner aggregates
//!
//! Each stage takes the output of the previous stage and returns typed
//! results; fatal errors carry the failing table and field through `anyhow`
//! context.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{debug, info, info_span};

use wcup_analysis::{WinnerAnalysis, analyze_winners};
use wcup_ingest::read_csv_frame;
use wcup_model::{Edition, MatchRecord, SourceTable};
use wcup_transform::{normalize_editions, normalize_matches, normalize_players};

// ============================================================================
// Stage 0: Resolve
// ============================================================================

/// Resolved locations of the three source tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePaths {
    pub editions: PathBuf,
    pub matches: PathBuf,
    pub players: PathBuf,
}

impl TablePaths {
    /// Resolves each table to `<data_dir>/<default file name>` unless an
    /// explicit override is given.
    pub fn resolve(
        data_dir: &Path,
        editions: Option<PathBuf>,
        matches: Option<PathBuf>,
        players: Option<PathBuf>,
    ) -> Self {
        let default_path = |table: SourceTable| data_dir.join(table.default_file_name());
        Self {
            editions: editions.unwrap_or_else(|| default_path(SourceTable::Editions)),
            matches: matches.unwrap_or_else(|| default_path(SourceTable::Matches)),
            players: players.unwrap_or_else(|| default_path(SourceTable::Players)),
        }
    }

    /// Resolved path for one table.
    pub fn for_table(&self, table: SourceTable) -> &Path {
        match table {
            SourceTable::Editions => &self.editions,
            SourceTable::Matches => &self.matches,
            SourceTable::Players => &self.players,
        }
    }
}

// ============================================================================
// Stage 1: Load
// ============================================================================

/// Result of the load stage: one raw frame per source table.
#[derive(Debug)]
pub struct LoadedTables {
    pub editions: DataFrame,
    pub matches: DataFrame,
    pub players: DataFrame,
}

/// Reads the three source files into raw frames.
///
/// A missing file aborts here, before any normalization runs.
pub fn load_tables(paths: &TablePaths) -> Result<LoadedTables> {
    let load_span = info_span!("load");
    let _load_guard = load_span.enter();
    let load_start = Instant::now();

    let editions = load_one(paths, SourceTable::Editions)?;
    let matches = load_one(paths, SourceTable::Matches)?;
    let players = load_one(paths, SourceTable::Players)?;

    info!(
        edition_rows = editions.height(),
        match_rows = matches.height(),
        player_rows = players.height(),
        duration_ms = load_start.elapsed().as_millis(),
        "load complete"
    );
    Ok(LoadedTables {
        editions,
        matches,
        players,
    })
}

fn load_one(paths: &TablePaths, table: SourceTable) -> Result<DataFrame> {
    let path = paths.for_table(table);
    let frame = read_csv_frame(path)
        .with_context(|| format!("load {table} table from {}", path.display()))?;
    debug!(
        table = %table,
        path = %path.display(),
        rows = frame.height(),
        columns = frame.width(),
        "table loaded"
    );
    Ok(frame)
}

// ============================================================================
// Stage 2: Normalize
// ============================================================================

/// Result of the normalize stage: typed editions and matches, the roster
/// frame, and the count of match rows discarded for unparseable date/time.
#[derive(Debug)]
pub struct NormalizedTables {
    pub editions: Vec<Edition>,
    pub matches: Vec<MatchRecord>,
    pub dropped_matches: usize,
    pub players: DataFrame,
}

/// Coerces the raw frames into typed tables.
///
/// Editions and matches fail fatally on structural problems; match rows
/// with an unparseable date or time are dropped and counted instead.
pub fn normalize_tables(tables: LoadedTables) -> Result<NormalizedTables> {
    let normalize_span = info_span!("normalize");
    let _normalize_guard = normalize_span.enter();
    let normalize_start = Instant::now();

    let editions = normalize_editions(&tables.editions).context("normalize editions table")?;
    let matches = normalize_matches(&tables.matches).context("normalize matches table")?;
    let players = normalize_players(tables.players);

    info!(
        edition_rows = editions.len(),
        match_rows = matches.records.len(),
        dropped_matches = matches.dropped,
        player_rows = players.height(),
        duration_ms = normalize_start.elapsed().as_millis(),
        "normalize complete"
    );
    Ok(NormalizedTables {
        editions,
        matches: matches.records,
        dropped_matches: matches.dropped,
        players,
    })
}

// ============================================================================
// Stage 3: Analyze
// ============================================================================

/// Computes the four winner aggregates from the normalized tables.
pub fn analyze_tables(tables: &NormalizedTables) -> Result<WinnerAnalysis> {
    let analyze_span = info_span!("analyze");
    let _analyze_guard = analyze_span.enter();
    let analyze_start = Instant::now();

    let analysis = analyze_winners(&tables.editions, &tables.matches, &tables.players)
        .context("compute winner aggregates")?;

    info!(
        winners = analysis.goals_by_winner.len(),
        pairings = analysis.matches_played_by_winner.len(),
        key_players = analysis.key_players.len(),
        duration_ms = analyze_start.elapsed().as_millis(),
        "analyze complete"
    );
    Ok(analysis)
}
