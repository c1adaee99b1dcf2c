use wcup_analysis::WinnerAnalysis;
use wcup_cli::pipeline::TablePaths;

/// Everything the presenter needs about a completed analysis run.
#[derive(Debug)]
pub struct AnalysisRun {
    pub paths: TablePaths,
    pub edition_rows: usize,
    pub match_rows: usize,
    pub dropped_match_rows: usize,
    pub player_rows: usize,
    pub analysis: WinnerAnalysis,
}
