use anyhow::Result;
use comfy_table::Table;
use tracing::info_span;

use wcup_cli::pipeline::{self, TablePaths};
use wcup_model::SourceTable;

use crate::cli::AnalyzeArgs;
use crate::summary::apply_table_style;
use crate::types::AnalysisRun;

/// Run the full load -> normalize -> analyze pipeline over one data set.
pub fn run_analysis(args: &AnalyzeArgs) -> Result<AnalysisRun> {
    let paths = TablePaths::resolve(
        &args.data_dir,
        args.cups.clone(),
        args.matches.clone(),
        args.players.clone(),
    );
    let analysis_span = info_span!("analysis", data_dir = %args.data_dir.display());
    let _analysis_guard = analysis_span.enter();

    let loaded = pipeline::load_tables(&paths)?;
    let normalized = pipeline::normalize_tables(loaded)?;
    let analysis = pipeline::analyze_tables(&normalized)?;

    Ok(AnalysisRun {
        paths,
        edition_rows: normalized.editions.len(),
        match_rows: normalized.matches.len(),
        dropped_match_rows: normalized.dropped_matches,
        player_rows: normalized.players.height(),
        analysis,
    })
}

/// Print the source-table reference: codes, default files, required columns.
pub fn run_tables() {
    let mut table = Table::new();
    table.set_header(vec!["Table", "File", "Description", "Required columns"]);
    apply_table_style(&mut table);
    for source in SourceTable::ALL {
        table.add_row(vec![
            source.code().to_string(),
            source.default_file_name().to_string(),
            source.description().to_string(),
            source.required_columns().join(", "),
        ]);
    }
    println!("{table}");
}
