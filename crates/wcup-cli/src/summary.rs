use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use wcup_analysis::WinnerAnalysis;

use crate::types::AnalysisRun;

/// Prints the run header (resolved paths and row counts) followed by the
/// four aggregates in their fixed order: GoalsByWinner,
/// MatchesPlayedByWinner, AttendanceByWinner, KeyPlayers.
///
/// Every aggregate table is printed even when empty.
pub fn print_summary(run: &AnalysisRun) {
    println!("Editions: {}", run.paths.editions.display());
    println!("Matches: {}", run.paths.matches.display());
    println!("Players: {}", run.paths.players.display());
    print_row_counts(run);
    print_goals_by_winner(&run.analysis);
    print_matches_played_by_winner(&run.analysis);
    print_attendance_by_winner(&run.analysis);
    print_key_players(&run.analysis);
}

fn print_row_counts(run: &AnalysisRun) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Rows read"),
        header_cell("Rows kept"),
        header_cell("Dropped"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new("editions"),
        Cell::new(run.edition_rows),
        Cell::new(run.edition_rows),
        dropped_cell(0),
    ]);
    table.add_row(vec![
        Cell::new("matches"),
        Cell::new(run.match_rows + run.dropped_match_rows),
        Cell::new(run.match_rows),
        dropped_cell(run.dropped_match_rows),
    ]);
    table.add_row(vec![
        Cell::new("players"),
        Cell::new(run.player_rows),
        Cell::new(run.player_rows),
        dropped_cell(0),
    ]);
    println!("{table}");
}

fn print_goals_by_winner(analysis: &WinnerAnalysis) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Winner"), header_cell("Goals")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (winner, goals) in &analysis.goals_by_winner {
        table.add_row(vec![Cell::new(winner), Cell::new(goals)]);
    }
    print_aggregate("GoalsByWinner", &table);
}

fn print_matches_played_by_winner(analysis: &WinnerAnalysis) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Home Team"),
        header_cell("Away Team"),
        header_cell("Matches"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for (pair, count) in &analysis.matches_played_by_winner {
        table.add_row(vec![
            Cell::new(&pair.home),
            Cell::new(&pair.away),
            Cell::new(count),
        ]);
    }
    print_aggregate("MatchesPlayedByWinner", &table);
}

fn print_attendance_by_winner(analysis: &WinnerAnalysis) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Home Team"),
        header_cell("Away Team"),
        header_cell("Attendance"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for (pair, total) in &analysis.attendance_by_winner {
        table.add_row(vec![
            Cell::new(&pair.home),
            Cell::new(&pair.away),
            Cell::new(total),
        ]);
    }
    print_aggregate("AttendanceByWinner", &table);
}

fn print_key_players(analysis: &WinnerAnalysis) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Player Name"),
        header_cell("Team Initials"),
        header_cell("Position"),
        header_cell("Event"),
    ]);
    apply_table_style(&mut table);
    for player in &analysis.key_players {
        table.add_row(vec![
            Cell::new(&player.player_name),
            Cell::new(&player.team_initials),
            Cell::new(&player.position),
            Cell::new(&player.event),
        ]);
    }
    print_aggregate("KeyPlayers", &table);
}

fn print_aggregate(label: &str, table: &Table) {
    println!();
    println!("{label}:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn dropped_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
