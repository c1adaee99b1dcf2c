use std::path::PathBuf;

use tempfile::TempDir;

use wcup_ingest::{IngestError, read_csv_frame, read_csv_table};

fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn reads_headers_verbatim_and_pads_short_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "matches.csv",
        "Year,Datetime,Home Team Name\n1930,13 Jul 1930 - 15:00\n1930,x,y\n",
    );
    let table = read_csv_table(&path).expect("read csv");
    assert_eq!(table.headers, vec!["Year", "Datetime", "Home Team Name"]);
    assert_eq!(table.rows.len(), 2);
    // Short row padded to header width.
    assert_eq!(table.rows[0], vec!["1930", "13 Jul 1930 - 15:00", ""]);
}

#[test]
fn skips_blank_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "cups.csv", "Year,Winner\n,,\n1930,Uruguay\n\n");
    let table = read_csv_table(&path).expect("read csv");
    assert_eq!(table.rows, vec![vec!["1930".to_string(), "Uruguay".to_string()]]);
}

#[test]
fn trims_cells_and_strips_bom() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "cups.csv", "\u{feff}Year, Winner \n 1930 , Uruguay \n");
    let table = read_csv_table(&path).expect("read csv");
    assert_eq!(table.headers, vec!["Year", "Winner"]);
    assert_eq!(table.rows[0], vec!["1930", "Uruguay"]);
}

#[test]
fn missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.csv");
    let err = read_csv_table(&path).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn empty_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "empty.csv", "");
    let err = read_csv_table(&path).unwrap_err();
    assert!(matches!(err, IngestError::EmptyCsv { .. }));
}

#[test]
fn frame_columns_match_header_row() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "players.csv",
        "Team Initials,Player Name,Position,Event\nURU,Alvaro GESTIDO,MF,\n",
    );
    let frame = read_csv_frame(&path).expect("read frame");
    assert_eq!(frame.height(), 1);
    let names: Vec<String> = frame
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(
        names,
        vec!["Team Initials", "Player Name", "Position", "Event"]
    );
}

#[test]
fn header_only_file_yields_empty_frame() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "cups.csv", "Year,Winner,GoalsScored\n");
    let frame = read_csv_frame(&path).expect("read frame");
    assert_eq!(frame.height(), 0);
    assert_eq!(frame.width(), 3);
}
