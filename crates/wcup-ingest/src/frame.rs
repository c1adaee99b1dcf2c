//! DataFrame construction from raw CSV tables.
//!
//! Every column is materialized as Utf8 so the frame preserves the source
//! text verbatim; typing happens in the normalization stage.

use std::path::Path;

use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use crate::csv_table::{CsvTable, read_csv_table};
use crate::error::Result;

/// Builds an all-string DataFrame whose columns match the table's header row.
pub fn frame_from_table(table: &CsvTable) -> Result<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(table.headers.len());
    for (idx, header) in table.headers.iter().enumerate() {
        let mut values: Vec<String> = Vec::with_capacity(table.rows.len());
        for row in &table.rows {
            values.push(row.get(idx).cloned().unwrap_or_default());
        }
        columns.push(Series::new(header.as_str().into(), values).into());
    }
    let frame = DataFrame::new(columns)?;
    Ok(frame)
}

/// Reads a delimited file straight into a string frame.
///
/// This is the loader entry point the pipeline uses: not-found and empty
/// sources fail here, before any transform runs.
pub fn read_csv_frame(path: &Path) -> Result<DataFrame> {
    let table = read_csv_table(path)?;
    frame_from_table(&table)
}
