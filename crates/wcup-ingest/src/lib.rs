//! CSV ingestion for the World Cup archive tables.
//!
//! Reads a delimited file into a [`CsvTable`] (headers kept verbatim, cells
//! trimmed) and lifts it into an all-UTF-8 polars frame. Typing is deferred
//! to the normalization stages; the loader only guarantees shape.

pub mod csv_table;
pub mod error;
pub mod frame;

pub use csv_table::{CsvTable, read_csv_table};
pub use error::{IngestError, Result};
pub use frame::{frame_from_table, read_csv_frame};
