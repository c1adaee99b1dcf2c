use polars::prelude::PolarsError;
use thiserror::Error;
use wcup_model::SourceTable;

/// Errors raised while normalizing a raw table.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// A column the stage needs is absent from the frame.
    #[error("{table} table is missing required column '{column}'")]
    MissingColumn {
        table: SourceTable,
        column: String,
    },

    /// A field that must coerce cleanly did not.
    #[error("{table} table has unparseable {column} value '{value}'")]
    FieldCoercion {
        table: SourceTable,
        column: String,
        value: String,
    },

    /// Frame-level failure from the underlying columnar store.
    #[error("frame operation failed: {message}")]
    Frame { message: String },
}

impl From<PolarsError> for NormalizeError {
    fn from(err: PolarsError) -> Self {
        NormalizeError::Frame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
