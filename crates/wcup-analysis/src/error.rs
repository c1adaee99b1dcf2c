use polars::prelude::PolarsError;
use thiserror::Error;
use wcup_model::SourceTable;

/// Errors raised while computing aggregates.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A column the aggregation reads is absent from the frame. Structural,
    /// so it is fatal even when the winner set is empty.
    #[error("{table} table is missing required column '{column}'")]
    MissingColumn {
        table: SourceTable,
        column: String,
    },

    /// Frame-level failure from the underlying columnar store.
    #[error("frame operation failed: {message}")]
    Frame { message: String },
}

impl From<PolarsError> for AnalysisError {
    fn from(err: PolarsError) -> Self {
        AnalysisError::Frame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
