//! Error types for epi-series.

use thiserror::Error;

/// Errors that can occur when recording a series.
#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

/// Alias for `Result<T, SeriesError>`.
pub type SeriesResult<T> = Result<T, SeriesError>;
