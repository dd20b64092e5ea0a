//! Framework error type.
//!
//! The tick path of the engine never fails; errors only arise when a caller
//! validates configuration it did not write itself.  Sub-crates with their
//! own failure modes (epi-series) define their own enums.

use thiserror::Error;

/// Errors raised by `epi-core`.
#[derive(Debug, Error)]
pub enum EpiError {
    #[error("invalid configuration: {field} {reason}")]
    InvalidConfig {
        field:  &'static str,
        reason: String,
    },
}

impl EpiError {
    pub(crate) fn config(field: &'static str, reason: impl Into<String>) -> Self {
        EpiError::InvalidConfig { field, reason: reason.into() }
    }
}

/// Alias for `Result<T, EpiError>`.
pub type EpiResult<T> = Result<T, EpiError>;
