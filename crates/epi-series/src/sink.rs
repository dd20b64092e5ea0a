//! The `SeriesSink` trait implemented by every destination.

use crate::{SeriesResult, SeriesRow};

/// Somewhere to put [`SeriesRow`]s.
///
/// Errors are stored by [`SeriesObserver`][crate::SeriesObserver] and
/// retrieved with its `take_error`.
pub trait SeriesSink {
    /// Append one row.
    fn record(&mut self, row: &SeriesRow) -> SeriesResult<()>;

    /// A fresh population replaced the old one.  Default: keep appending.
    fn restart(&mut self) -> SeriesResult<()> {
        Ok(())
    }

    /// Flush buffered output.  Idempotent.
    fn finish(&mut self) -> SeriesResult<()> {
        Ok(())
    }
}
