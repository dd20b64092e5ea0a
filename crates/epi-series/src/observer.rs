//! `SeriesObserver<S>` — bridges `SimObserver` to a `SeriesSink`.

use log::warn;

use epi_sim::{SimObserver, Snapshot};

use crate::{SeriesError, SeriesResult, SeriesRow, SeriesSink};

/// A [`SimObserver`] that records one [`SeriesRow`] per tick (or every
/// `interval` ticks) into any [`SeriesSink`].
///
/// Errors from the sink are stored internally because `SimObserver` methods
/// have no return value.  After the run, check for errors with
/// [`take_error`][Self::take_error].
pub struct SeriesObserver<S: SeriesSink> {
    sink:       S,
    interval:   u64,
    last_error: Option<SeriesError>,
}

impl<S: SeriesSink> SeriesObserver<S> {
    /// Record every tick into `sink`.
    pub fn new(sink: S) -> Self {
        Self { sink, interval: 1, last_error: None }
    }

    /// Record only ticks that are multiples of `interval` (plus the initial
    /// population).  Zero is treated as one.
    pub fn every(mut self, interval: u64) -> Self {
        self.interval = interval.max(1);
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Unwrap the inner sink (e.g. to inspect rows after the run).
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Flush the sink.
    pub fn finish(&mut self) -> SeriesResult<()> {
        self.sink.finish()
    }

    /// Take the stored sink error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<SeriesError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: SeriesResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!("series sink failed, later errors suppressed: {e}");
                self.last_error = Some(e);
            }
        }
    }
}

impl<S: SeriesSink> SimObserver for SeriesObserver<S> {
    fn on_initialized(&mut self, snapshot: &Snapshot<'_>) {
        let result = self.sink.restart().and_then(|()| self.sink.record(&SeriesRow::from(snapshot)));
        self.store_err(result);
    }

    fn on_tick_end(&mut self, snapshot: &Snapshot<'_>) {
        if snapshot.tick % self.interval != 0 {
            return;
        }
        let result = self.sink.record(&SeriesRow::from(snapshot));
        self.store_err(result);
    }
}
