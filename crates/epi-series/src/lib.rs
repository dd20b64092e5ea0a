//! `epi-series` — per-tick epidemic curves recorded from a running `Sim`.
//!
//! | Sink                 | Destination                                         |
//! |----------------------|-----------------------------------------------------|
//! | [`MemorySeries`]     | `Vec<SeriesRow>` with peak / final-state helpers    |
//! | [`CsvSink<W>`]       | Any `io::Write` (stdout, a file, a `Vec<u8>`)       |
//!
//! All sinks implement [`SeriesSink`] and are driven by [`SeriesObserver`],
//! which implements `epi_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use epi_series::{CsvSink, SeriesObserver};
//!
//! let mut obs = SeriesObserver::new(CsvSink::new(std::io::stdout())?);
//! sim.run_frames(1_000, 1.0, &mut obs);
//! obs.finish()?;
//! obs.take_error().map(|e| eprintln!("series error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod memory;
pub mod observer;
pub mod row;
pub mod sink;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvSink;
pub use error::{SeriesError, SeriesResult};
pub use memory::MemorySeries;
pub use observer::SeriesObserver;
pub use row::SeriesRow;
pub use sink::SeriesSink;
