//! In-memory time series.

use epi_core::HealthStatus;

use crate::{SeriesResult, SeriesRow, SeriesSink};

/// Keeps every recorded row for later inspection or plotting.
///
/// A restart discards the previous run's rows.
#[derive(Debug, Clone, Default)]
pub struct MemorySeries {
    rows: Vec<SeriesRow>,
}

impl MemorySeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[SeriesRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn last(&self) -> Option<&SeriesRow> {
        self.rows.last()
    }

    /// The count of `status` at every recorded row.
    pub fn column(&self, status: HealthStatus) -> Vec<usize> {
        self.rows.iter().map(|r| r.counts.get(status)).collect()
    }

    /// The row with the most active cases (earliest on ties).
    pub fn peak_active(&self) -> Option<&SeriesRow> {
        self.rows.iter().reduce(|best, r| if r.active_cases() > best.active_cases() { r } else { best })
    }
}

impl SeriesSink for MemorySeries {
    fn record(&mut self, row: &SeriesRow) -> SeriesResult<()> {
        self.rows.push(*row);
        Ok(())
    }

    fn restart(&mut self) -> SeriesResult<()> {
        self.rows.clear();
        Ok(())
    }
}
