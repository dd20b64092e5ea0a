//! The plain data row every sink records.

use epi_core::HealthStatus;
use epi_sim::Snapshot;
use epi_stats::StatusCounts;

/// One point of the epidemic curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesRow {
    pub tick:     u64,
    pub clock_ms: f64,
    pub counts:   StatusCounts,
    pub r0:       Option<f64>,
    pub rt:       Option<f64>,
}

impl SeriesRow {
    /// Column names in the order [`fields`](Self::fields) yields them.
    pub fn header() -> Vec<&'static str> {
        let mut cols = vec!["tick", "clock_ms"];
        cols.extend(HealthStatus::ALL.iter().map(|s| s.as_str()));
        cols.extend(["active_cases", "r0", "rt"]);
        cols
    }

    /// The row as text fields.  Absent reproduction numbers are empty.
    pub fn fields(&self) -> Vec<String> {
        let mut out = vec![self.tick.to_string(), self.clock_ms.to_string()];
        out.extend(self.counts.iter().map(|(_, n)| n.to_string()));
        out.push(self.active_cases().to_string());
        out.push(self.r0.map(|v| v.to_string()).unwrap_or_default());
        out.push(self.rt.map(|v| v.to_string()).unwrap_or_default());
        out
    }

    #[inline]
    pub fn active_cases(&self) -> usize {
        self.counts.active_cases()
    }
}

impl From<&Snapshot<'_>> for SeriesRow {
    fn from(snapshot: &Snapshot<'_>) -> Self {
        Self {
            tick:     snapshot.tick,
            clock_ms: snapshot.clock.millis(),
            counts:   snapshot.counts,
            r0:       snapshot.r0,
            rt:       snapshot.rt,
        }
    }
}
