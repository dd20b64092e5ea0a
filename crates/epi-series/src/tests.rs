//! Unit tests for epi-series.

use epi_core::{EpidemicConfig, HealthStatus};
use epi_sim::{Sim, SimBuilder};
use epi_stats::StatusCounts;

use crate::SeriesRow;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn counts(spec: &[(HealthStatus, usize)]) -> StatusCounts {
    let mut c = StatusCounts::default();
    for &(status, n) in spec {
        for _ in 0..n {
            c.record(status);
        }
    }
    c
}

fn row(tick: u64, active: usize) -> SeriesRow {
    SeriesRow {
        tick,
        clock_ms: tick as f64 * 16.0,
        counts:   counts(&[(HealthStatus::Healthy, 10), (HealthStatus::Quarantined, active)]),
        r0:       None,
        rt:       Some(1.5),
    }
}

fn small_config() -> EpidemicConfig {
    EpidemicConfig { population_size: 40, ..EpidemicConfig::default() }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use super::*;
    use crate::{CsvSink, SeriesSink};

    fn read_back(bytes: &[u8]) -> (Vec<String>, Vec<csv::StringRecord>) {
        let mut rdr = csv::Reader::from_reader(bytes);
        let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        let records = rdr.records().map(|r| r.unwrap()).collect();
        (headers, records)
    }

    #[test]
    fn header_lists_every_column() {
        let sink = CsvSink::new(Vec::new()).unwrap();
        let (headers, records) = read_back(&sink.into_inner().unwrap());
        assert_eq!(
            headers,
            [
                "tick",
                "clock_ms",
                "healthy",
                "exposed",
                "infectious_symptomatic",
                "infectious_asymptomatic",
                "quarantined",
                "recovered",
                "dead",
                "active_cases",
                "r0",
                "rt",
            ]
        );
        assert!(records.is_empty());
    }

    #[test]
    fn row_fields_written_in_order() {
        let mut sink = CsvSink::new(Vec::new()).unwrap();
        sink.record(&row(3, 2)).unwrap();
        sink.finish().unwrap();
        sink.finish().unwrap();

        let (_, records) = read_back(&sink.into_inner().unwrap());
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(&r[0], "3");   // tick
        assert_eq!(&r[1], "48");  // clock_ms
        assert_eq!(&r[2], "10");  // healthy
        assert_eq!(&r[6], "2");   // quarantined
        assert_eq!(&r[9], "2");   // active_cases
        assert_eq!(&r[10], "");   // r0 absent
        assert_eq!(&r[11], "1.5");
    }
}

// ── Memory ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod memory_tests {
    use super::*;
    use crate::{MemorySeries, SeriesSink};

    #[test]
    fn peak_and_column() {
        let mut m = MemorySeries::new();
        assert!(m.peak_active().is_none());
        for (tick, active) in [(0, 1), (1, 4), (2, 4), (3, 2)] {
            m.record(&row(tick, active)).unwrap();
        }
        assert_eq!(m.len(), 4);
        assert_eq!(m.peak_active().map(|r| r.tick), Some(1));
        assert_eq!(m.column(HealthStatus::Quarantined), vec![1, 4, 4, 2]);
        assert_eq!(m.last().map(|r| r.tick), Some(3));
    }

    #[test]
    fn restart_discards_rows() {
        let mut m = MemorySeries::new();
        m.record(&row(0, 0)).unwrap();
        m.restart().unwrap();
        assert!(m.is_empty());
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use std::io;

    use super::*;
    use crate::{CsvSink, MemorySeries, SeriesError, SeriesObserver, SeriesResult, SeriesSink};

    fn recorded(interval: u64, frames: u64) -> (Sim, SeriesObserver<MemorySeries>) {
        let mut obs = SeriesObserver::new(MemorySeries::new()).every(interval);
        let mut sim = SimBuilder::new(small_config()).seed(1).build_observed(&mut obs);
        sim.run_frames(frames, 1.0, &mut obs);
        (sim, obs)
    }

    #[test]
    fn one_row_per_tick_plus_initial() {
        let (sim, obs) = recorded(1, 50);
        let rows = obs.sink().rows();
        assert_eq!(rows.len(), 51);
        assert_eq!(rows[0].tick, 0);
        assert_eq!(rows[50].tick, sim.clock().tick);
        assert!(rows.iter().all(|r| r.counts.total() == 40));
    }

    #[test]
    fn interval_thins_rows() {
        let (_, obs) = recorded(10, 50);
        let ticks: Vec<u64> = obs.sink().rows().iter().map(|r| r.tick).collect();
        assert_eq!(ticks, vec![0, 10, 20, 30, 40, 50]);
    }

    #[test]
    fn reinitialization_restarts_memory() {
        let (mut sim, mut obs) = recorded(1, 20);
        sim.reinitialize_observed(small_config(), &mut obs);
        let m = obs.into_sink();
        assert_eq!(m.len(), 1);
        assert_eq!(m.rows()[0].tick, 0);
    }

    #[test]
    fn csv_through_observer() {
        let mut obs = SeriesObserver::new(CsvSink::new(Vec::new()).unwrap());
        let mut sim = SimBuilder::new(small_config()).seed(2).build_observed(&mut obs);
        sim.run_frames(30, 1.0, &mut obs);
        obs.finish().unwrap();
        assert!(obs.take_error().is_none());

        let bytes = obs.into_sink().into_inner().unwrap();
        let mut rdr = csv::Reader::from_reader(bytes.as_slice());
        assert_eq!(rdr.records().count(), 31);
    }

    struct Broken;

    impl SeriesSink for Broken {
        fn record(&mut self, _row: &SeriesRow) -> SeriesResult<()> {
            Err(io::Error::other("disk full").into())
        }
    }

    #[test]
    fn first_error_kept() {
        let mut obs = SeriesObserver::new(Broken);
        let mut sim = SimBuilder::new(small_config()).seed(3).build_observed(&mut obs);
        sim.run_frames(5, 1.0, &mut obs);

        assert!(matches!(obs.take_error(), Some(SeriesError::Io(_))));
        assert!(obs.take_error().is_none());
    }
}
