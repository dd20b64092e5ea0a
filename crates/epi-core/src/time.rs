//! Simulation time model.
//!
//! # Design
//!
//! The driver decides how much simulated time passes per tick, so the clock is
//! a continuous millisecond counter rather than an integer tick.  `SimClock`
//! carries both: `now` (the value every stage timer is compared against) and
//! `tick` (how many `advance` calls have happened, for reporting).
//!
//! The reference pacing is one frame of [`FRAME_MILLIS`] multiplied by a speed
//! factor chosen by the driver.

use std::fmt;

/// Milliseconds in one reference frame (a ~60 Hz driver).
pub const FRAME_MILLIS: f64 = 16.0;

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute simulation timestamp in milliseconds since initialization.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// Milliseconds elapsed from `earlier` to `self`.
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }

    #[inline]
    pub fn millis(self) -> f64 {
        self.0
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}ms", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The monotonic simulation clock.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Current simulated time.  Starts at zero.
    pub now: SimTime,
    /// Number of completed ticks.
    pub tick: u64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward by `dt_millis`.
    ///
    /// Negative or non-finite steps are treated as zero so the clock stays
    /// monotonic whatever the driver hands in.
    #[inline]
    pub fn advance(&mut self, dt_millis: f64) {
        if dt_millis.is_finite() && dt_millis > 0.0 {
            self.now = self.now + dt_millis;
        }
        self.tick += 1;
    }

    /// Elapsed simulated seconds since initialization.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.now.0 / 1_000.0
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{} ({:.1}s)", self.tick, self.elapsed_secs())
    }
}
