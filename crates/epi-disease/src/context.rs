//! Read-only inputs shared by every disease rule during one tick.

use epi_core::{EpidemicConfig, SimTime};

/// A read-only view of what the disease rules need to know about the current
/// tick.
///
/// Built once per tick by epi-sim after the clock has advanced, so `now` is
/// the time every stage timer is compared against.
#[derive(Copy, Clone, Debug)]
pub struct DiseaseContext<'a> {
    /// Current simulation time (already advanced for this tick).
    pub now: SimTime,

    /// Length of this tick in milliseconds.
    pub dt_millis: f64,

    /// The configuration in force for this tick.
    pub config: &'a EpidemicConfig,

    /// Whether the outcome sampler applies the over-capacity multiplier.
    /// Always `false` unless `config.extensions.healthcare_capacity` is set.
    pub over_capacity: bool,
}

impl<'a> DiseaseContext<'a> {
    #[inline]
    pub fn new(now: SimTime, dt_millis: f64, config: &'a EpidemicConfig, over_capacity: bool) -> Self {
        Self { now, dt_millis, config, over_capacity }
    }
}
