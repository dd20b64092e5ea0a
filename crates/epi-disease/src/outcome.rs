//! Outcome sampler: how an infectious episode ends.

use epi_agent::Agent;
use epi_core::{AgeGroup, HealthStatus, SimRng, SimTime};

/// Mortality multiplier while active cases exceed healthcare capacity.
pub const OVER_CAPACITY_MULTIPLIER: f64 = 1.5;

/// How an episode ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Recovered,
    Dead,
}

/// Base probability that an episode ends in death.
///
/// Children and seniors share a rate here; only adults are lower.
#[inline]
pub fn base_mortality(age: AgeGroup) -> f64 {
    match age {
        AgeGroup::Child  => 0.20,
        AgeGroup::Adult  => 0.05,
        AgeGroup::Senior => 0.20,
    }
}

/// Mortality for `age`, raised by [`OVER_CAPACITY_MULTIPLIER`] when care is
/// over capacity.  Capped at 1.
#[inline]
pub fn mortality(age: AgeGroup, over_capacity: bool) -> f64 {
    let p = base_mortality(age);
    if over_capacity { (p * OVER_CAPACITY_MULTIPLIER).min(1.0) } else { p }
}

/// Decide and apply the end of `agent`'s episode with one uniform draw.
///
/// Death pins the agent; recovery starts its immunity window.
pub fn resolve_outcome(
    agent:             &mut Agent,
    now:               SimTime,
    immunity_duration: f64,
    over_capacity:     bool,
    rng:               &mut SimRng,
) -> Outcome {
    if rng.chance(mortality(agent.age_group, over_capacity)) {
        agent.status = HealthStatus::Dead;
        agent.immobilize();
        Outcome::Dead
    } else {
        agent.status = HealthStatus::Recovered;
        agent.immunity_expires_at = Some(now + immunity_duration);
        Outcome::Recovered
    }
}
