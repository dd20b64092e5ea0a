//! Fluent builder that draws a fresh population.
//!
//! # Usage
//!
//! ```rust
//! use epi_agent::PopulationBuilder;
//! use epi_core::{HealthStatus, SimRng};
//!
//! let mut rng = SimRng::new(42);
//! let store = PopulationBuilder::new(100)
//!     .index_cases(3)
//!     .build(&mut rng);
//!
//! assert_eq!(store.len(), 100);
//! assert_eq!(store.count_status(HealthStatus::InfectiousSymptomatic), 3);
//! ```

use std::ops::RangeInclusive;

use rand::distributions::{Distribution, WeightedIndex};

use epi_core::{AgeGroup, AgentId, Arena, HealthStatus, SimRng, SimTime, Vec2};

use crate::{Agent, AgentStore};

/// Milliseconds from exposure to infectiousness, drawn once per agent.
pub const INCUBATION_RANGE: RangeInclusive<f64> = 1_000.0..=3_000.0;

/// Renderer-only infection halo, drawn once per agent.
pub const INFECTION_RADIUS_RANGE: RangeInclusive<f64> = 8.0..=12.0;

/// Individual spread around the base recovery duration.
pub const RECOVERY_MULTIPLIER_RANGE: RangeInclusive<f64> = 0.8..=1.2;

/// Builds an [`AgentStore`] for a new simulation.
///
/// Per agent, in id order, the builder draws: age group, incubation
/// duration, infection radius, recovery multiplier, position, velocity.
/// Agents `0..index_cases` start `InfectiousSymptomatic` at clock zero.
pub struct PopulationBuilder {
    count:                  usize,
    index_cases:            usize,
    arena:                  Arena,
    mobility_factor:        f64,
    base_recovery_duration: f64,
}

impl PopulationBuilder {
    /// Create a builder for `count` agents with default arena and parameters.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            index_cases:            0,
            arena:                  Arena::default(),
            mobility_factor:        0.5,
            base_recovery_duration: 5_000.0,
        }
    }

    /// Seed the first `n` agents as infectious.  Clamped to the population.
    pub fn index_cases(mut self, n: usize) -> Self {
        self.index_cases = n;
        self
    }

    pub fn arena(mut self, arena: Arena) -> Self {
        self.arena = arena;
        self
    }

    /// Initial speeds are drawn up to the cap implied by this factor.
    pub fn mobility_factor(mut self, mobility_factor: f64) -> Self {
        self.mobility_factor = mobility_factor;
        self
    }

    /// Base used for the index cases' personal recovery durations.
    pub fn base_recovery_duration(mut self, base: f64) -> Self {
        self.base_recovery_duration = base;
        self
    }

    /// Draw every agent from `rng`.
    pub fn build(self, rng: &mut SimRng) -> AgentStore {
        let seeded = self.index_cases.min(self.count);
        let max_speed = 0.2 + 1.8 * self.mobility_factor;
        // `SHARES` are fixed positive weights, so this is always `Some`.
        let ages = WeightedIndex::new(AgeGroup::SHARES).ok();

        let agents = (0..self.count)
            .map(|i| {
                let mut agent = Agent::new(AgentId(i as u32));
                agent.age_group = match &ages {
                    Some(ages) => AgeGroup::ALL[ages.sample(rng.inner())],
                    None => AgeGroup::Adult,
                };
                agent.incubation_duration = rng.gen_range(INCUBATION_RANGE);
                agent.infection_radius = rng.gen_range(INFECTION_RADIUS_RANGE);
                agent.recovery_multiplier = rng.gen_range(RECOVERY_MULTIPLIER_RANGE);
                agent.position = Vec2::new(
                    lerp(self.arena.min_x(), self.arena.max_x(), rng.uniform()),
                    lerp(self.arena.min_y(), self.arena.max_y(), rng.uniform()),
                );
                agent.velocity = rng.unit_vector() * (max_speed * rng.uniform());

                if i < seeded {
                    agent.begin_infectious(
                        HealthStatus::InfectiousSymptomatic,
                        SimTime::ZERO,
                        self.base_recovery_duration,
                    );
                }
                agent
            })
            .collect();

        AgentStore::new(agents)
    }
}

#[inline]
fn lerp(lo: f64, hi: f64, t: f64) -> f64 {
    lo + (hi - lo) * t
}
