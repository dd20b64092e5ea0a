//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! Every probabilistic decision in a run (population draws, velocity jitter,
//! transmission, outcome, vaccination) is taken from one `SimRng` owned by
//! the simulation.  Because the tick pass is strictly ordered, the same seed
//! and the same sequence of `advance` calls always produce the same history.
//!
//! Tests and hosts that need a particular stream construct the `SimRng`
//! themselves and inject it through the simulation builder.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level uniform random source.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from operating-system entropy (non-reproducible runs).
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// One uniform draw in `[0, 1)`.
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` when a single uniform draw falls below `p`.
    ///
    /// Unlike `Rng::gen_bool` this always consumes exactly one `f64` draw and
    /// accepts any `p`: `p <= 0` never succeeds, `p >= 1` always does.
    #[inline]
    pub fn chance(&mut self, p: f64) -> bool {
        self.uniform() < p
    }

    /// A uniformly distributed direction.
    #[inline]
    pub fn unit_vector(&mut self) -> crate::Vec2 {
        crate::Vec2::from_angle(self.uniform() * std::f64::consts::TAU)
    }
}
