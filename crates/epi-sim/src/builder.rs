//! Fluent builder for constructing a [`Sim`].

use epi_core::{EpidemicConfig, SimRng};
use epi_motion::{AllPairsScanner, ContactScanner, MotionEngine};

use crate::{NoopObserver, Sim, SimObserver};

/// Fluent builder for [`Sim<C>`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                   |
/// |-----------------|-------------------------------------------|
/// | `.seed(s)`      | OS entropy                                |
/// | `.rng(r)`       | OS entropy (overrides `.seed`)            |
/// | `.scanner(c)`   | [`AllPairsScanner`]                       |
///
/// The configuration is used as given; call
/// [`EpidemicConfig::validate`] first if it comes from outside.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .seed(7)
///     .scanner(RTreeScanner::new())
///     .build();
/// sim.run_frames(1_000, 1.0, &mut NoopObserver);
/// ```
pub struct SimBuilder<C: ContactScanner = AllPairsScanner> {
    config:  EpidemicConfig,
    rng:     Option<SimRng>,
    scanner: C,
}

impl SimBuilder<AllPairsScanner> {
    pub fn new(config: EpidemicConfig) -> Self {
        Self { config, rng: None, scanner: AllPairsScanner }
    }
}

impl<C: ContactScanner> SimBuilder<C> {
    /// Seed the simulation RNG for a reproducible run.
    pub fn seed(mut self, seed: u64) -> Self {
        self.rng = Some(SimRng::new(seed));
        self
    }

    /// Inject a ready-made RNG.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Swap the contact-scan algorithm.
    pub fn scanner<D: ContactScanner>(self, scanner: D) -> SimBuilder<D> {
        SimBuilder { config: self.config, rng: self.rng, scanner }
    }

    /// Draw the population and return a ready-to-run [`Sim`].
    pub fn build(self) -> Sim<C> {
        self.build_observed(&mut NoopObserver)
    }

    /// [`build`](Self::build) and report the initial population.
    pub fn build_observed<O: SimObserver>(self, observer: &mut O) -> Sim<C> {
        let rng = self.rng.unwrap_or_else(SimRng::from_entropy);
        let sim = Sim::from_parts(self.config, rng, MotionEngine::new(self.scanner));
        observer.on_initialized(&sim.snapshot());
        sim
    }
}
