//! The `Sim` struct and its tick pass.

use log::{debug, trace};

use epi_agent::{AgentStore, PopulationBuilder};
use epi_core::{EpidemicConfig, FRAME_MILLIS, SimClock, SimRng};
use epi_disease::{DiseaseContext, Transition, TransmissionEvent, progress, rescale_recovery_duration, transmit_pair};
use epi_motion::{AllPairsScanner, ContactScanner, MotionEngine};
use epi_stats::TickStats;

use crate::{NoopObserver, SimObserver, Snapshot};

// ── ConfigUpdate ──────────────────────────────────────────────────────────────

/// What [`Sim::apply_config_update`] did with a new configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigUpdate {
    /// The configuration is now in force.  `rescaled` agents had their
    /// personal recovery duration re-derived.
    Applied { rescaled: usize },

    /// Population size or index-case count changed.  Nothing was applied;
    /// call [`Sim::reinitialize`] (or build a new `Sim`) instead.
    RequiresReinitialization,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// One running outbreak.
///
/// `Sim<C>` owns the population, clock, configuration, RNG and event log, and
/// is mutated only through [`advance`](Self::advance),
/// [`apply_config_update`](Self::apply_config_update) and
/// [`reinitialize`](Self::reinitialize).  Independent simulations are just
/// independent values.
///
/// `C` is the contact-scan algorithm; see [`MotionEngine`].
///
/// Create via [`SimBuilder`][crate::SimBuilder] or [`Sim::initialize`].
pub struct Sim<C: ContactScanner = AllPairsScanner> {
    pub(crate) config: EpidemicConfig,
    pub(crate) clock:  SimClock,
    pub(crate) store:  AgentStore,
    pub(crate) rng:    SimRng,
    pub(crate) motion: MotionEngine<C>,

    /// Every transmission since initialization, in the order it happened.
    pub(crate) transmissions: Vec<TransmissionEvent>,

    /// Statistics as of the end of the last tick (or initialization).
    pub(crate) stats: TickStats,

    /// Transitions applied during the current tick; reused between ticks.
    pub(crate) transitions: Vec<Transition>,
}

impl Sim<AllPairsScanner> {
    /// Build a simulation from `config` with an entropy-seeded RNG.
    ///
    /// Use [`SimBuilder`][crate::SimBuilder] for reproducible runs.
    pub fn initialize(config: EpidemicConfig) -> Self {
        crate::SimBuilder::new(config).build()
    }
}

impl<C: ContactScanner> Sim<C> {
    // ── Construction ──────────────────────────────────────────────────────

    pub(crate) fn from_parts(config: EpidemicConfig, rng: SimRng, motion: MotionEngine<C>) -> Self {
        let mut sim = Self {
            config,
            clock:         SimClock::new(),
            store:         AgentStore::new(Vec::new()),
            rng,
            motion,
            transmissions: Vec::new(),
            stats:         TickStats::default(),
            transitions:   Vec::new(),
        };
        sim.populate();
        sim
    }

    /// Draw a fresh population for the current config and reset all run
    /// state.  The RNG stream carries on.
    fn populate(&mut self) {
        let config = &self.config;
        self.store = PopulationBuilder::new(config.population_size)
            .index_cases(config.initial_infected_count)
            .arena(config.arena)
            .mobility_factor(config.mobility_factor)
            .base_recovery_duration(config.base_recovery_duration)
            .build(&mut self.rng);
        self.clock = SimClock::new();
        self.transmissions.clear();
        self.transitions.clear();
        self.stats = TickStats::compute(self.store.as_slice(), config.initial_infected_count);

        debug!(
            "initialized {} agents ({} index cases) in a {}x{} arena",
            self.store.len(),
            config.initial_infected_count.min(config.population_size),
            config.arena.width,
            config.arena.height,
        );
    }

    /// Replace the population with a fresh one drawn for `config`.
    pub fn reinitialize(&mut self, config: EpidemicConfig) {
        self.reinitialize_observed(config, &mut NoopObserver);
    }

    /// [`reinitialize`](Self::reinitialize) and report the new population.
    pub fn reinitialize_observed<O: SimObserver>(&mut self, config: EpidemicConfig, observer: &mut O) {
        self.config = config;
        self.populate();
        observer.on_initialized(&self.snapshot());
    }

    // ── Read-only access ──────────────────────────────────────────────────

    pub fn config(&self) -> &EpidemicConfig {
        &self.config
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn agents(&self) -> &AgentStore {
        &self.store
    }

    /// Every transmission since initialization, oldest first.
    pub fn transmissions(&self) -> &[TransmissionEvent] {
        &self.transmissions
    }

    pub fn stats(&self) -> &TickStats {
        &self.stats
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            clock:  self.clock.now,
            tick:   self.clock.tick,
            agents: self.store.as_slice(),
            counts: self.stats.counts,
            r0:     self.stats.r0,
            rt:     self.stats.rt,
        }
    }

    // ── Driving ───────────────────────────────────────────────────────────

    /// Run one tick of `dt_millis` simulated milliseconds.
    ///
    /// A simulation with no agents ignores the call entirely.
    pub fn advance(&mut self, dt_millis: f64) {
        self.advance_observed(dt_millis, &mut NoopObserver);
    }

    /// One reference frame: `FRAME_MILLIS × speed`.
    pub fn advance_frames(&mut self, speed: f64) {
        self.advance(FRAME_MILLIS * speed);
    }

    /// `frames` reference frames at `speed`, reporting to `observer`.
    pub fn run_frames<O: SimObserver>(&mut self, frames: u64, speed: f64, observer: &mut O) {
        for _ in 0..frames {
            self.advance_observed(FRAME_MILLIS * speed, observer);
        }
    }

    /// [`advance`](Self::advance), reporting to `observer`.
    pub fn advance_observed<O: SimObserver>(&mut self, dt_millis: f64, observer: &mut O) {
        if self.store.is_empty() {
            return;
        }

        // ── ① Clock ───────────────────────────────────────────────────────
        let before = self.clock.now;
        self.clock.advance(dt_millis);
        let now = self.clock.now;

        // Explicit field borrows so the borrow checker sees disjoint access.
        let config = &self.config;
        let rng    = &mut self.rng;
        let agents = &mut self.store;

        let over_capacity = config.extensions.healthcare_capacity
            && self.stats.counts.active_cases() > config.healthcare_capacity_threshold;
        let ctx = DiseaseContext::new(now, now.since(before), config, over_capacity);

        // ── ② Motion ──────────────────────────────────────────────────────
        self.motion.move_agents(&mut agents.agents, &config.arena, config.mobility_factor, rng);

        // ── ③ Progression ─────────────────────────────────────────────────
        self.transitions.clear();
        for agent in agents.iter_mut() {
            self.transitions.extend(progress(agent, &ctx, rng));
        }

        // ── ④ Contacts ────────────────────────────────────────────────────
        let contacts = self.motion.detect_contacts(&mut agents.agents, &config.arena, rng);

        // ── ⑤ Transmission ────────────────────────────────────────────────
        let first_new = self.transmissions.len();
        for contact in contacts {
            transmit_pair(agents, contact.first, contact.second, &ctx, rng, &mut self.transmissions);
        }

        // ── ⑥ Statistics ──────────────────────────────────────────────────
        self.stats = TickStats::compute(agents.as_slice(), config.initial_infected_count);

        trace!(
            "{} contacts={} transitions={} transmissions={} {}",
            self.clock,
            contacts.len(),
            self.transitions.len(),
            self.transmissions.len() - first_new,
            self.stats.counts,
        );

        for transition in &self.transitions {
            observer.on_transition(transition);
        }
        for event in &self.transmissions[first_new..] {
            observer.on_transmission(event);
        }
        observer.on_tick_end(&self.snapshot());
    }

    // ── Live configuration ────────────────────────────────────────────────

    /// Put `config` in force without disturbing the population.
    ///
    /// Statuses, positions and velocities are never touched.  A changed
    /// `base_recovery_duration` re-derives each live agent's personal
    /// duration, keeping its individual multiplier; applying the same base
    /// twice changes nothing.  Changes to the population size or index-case
    /// count cannot be applied live and are refused.
    pub fn apply_config_update(&mut self, config: EpidemicConfig) -> ConfigUpdate {
        if self.config.requires_reinitialization(&config) {
            debug!(
                "config update needs re-initialization (population {} -> {}, index cases {} -> {})",
                self.config.population_size,
                config.population_size,
                self.config.initial_infected_count,
                config.initial_infected_count,
            );
            return ConfigUpdate::RequiresReinitialization;
        }

        let base = config.base_recovery_duration;
        let mut rescaled = 0;
        for agent in self.store.iter_mut() {
            if rescale_recovery_duration(agent, base) {
                rescaled += 1;
            }
        }
        if rescaled > 0 {
            debug!("rescaled {rescaled} recovery durations to base {base}ms");
        }

        self.config = config;
        ConfigUpdate::Applied { rescaled }
    }
}
