//! Simulation configuration.
//!
//! `EpidemicConfig` is supplied by the host (a control surface, a JSON file,
//! a test) and read by the engine every tick.  Two fields shape the
//! population itself (`population_size` and `initial_infected_count`), and
//! changing either requires building a fresh simulation.  Everything else may
//! change between ticks.
//!
//! The engine does not validate what it is given.  Hosts that accept
//! untrusted input call [`EpidemicConfig::validate`] first.

use crate::{EpiError, EpiResult};

// ── Arena ─────────────────────────────────────────────────────────────────────

/// The bounded rectangle agents move in.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Arena {
    pub width:  f64,
    pub height: f64,
    /// Distance from each edge at which agents bounce.
    pub margin: f64,
}

impl Default for Arena {
    fn default() -> Self {
        Self { width: 800.0, height: 600.0, margin: 5.0 }
    }
}

impl Arena {
    #[inline]
    pub fn min_x(&self) -> f64 {
        self.margin
    }

    #[inline]
    pub fn max_x(&self) -> f64 {
        self.width - self.margin
    }

    #[inline]
    pub fn min_y(&self) -> f64 {
        self.margin
    }

    #[inline]
    pub fn max_y(&self) -> f64 {
        self.height - self.margin
    }
}

// ── Extensions ────────────────────────────────────────────────────────────────

/// Opt-in behaviors beyond the reference model.
///
/// All default to `false`, which keeps `vaccination_rate`,
/// `healthcare_capacity_threshold` and `immunity_duration` inert apart from
/// the stored `immunity_expires_at` timestamp.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Extensions {
    /// Raise mortality by the over-capacity multiplier while the live
    /// active-case count exceeds `healthcare_capacity_threshold`.
    pub healthcare_capacity: bool,
    /// Vaccinate healthy agents at `vaccination_rate` per simulated second.
    pub vaccination: bool,
    /// Return recovered agents to `Healthy` once `immunity_expires_at` passes.
    pub immunity_waning: bool,
}

// ── EpidemicConfig ────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EpidemicConfig {
    /// Number of agents.  Re-initialization required on change.
    pub population_size: usize,

    /// Per-contact transmission probability before mask/asymptomatic factors.
    pub base_infection_probability: f64,

    /// Base infectious period in milliseconds; scaled per agent.
    pub base_recovery_duration: f64,

    /// In `[0, 1]`: jitter probability, jitter magnitude, speed cap and step
    /// length all scale with it.
    pub mobility_factor: f64,

    /// Agents seeded as infectious at clock 0 (ids `0..n`).  Re-initialization
    /// required on change.
    pub initial_infected_count: usize,

    /// Milliseconds a symptomatic agent circulates before isolating.
    pub quarantine_delay: f64,

    /// Halves every transmission probability when enabled.
    pub mask_enabled: bool,

    /// Active-case count above which care is over capacity.
    pub healthcare_capacity_threshold: usize,

    /// Fraction of healthy agents vaccinated per simulated second (only with
    /// `extensions.vaccination`).
    pub vaccination_rate: f64,

    /// Milliseconds of immunity after recovery.
    pub immunity_duration: f64,

    pub arena: Arena,

    pub extensions: Extensions,
}

impl Default for EpidemicConfig {
    fn default() -> Self {
        Self {
            population_size:               200,
            base_infection_probability:    0.3,
            base_recovery_duration:        5_000.0,
            mobility_factor:               0.5,
            initial_infected_count:        3,
            quarantine_delay:              1_500.0,
            mask_enabled:                  false,
            healthcare_capacity_threshold: 50,
            vaccination_rate:              0.0,
            immunity_duration:             10_000.0,
            arena:                         Arena::default(),
            extensions:                    Extensions::default(),
        }
    }
}

impl EpidemicConfig {
    /// `true` if moving from `self` to `next` cannot be applied to a live
    /// population and needs a fresh simulation.
    #[inline]
    pub fn requires_reinitialization(&self, next: &EpidemicConfig) -> bool {
        self.population_size != next.population_size
            || self.initial_infected_count != next.initial_infected_count
    }

    /// Caller-side sanity check.  The engine itself never calls this.
    pub fn validate(&self) -> EpiResult<()> {
        if self.population_size == 0 {
            return Err(EpiError::config("population_size", "must be at least 1"));
        }
        if self.initial_infected_count > self.population_size {
            return Err(EpiError::config(
                "initial_infected_count",
                format!("{} exceeds population_size {}", self.initial_infected_count, self.population_size),
            ));
        }
        check_unit("base_infection_probability", self.base_infection_probability)?;
        check_unit("mobility_factor", self.mobility_factor)?;
        check_unit("vaccination_rate", self.vaccination_rate)?;
        check_non_negative("base_recovery_duration", self.base_recovery_duration)?;
        check_non_negative("quarantine_delay", self.quarantine_delay)?;
        check_non_negative("immunity_duration", self.immunity_duration)?;

        let arena = &self.arena;
        check_non_negative("arena.margin", arena.margin)?;
        if arena.width <= 2.0 * arena.margin || arena.height <= 2.0 * arena.margin {
            return Err(EpiError::config(
                "arena",
                format!("{}x{} leaves no room inside margin {}", arena.width, arena.height, arena.margin),
            ));
        }
        Ok(())
    }
}

fn check_unit(field: &'static str, value: f64) -> EpiResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(EpiError::config(field, format!("{value} is outside [0, 1]")))
    }
}

fn check_non_negative(field: &'static str, value: f64) -> EpiResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(EpiError::config(field, format!("{value} must be finite and non-negative")))
    }
}
