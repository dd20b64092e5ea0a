//! The `Agent` record.

use epi_core::{AgeGroup, AgentId, HealthStatus, SimTime, Vec2};

/// One simulated individual.
///
/// Fields are `pub` so the engine stages can update them directly; which
/// stage is allowed to touch which field is a convention upheld by the
/// simulation crates:
///
/// - `position`, `velocity` — motion engine (velocity is also zeroed by the
///   state machine on entry to `Quarantined`/`Dead`).
/// - `status` — state machine, transmission (`Healthy → Exposed`) and
///   outcome (`→ Recovered | Dead`).
/// - `transmission_count`, `infected_by` — transmission only.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id: AgentId,

    // ── Kinematics ────────────────────────────────────────────────────────
    pub position: Vec2,
    pub velocity: Vec2,

    // ── Epidemiology ──────────────────────────────────────────────────────
    pub status:    HealthStatus,
    pub age_group: AgeGroup,

    /// Set on `Healthy → Exposed`.
    pub exposed_at: Option<SimTime>,

    /// Milliseconds from exposure to becoming infectious.
    pub incubation_duration: f64,

    /// Start of the infectious chain; every later stage timer is measured
    /// from here.
    pub infectious_at: Option<SimTime>,

    /// Drawing radius for renderers.  Never consulted for transmission.
    pub infection_radius: f64,

    /// Individual factor applied to the base recovery duration.
    pub recovery_multiplier: f64,

    /// Milliseconds of infectious period.  `None` until the agent enters the
    /// infectious chain.
    pub personal_recovery_duration: Option<f64>,

    /// The base recovery duration `personal_recovery_duration` was last
    /// derived from.
    pub recovery_base: Option<f64>,

    /// Set on recovery.
    pub immunity_expires_at: Option<SimTime>,

    /// Who infected this agent.  `None` for index cases and the never-infected.
    ///
    /// Set on the first infection only.  An agent re-infected after waning
    /// immunity keeps its first infector here; the simulation's transmission
    /// log names the source of every infection.
    pub infected_by: Option<AgentId>,

    /// Secondary infections caused.  Only ever increases.
    pub transmission_count: u32,

    /// Reached `Recovered` by vaccination rather than by infection.
    pub vaccinated: bool,
}

impl Agent {
    /// A healthy, motionless agent at the origin with neutral draws.
    /// [`PopulationBuilder`][crate::PopulationBuilder] fills in real values.
    pub fn new(id: AgentId) -> Self {
        Self {
            id,
            position:                   Vec2::ZERO,
            velocity:                   Vec2::ZERO,
            status:                     HealthStatus::Healthy,
            age_group:                  AgeGroup::Adult,
            exposed_at:                 None,
            incubation_duration:        2_000.0,
            infectious_at:              None,
            infection_radius:           10.0,
            recovery_multiplier:        1.0,
            personal_recovery_duration: None,
            recovery_base:              None,
            immunity_expires_at:        None,
            infected_by:                None,
            transmission_count:         0,
            vaccinated:                 false,
        }
    }

    /// `true` if this agent was one of the `initial_infected_count` seeds.
    #[inline]
    pub fn is_index_case(&self, initial_infected_count: usize) -> bool {
        self.id.index() < initial_infected_count
    }

    /// Enter the infectious chain at `now` with `status`, deriving the
    /// personal recovery duration from `base_recovery_duration`.
    pub fn begin_infectious(&mut self, status: HealthStatus, now: SimTime, base_recovery_duration: f64) {
        self.status = status;
        self.infectious_at = Some(now);
        self.personal_recovery_duration = Some(base_recovery_duration * self.recovery_multiplier);
        self.recovery_base = Some(base_recovery_duration);
    }

    /// Pin the agent in place.
    #[inline]
    pub fn immobilize(&mut self) {
        self.velocity = Vec2::ZERO;
    }
}
