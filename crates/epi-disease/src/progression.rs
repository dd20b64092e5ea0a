//! The per-agent epidemic state machine.
//!
//! | From                                    | To                              | When                                         |
//! |-----------------------------------------|---------------------------------|----------------------------------------------|
//! | `Exposed`                               | `InfectiousSymptomatic`/`…Asym` | `now − exposed_at > incubation_duration`     |
//! | `InfectiousSymptomatic`                 | `Quarantined`                   | `now − infectious_at > quarantine_delay`     |
//! | `InfectiousSymptomatic`/`…Asym`/`Quar.` | `Recovered`/`Dead`              | `now − infectious_at > personal duration`    |
//! | `Healthy` (vaccination extension)       | `Recovered`                     | one draw at `vaccination_rate × dt / 1000`   |
//! | `Recovered` (waning extension)          | `Healthy`                       | `now > immunity_expires_at`                  |
//!
//! `Healthy → Exposed` belongs to the transmission sampler.  Rows are
//! checked top to bottom and the first that fires ends the agent's tick.

use epi_agent::Agent;
use epi_core::{AgentId, HealthStatus, SimRng};

use crate::{DiseaseContext, outcome::resolve_outcome};

/// Share of newly infectious agents that never develop symptoms.
pub const ASYMPTOMATIC_SHARE: f64 = 0.4;

/// Base recovery duration assumed for agents that never recorded one.
pub const ASSUMED_BASE_RECOVERY_DURATION: f64 = 5_000.0;

/// A status change applied by [`progress`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub agent: AgentId,
    pub from:  HealthStatus,
    pub to:    HealthStatus,
}

/// Apply at most one transition to `agent` for the tick described by `ctx`.
///
/// Returns the transition taken, if any.  Randomness is consumed only when a
/// branch fires (the symptomatic split, the outcome draw) or when the
/// vaccination extension is enabled for a healthy agent.
pub fn progress(agent: &mut Agent, ctx: &DiseaseContext<'_>, rng: &mut SimRng) -> Option<Transition> {
    let from = agent.status;
    let fired = match from {
        HealthStatus::Healthy => try_vaccinate(agent, ctx, rng),
        HealthStatus::Exposed => try_become_infectious(agent, ctx, rng),
        HealthStatus::InfectiousSymptomatic => try_quarantine(agent, ctx) || try_conclude(agent, ctx, rng),
        HealthStatus::InfectiousAsymptomatic | HealthStatus::Quarantined => try_conclude(agent, ctx, rng),
        HealthStatus::Recovered => try_wane(agent, ctx),
        HealthStatus::Dead => false,
    };
    fired.then(|| Transition { agent: agent.id, from, to: agent.status })
}

fn try_vaccinate(agent: &mut Agent, ctx: &DiseaseContext<'_>, rng: &mut SimRng) -> bool {
    if !ctx.config.extensions.vaccination {
        return false;
    }
    let p = (ctx.config.vaccination_rate * ctx.dt_millis / 1_000.0).clamp(0.0, 1.0);
    if !rng.chance(p) {
        return false;
    }
    agent.status = HealthStatus::Recovered;
    agent.vaccinated = true;
    agent.immunity_expires_at = Some(ctx.now + ctx.config.immunity_duration);
    true
}

fn try_become_infectious(agent: &mut Agent, ctx: &DiseaseContext<'_>, rng: &mut SimRng) -> bool {
    let Some(exposed_at) = agent.exposed_at else { return false };
    if ctx.now.since(exposed_at) <= agent.incubation_duration {
        return false;
    }
    let status = if rng.chance(ASYMPTOMATIC_SHARE) {
        HealthStatus::InfectiousAsymptomatic
    } else {
        HealthStatus::InfectiousSymptomatic
    };
    agent.begin_infectious(status, ctx.now, ctx.config.base_recovery_duration);
    true
}

fn try_quarantine(agent: &mut Agent, ctx: &DiseaseContext<'_>) -> bool {
    let Some(infectious_at) = agent.infectious_at else { return false };
    if ctx.now.since(infectious_at) <= ctx.config.quarantine_delay {
        return false;
    }
    agent.status = HealthStatus::Quarantined;
    agent.immobilize();
    true
}

fn try_conclude(agent: &mut Agent, ctx: &DiseaseContext<'_>, rng: &mut SimRng) -> bool {
    let Some(infectious_at) = agent.infectious_at else { return false };
    let duration = agent
        .personal_recovery_duration
        .unwrap_or(ctx.config.base_recovery_duration * agent.recovery_multiplier);
    if ctx.now.since(infectious_at) <= duration {
        return false;
    }
    resolve_outcome(agent, ctx.now, ctx.config.immunity_duration, ctx.over_capacity, rng);
    true
}

fn try_wane(agent: &mut Agent, ctx: &DiseaseContext<'_>) -> bool {
    if !ctx.config.extensions.immunity_waning {
        return false;
    }
    match agent.immunity_expires_at {
        Some(expires) if ctx.now > expires => {}
        _ => return false,
    }
    agent.status = HealthStatus::Healthy;
    agent.exposed_at = None;
    agent.infectious_at = None;
    agent.personal_recovery_duration = None;
    agent.recovery_base = None;
    agent.immunity_expires_at = None;
    agent.vaccinated = false;
    true
}

// ── Rescaling ─────────────────────────────────────────────────────────────────

/// Re-derive `agent`'s personal recovery duration for `new_base`, keeping its
/// individual multiplier.
///
/// Dead agents and agents never assigned a personal duration are untouched,
/// as is any agent whose recorded base already equals `new_base`.  Returns
/// `true` if the agent changed.
pub fn rescale_recovery_duration(agent: &mut Agent, new_base: f64) -> bool {
    if agent.status == HealthStatus::Dead {
        return false;
    }
    let Some(personal) = agent.personal_recovery_duration else { return false };
    let previous = agent.recovery_base.unwrap_or(ASSUMED_BASE_RECOVERY_DURATION);
    if previous == new_base {
        return false;
    }
    // A zero base leaves nothing to divide by; fall back to the drawn factor.
    let multiplier = if previous > 0.0 { personal / previous } else { agent.recovery_multiplier };
    agent.personal_recovery_duration = Some(new_base * multiplier);
    agent.recovery_base = Some(new_base);
    true
}
