//! Transmission sampler: infection across a contact.

use epi_agent::{Agent, AgentStore};
use epi_core::{AgentId, HealthStatus, SimRng, SimTime};

use crate::DiseaseContext;

/// Probability factor applied while masks are enabled.
pub const MASK_FACTOR: f64 = 0.5;

/// Probability factor applied when the source shows no symptoms.
pub const ASYMPTOMATIC_FACTOR: f64 = 0.5;

/// One successful transmission, in the order it happened.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransmissionEvent {
    pub from: AgentId,
    pub to:   AgentId,
    pub at:   SimTime,
}

/// Per-contact probability that an infectious `source_status` infects a
/// healthy target.
#[inline]
pub fn transmission_probability(base: f64, mask_enabled: bool, source_status: HealthStatus) -> f64 {
    let mut p = base;
    if mask_enabled {
        p *= MASK_FACTOR;
    }
    if source_status == HealthStatus::InfectiousAsymptomatic {
        p *= ASYMPTOMATIC_FACTOR;
    }
    p
}

/// Attempt transmission from `source` to `target`.
///
/// Draws once, and only if `source` is infectious and `target` healthy.
/// Quarantined agents fail both tests.
pub fn attempt_transmission(
    source: &mut Agent,
    target: &mut Agent,
    ctx:    &DiseaseContext<'_>,
    rng:    &mut SimRng,
) -> Option<TransmissionEvent> {
    if !source.status.is_infectious() || target.status != HealthStatus::Healthy {
        return None;
    }
    let p = transmission_probability(ctx.config.base_infection_probability, ctx.config.mask_enabled, source.status);
    if !rng.chance(p) {
        return None;
    }

    target.status = HealthStatus::Exposed;
    target.exposed_at = Some(ctx.now);
    if target.infected_by.is_none() {
        target.infected_by = Some(source.id);
    }
    source.transmission_count += 1;

    Some(TransmissionEvent { from: source.id, to: target.id, at: ctx.now })
}

/// Attempt `first → second`, then `second → first`, appending successes to
/// `events`.
///
/// A successful first direction leaves `second` exposed (not infectious), so
/// the reverse direction cannot also fire.  Unknown or equal ids are
/// ignored.
pub fn transmit_pair(
    store:  &mut AgentStore,
    first:  AgentId,
    second: AgentId,
    ctx:    &DiseaseContext<'_>,
    rng:    &mut SimRng,
    events: &mut Vec<TransmissionEvent>,
) {
    let Some((a, b)) = store.pair_mut(first, second) else { return };
    events.extend(attempt_transmission(a, b, ctx, rng));
    events.extend(attempt_transmission(b, a, ctx, rng));
}
