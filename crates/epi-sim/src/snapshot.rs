//! Read-only view of a simulation between ticks.

use epi_agent::Agent;
use epi_core::{HealthStatus, SimTime};
use epi_stats::StatusCounts;

/// Everything a renderer or recorder needs after a tick.
///
/// Borrowed from the [`Sim`][crate::Sim]; take what you need before the next
/// `advance`.
#[derive(Copy, Clone, Debug)]
pub struct Snapshot<'a> {
    /// Simulated time.
    pub clock: SimTime,
    /// Completed ticks.
    pub tick: u64,
    /// The whole population in id order.
    pub agents: &'a [Agent],
    pub counts: StatusCounts,
    /// Mean transmissions of concluded index cases.
    pub r0: Option<f64>,
    /// Mean transmissions of every concluded agent.
    pub rt: Option<f64>,
}

impl Snapshot<'_> {
    #[inline]
    pub fn population(&self) -> usize {
        self.agents.len()
    }

    /// `true` once nothing can change status any more without the
    /// extensions: nobody is exposed or awaiting an outcome.
    pub fn is_settled(&self) -> bool {
        self.agents
            .iter()
            .all(|a| a.status != HealthStatus::Exposed && !a.status.awaits_outcome())
    }
}
