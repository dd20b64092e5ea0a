//! Reproduction-number estimators.
//!
//! Both estimators average `transmission_count` over agents whose episode
//! has concluded (`Recovered` or `Dead`).  Vaccinated agents never had an
//! episode and are skipped.  An empty sample yields `None`, never `NaN`.

use epi_agent::Agent;

use crate::StatusCounts;

/// R₀: mean secondary infections of the concluded index cases.
pub fn r0(agents: &[Agent], initial_infected_count: usize) -> Option<f64> {
    mean_transmissions(agents.iter().filter(|a| a.is_index_case(initial_infected_count)))
}

/// Rₜ: mean secondary infections over every concluded agent.
pub fn rt(agents: &[Agent]) -> Option<f64> {
    mean_transmissions(agents.iter())
}

fn mean_transmissions<'a>(agents: impl Iterator<Item = &'a Agent>) -> Option<f64> {
    let (n, sum) = agents
        .filter(|a| a.status.has_concluded() && !a.vaccinated)
        .fold((0_usize, 0_u64), |(n, sum), a| (n + 1, sum + u64::from(a.transmission_count)));
    (n > 0).then(|| sum as f64 / n as f64)
}

/// Everything derived from the population in one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TickStats {
    pub counts: StatusCounts,
    pub r0:     Option<f64>,
    pub rt:     Option<f64>,
}

impl TickStats {
    pub fn compute(agents: &[Agent], initial_infected_count: usize) -> Self {
        Self {
            counts: StatusCounts::tally(agents),
            r0:     r0(agents, initial_infected_count),
            rt:     rt(agents),
        }
    }
}
