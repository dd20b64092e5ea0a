//! Per-status population tallies.

use std::fmt;

use epi_agent::Agent;
use epi_core::HealthStatus;

/// Number of agents in each [`HealthStatus`], indexed by ordinal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusCounts {
    by_status: [usize; HealthStatus::ALL.len()],
}

impl StatusCounts {
    /// Count every agent in `agents`.
    #[cfg(not(feature = "parallel"))]
    pub fn tally(agents: &[Agent]) -> Self {
        let mut counts = Self::default();
        for agent in agents {
            counts.record(agent.status);
        }
        counts
    }

    /// Count every agent in `agents`.
    #[cfg(feature = "parallel")]
    pub fn tally(agents: &[Agent]) -> Self {
        use rayon::prelude::*;

        agents
            .par_iter()
            .fold(Self::default, |mut counts, agent| {
                counts.record(agent.status);
                counts
            })
            .reduce(Self::default, Self::merged)
    }

    #[inline]
    pub fn record(&mut self, status: HealthStatus) {
        self.by_status[status.ordinal()] += 1;
    }

    /// Element-wise sum of two tallies.
    pub fn merged(mut self, other: Self) -> Self {
        for (mine, theirs) in self.by_status.iter_mut().zip(other.by_status) {
            *mine += theirs;
        }
        self
    }

    #[inline]
    pub fn get(&self, status: HealthStatus) -> usize {
        self.by_status[status.ordinal()]
    }

    /// Symptomatic plus quarantined: the cases a health system would see.
    #[inline]
    pub fn active_cases(&self) -> usize {
        self.get(HealthStatus::InfectiousSymptomatic) + self.get(HealthStatus::Quarantined)
    }

    /// Agents able to transmit right now.
    #[inline]
    pub fn infectious(&self) -> usize {
        self.get(HealthStatus::InfectiousSymptomatic) + self.get(HealthStatus::InfectiousAsymptomatic)
    }

    /// Sum over all statuses; equals the population size.
    #[inline]
    pub fn total(&self) -> usize {
        self.by_status.iter().sum()
    }

    /// `(status, count)` pairs in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (HealthStatus, usize)> + '_ {
        HealthStatus::ALL.iter().map(|&s| (s, self.get(s)))
    }
}

impl fmt::Display for StatusCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (status, n) in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{status}={n}")?;
            first = false;
        }
        Ok(())
    }
}
