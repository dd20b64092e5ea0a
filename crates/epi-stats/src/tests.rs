//! Unit tests for epi-stats.

use epi_agent::Agent;
use epi_core::{AgentId, HealthStatus};

/// One agent per `(status, transmission_count)` pair, ids in order.
fn population(spec: &[(HealthStatus, u32)]) -> Vec<Agent> {
    spec.iter()
        .enumerate()
        .map(|(i, &(status, count))| {
            let mut a = Agent::new(AgentId(i as u32));
            a.status = status;
            a.transmission_count = count;
            a
        })
        .collect()
}

#[cfg(test)]
mod counts {
    use super::*;
    use crate::StatusCounts;

    #[test]
    fn tally_matches_statuses() {
        use HealthStatus::*;
        let agents = population(&[
            (Healthy, 0),
            (Healthy, 0),
            (Exposed, 0),
            (InfectiousSymptomatic, 0),
            (InfectiousAsymptomatic, 0),
            (Quarantined, 0),
            (Quarantined, 0),
            (Recovered, 0),
            (Dead, 0),
        ]);
        let c = StatusCounts::tally(&agents);
        assert_eq!(c.get(Healthy), 2);
        assert_eq!(c.get(Quarantined), 2);
        assert_eq!(c.active_cases(), 3);
        assert_eq!(c.infectious(), 2);
        assert_eq!(c.total(), agents.len());
    }

    #[test]
    fn empty_population() {
        let c = StatusCounts::tally(&[]);
        assert_eq!(c.total(), 0);
        assert_eq!(c, StatusCounts::default());
    }

    #[test]
    fn merge_is_elementwise() {
        let mut a = StatusCounts::default();
        a.record(HealthStatus::Dead);
        let mut b = StatusCounts::default();
        b.record(HealthStatus::Dead);
        b.record(HealthStatus::Exposed);
        let m = a.merged(b);
        assert_eq!(m.get(HealthStatus::Dead), 2);
        assert_eq!(m.get(HealthStatus::Exposed), 1);
        assert_eq!(m.total(), 3);
    }

    #[test]
    fn display_lists_every_status() {
        let c = StatusCounts::tally(&population(&[(HealthStatus::Recovered, 0)]));
        let s = c.to_string();
        assert!(s.starts_with("healthy=0 "));
        assert!(s.contains("recovered=1"));
        assert_eq!(s.split(' ').count(), HealthStatus::ALL.len());
    }
}

#[cfg(test)]
mod reproduction {
    use super::*;
    use crate::{TickStats, r0, rt};

    #[test]
    fn absent_until_someone_concludes() {
        use HealthStatus::*;
        let agents = population(&[(InfectiousSymptomatic, 4), (Quarantined, 2), (Healthy, 0)]);
        assert_eq!(r0(&agents, 2), None);
        assert_eq!(rt(&agents), None);
    }

    #[test]
    fn r0_averages_concluded_index_cases() {
        use HealthStatus::*;
        let agents = population(&[
            (Recovered, 3),
            (Dead, 1),
            (InfectiousSymptomatic, 9), // index case, not concluded
            (Recovered, 7),             // not an index case
        ]);
        assert_eq!(r0(&agents, 3), Some(2.0));
        assert_eq!(rt(&agents), Some(11.0 / 3.0));
    }

    #[test]
    fn vaccinated_excluded() {
        use HealthStatus::*;
        let mut agents = population(&[(Recovered, 2), (Recovered, 0)]);
        agents[1].vaccinated = true;
        assert_eq!(rt(&agents), Some(2.0));
        assert_eq!(r0(&agents, 2), Some(2.0));
    }

    #[test]
    fn compute_bundles_everything() {
        use HealthStatus::*;
        let agents = population(&[(Dead, 1), (Healthy, 0)]);
        let s = TickStats::compute(&agents, 1);
        assert_eq!(s.counts.total(), 2);
        assert_eq!(s.r0, Some(1.0));
        assert_eq!(s.rt, Some(1.0));
    }
}
