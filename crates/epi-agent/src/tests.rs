//! Unit tests for epi-agent.

#[cfg(test)]
mod agent {
    use epi_core::{AgentId, HealthStatus, SimTime, Vec2};

    use crate::Agent;

    #[test]
    fn new_agent_is_healthy_and_unassigned() {
        let a = Agent::new(AgentId(3));
        assert_eq!(a.status, HealthStatus::Healthy);
        assert!(a.personal_recovery_duration.is_none());
        assert!(a.infected_by.is_none());
        assert_eq!(a.transmission_count, 0);
    }

    #[test]
    fn begin_infectious_derives_personal_duration() {
        let mut a = Agent::new(AgentId(0));
        a.recovery_multiplier = 1.1;
        a.begin_infectious(HealthStatus::InfectiousAsymptomatic, SimTime(250.0), 4_000.0);
        assert_eq!(a.status, HealthStatus::InfectiousAsymptomatic);
        assert_eq!(a.infectious_at, Some(SimTime(250.0)));
        assert!((a.personal_recovery_duration.unwrap() - 4_400.0).abs() < 1e-9);
        assert_eq!(a.recovery_base, Some(4_000.0));
    }

    #[test]
    fn index_case_membership() {
        assert!(Agent::new(AgentId(2)).is_index_case(3));
        assert!(!Agent::new(AgentId(3)).is_index_case(3));
    }

    #[test]
    fn immobilize_zeroes_velocity_only() {
        let mut a = Agent::new(AgentId(0));
        a.position = Vec2::new(10.0, 20.0);
        a.velocity = Vec2::new(1.0, -1.0);
        a.immobilize();
        assert!(a.velocity.is_zero());
        assert_eq!(a.position, Vec2::new(10.0, 20.0));
    }
}

#[cfg(test)]
mod builder {
    use epi_core::{AgeGroup, Arena, HealthStatus, SimRng, SimTime};

    use crate::{INCUBATION_RANGE, INFECTION_RADIUS_RANGE, PopulationBuilder, RECOVERY_MULTIPLIER_RANGE};

    #[test]
    fn correct_count_and_ids() {
        let store = PopulationBuilder::new(50).build(&mut SimRng::new(1));
        assert_eq!(store.len(), 50);
        for (i, a) in store.iter().enumerate() {
            assert_eq!(a.id.index(), i);
        }
    }

    #[test]
    fn zero_agents() {
        let store = PopulationBuilder::new(0).index_cases(3).build(&mut SimRng::new(0));
        assert!(store.is_empty());
    }

    #[test]
    fn index_cases_seeded_first() {
        let store = PopulationBuilder::new(10)
            .index_cases(2)
            .base_recovery_duration(1_000.0)
            .build(&mut SimRng::new(7));
        for a in store.iter() {
            if a.id.index() < 2 {
                assert_eq!(a.status, HealthStatus::InfectiousSymptomatic);
                assert_eq!(a.infectious_at, Some(SimTime::ZERO));
                assert_eq!(a.recovery_base, Some(1_000.0));
                assert!(a.infected_by.is_none());
            } else {
                assert_eq!(a.status, HealthStatus::Healthy);
                assert!(a.infectious_at.is_none());
            }
        }
    }

    #[test]
    fn index_cases_clamped_to_population() {
        let store = PopulationBuilder::new(3).index_cases(10).build(&mut SimRng::new(0));
        assert_eq!(store.count_status(HealthStatus::InfectiousSymptomatic), 3);
    }

    #[test]
    fn draws_within_ranges() {
        let arena = Arena { width: 200.0, height: 100.0, margin: 5.0 };
        let store = PopulationBuilder::new(500)
            .arena(arena)
            .mobility_factor(1.0)
            .build(&mut SimRng::new(11));
        for a in store.iter() {
            assert!(INCUBATION_RANGE.contains(&a.incubation_duration));
            assert!(INFECTION_RADIUS_RANGE.contains(&a.infection_radius));
            assert!(RECOVERY_MULTIPLIER_RANGE.contains(&a.recovery_multiplier));
            assert!((arena.min_x()..=arena.max_x()).contains(&a.position.x));
            assert!((arena.min_y()..=arena.max_y()).contains(&a.position.y));
            assert!(a.velocity.length() <= 2.0 + 1e-9);
        }
    }

    #[test]
    fn every_age_group_appears() {
        let store = PopulationBuilder::new(400).build(&mut SimRng::new(5));
        for group in AgeGroup::ALL {
            assert!(store.iter().any(|a| a.age_group == group), "{group} missing");
        }
    }

    #[test]
    fn age_groups_follow_shares() {
        let store = PopulationBuilder::new(10_000).build(&mut SimRng::new(9));
        let share = |g: AgeGroup| store.iter().filter(|a| a.age_group == g).count();
        assert!((2_200..2_800).contains(&share(AgeGroup::Child)));
        assert!((5_100..5_900).contains(&share(AgeGroup::Adult)));
        assert!((1_700..2_300).contains(&share(AgeGroup::Senior)));
    }

    #[test]
    fn same_seed_same_population() {
        let a = PopulationBuilder::new(20).index_cases(1).build(&mut SimRng::new(99));
        let b = PopulationBuilder::new(20).index_cases(1).build(&mut SimRng::new(99));
        assert_eq!(a.agents, b.agents);
    }
}

#[cfg(test)]
mod store {
    use epi_core::{AgentId, SimRng};

    use crate::PopulationBuilder;

    #[test]
    fn agent_ids_iterator() {
        let store = PopulationBuilder::new(4).build(&mut SimRng::new(0));
        let ids: Vec<AgentId> = store.agent_ids().collect();
        assert_eq!(ids, vec![AgentId(0), AgentId(1), AgentId(2), AgentId(3)]);
    }

    #[test]
    fn pair_mut_returns_argument_order() {
        let mut store = PopulationBuilder::new(5).build(&mut SimRng::new(0));
        let (a, b) = store.pair_mut(AgentId(3), AgentId(1)).unwrap();
        assert_eq!(a.id, AgentId(3));
        assert_eq!(b.id, AgentId(1));
        a.transmission_count = 2;
        b.transmission_count = 5;
        assert_eq!(store.get(AgentId(3)).unwrap().transmission_count, 2);
        assert_eq!(store.get(AgentId(1)).unwrap().transmission_count, 5);
    }

    #[test]
    fn pair_mut_rejects_same_or_out_of_range() {
        let mut store = PopulationBuilder::new(2).build(&mut SimRng::new(0));
        assert!(store.pair_mut(AgentId(1), AgentId(1)).is_none());
        assert!(store.pair_mut(AgentId(0), AgentId(9)).is_none());
    }
}
