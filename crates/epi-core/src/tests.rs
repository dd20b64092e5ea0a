//! Unit tests for epi-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::Vec2;

    #[test]
    fn distance_3_4_5() {
        let a = Vec2::new(1.0, 1.0);
        let b = Vec2::new(4.0, 5.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn normalized_zero_is_none() {
        assert!(Vec2::ZERO.normalized().is_none());
        let n = Vec2::new(0.0, -3.0).normalized().unwrap();
        assert!((n.y + 1.0).abs() < 1e-12);
    }

    #[test]
    fn clamp_length_only_shrinks() {
        let v = Vec2::new(3.0, 4.0);
        assert!((v.clamp_length(1.0).length() - 1.0).abs() < 1e-12);
        assert_eq!(v.clamp_length(10.0), v);
    }

    #[test]
    fn arithmetic() {
        let mut v = Vec2::new(1.0, 2.0);
        v += Vec2::new(1.0, 1.0);
        assert_eq!(v, Vec2::new(2.0, 3.0));
        assert_eq!(v * 2.0, Vec2::new(4.0, 6.0));
        assert_eq!(-v, Vec2::new(-2.0, -3.0));
        assert_eq!(v - Vec2::new(2.0, 3.0), Vec2::ZERO);
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimTime};

    #[test]
    fn time_arithmetic() {
        let t = SimTime(1_000.0);
        assert_eq!(t + 500.0, SimTime(1_500.0));
        assert_eq!(SimTime(1_500.0).since(t), 500.0);
        assert_eq!(SimTime(1_500.0) - t, 500.0);
    }

    #[test]
    fn clock_advances_time_and_ticks() {
        let mut clock = SimClock::new();
        clock.advance(16.0);
        clock.advance(32.0);
        assert_eq!(clock.now, SimTime(48.0));
        assert_eq!(clock.tick, 2);
    }

    #[test]
    fn clock_ignores_negative_steps() {
        let mut clock = SimClock::new();
        clock.advance(100.0);
        clock.advance(-50.0);
        clock.advance(f64::NAN);
        assert_eq!(clock.now, SimTime(100.0));
        assert_eq!(clock.tick, 3);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.uniform(), r2.uniform());
        }
    }

    #[test]
    fn different_seeds_differ() {
        let a = SimRng::new(1).uniform();
        let b = SimRng::new(2).uniform();
        assert_ne!(a, b);
    }

    #[test]
    fn uniform_in_unit_interval() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.uniform();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn chance_extremes() {
        let mut rng = SimRng::new(0);
        for _ in 0..100 {
            assert!(!rng.chance(0.0));
            assert!(rng.chance(1.0));
        }
    }

    #[test]
    fn unit_vector_has_unit_length() {
        let mut rng = SimRng::new(5);
        for _ in 0..50 {
            assert!((rng.unit_vector().length() - 1.0).abs() < 1e-12);
        }
    }
}

#[cfg(test)]
mod status {
    use crate::{AgeGroup, HealthStatus};

    #[test]
    fn ordinals_match_all() {
        for (i, s) in HealthStatus::ALL.iter().enumerate() {
            assert_eq!(s.ordinal(), i);
        }
    }

    #[test]
    fn predicates() {
        assert!(HealthStatus::InfectiousAsymptomatic.is_infectious());
        assert!(!HealthStatus::Quarantined.is_infectious());
        assert!(HealthStatus::Quarantined.awaits_outcome());
        assert!(HealthStatus::Dead.is_immobile());
        assert!(!HealthStatus::Recovered.is_immobile());
        assert!(HealthStatus::Recovered.has_concluded());
        assert!(!HealthStatus::Exposed.has_concluded());
    }

    #[test]
    fn age_shares_sum_to_one() {
        let total: f64 = AgeGroup::SHARES.iter().sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert_eq!(AgeGroup::Senior.to_string(), "senior");
    }
}

#[cfg(test)]
mod config {
    use crate::{EpiError, EpidemicConfig};

    #[test]
    fn default_is_valid() {
        EpidemicConfig::default().validate().unwrap();
    }

    #[test]
    fn zero_population_rejected() {
        let cfg = EpidemicConfig { population_size: 0, ..Default::default() };
        assert!(matches!(
            cfg.validate(),
            Err(EpiError::InvalidConfig { field: "population_size", .. })
        ));
    }

    #[test]
    fn too_many_index_cases_rejected() {
        let cfg = EpidemicConfig {
            population_size: 5,
            initial_infected_count: 6,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn probability_out_of_range_rejected() {
        let cfg = EpidemicConfig { base_infection_probability: 1.5, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn reinit_only_for_population_shape() {
        let base = EpidemicConfig::default();
        let tweaked = EpidemicConfig { mask_enabled: true, base_recovery_duration: 1.0, ..base.clone() };
        assert!(!base.requires_reinitialization(&tweaked));

        let bigger = EpidemicConfig { population_size: 500, ..base.clone() };
        assert!(base.requires_reinitialization(&bigger));

        let seeded = EpidemicConfig { initial_infected_count: 10, ..base.clone() };
        assert!(base.requires_reinitialization(&seeded));
    }
}
