use flock_core::{
    BoidId, LeaderMode, LeadershipMode, SimConfig, Tick, Vec2,
};
use flock_steer::{BoidState, Role};

use crate::rotation::RotationEvent;
use crate::{NoopObserver, SimBuilder, SimError, SimObserver};

/// Small population, fast rotation — keeps multi-tick tests cheap.
fn test_cfg() -> SimConfig {
    SimConfig {
        population:   12,
        leader_count: 1,
        leadership:   LeadershipMode::Rotating { interval: 10 },
        seed:         0xBEEF,
        ..SimConfig::default()
    }
}

#[derive(Default)]
struct Recorder {
    ticks:     Vec<Tick>,
    rotations: Vec<RotationEvent>,
}

impl SimObserver for Recorder {
    fn on_tick_end(&mut self, tick: Tick, _boids: &[BoidState]) {
        self.ticks.push(tick);
    }

    fn on_rotation(&mut self, event: &RotationEvent) {
        self.rotations.push(event.clone());
    }
}

mod builder {
    use super::*;

    #[test]
    fn rejects_invalid_config() {
        let cfg = SimConfig { leader_count: 0, ..test_cfg() };
        assert!(matches!(SimBuilder::new(cfg).build(), Err(SimError::Config(_))));
    }

    #[test]
    fn rejects_position_count_mismatch() {
        let result = SimBuilder::new(test_cfg())
            .initial_positions(vec![Vec2::new(100.0, 100.0); 5])
            .build();
        assert!(matches!(result, Err(SimError::CountMismatch { what: "initial positions", .. })));
    }

    #[test]
    fn rejects_bad_leader_sets() {
        let result = SimBuilder::new(test_cfg())
            .initial_leaders(vec![BoidId(3), BoidId(7)])
            .build();
        assert!(matches!(result, Err(SimError::CountMismatch { what: "initial leaders", .. })));

        let cfg = SimConfig { leader_count: 2, ..test_cfg() };
        let result = SimBuilder::new(cfg.clone())
            .initial_leaders(vec![BoidId(3), BoidId(3)])
            .build();
        assert!(matches!(result, Err(SimError::BadLeader(_))));

        let result = SimBuilder::new(cfg)
            .initial_leaders(vec![BoidId(3), BoidId(99)])
            .build();
        assert!(matches!(result, Err(SimError::BadLeader(_))));
    }

    #[test]
    fn default_leaders_are_the_first_ids() {
        let cfg = SimConfig { leader_count: 3, ..test_cfg() };
        let sim = SimBuilder::new(cfg).build().unwrap();
        assert_eq!(sim.leaders(), &[BoidId(0), BoidId(1), BoidId(2)]);
        for &id in sim.leaders() {
            assert_eq!(sim.boids()[id.index()].role, Role::Leader);
        }
    }

    #[test]
    fn followers_get_the_lowest_slots_first() {
        let sim = SimBuilder::new(test_cfg()).build().unwrap();
        let slots: Vec<u16> = sim
            .boids()
            .iter()
            .filter_map(|b| match b.role {
                Role::Follower { slot } => Some(slot.0),
                Role::Leader => None,
            })
            .collect();
        // 11 followers over 4 slots: round-robin occupancy 3/3/3/2.
        assert_eq!(&slots[..4], &[0, 1, 2, 3]);
        for slot in 0..4u16 {
            let count = slots.iter().filter(|&&s| s == slot).count();
            assert!((2..=3).contains(&count));
        }
    }

    #[test]
    fn supplied_positions_are_clamped_into_the_interior() {
        let cfg = test_cfg();
        let positions = vec![Vec2::new(-500.0, 5000.0); cfg.population];
        let sim = SimBuilder::new(cfg).initial_positions(positions).build().unwrap();
        for boid in sim.boids() {
            assert!(sim.config().bounds.contains(boid.position));
        }
    }
}

mod tick_loop {
    use super::*;

    #[test]
    fn same_seed_same_run() {
        let mut a = SimBuilder::new(test_cfg()).build().unwrap();
        let mut b = SimBuilder::new(test_cfg()).build().unwrap();
        a.run_ticks(100, &mut NoopObserver);
        b.run_ticks(100, &mut NoopObserver);
        assert_eq!(a.boids(), b.boids());
        assert_eq!(a.leaders(), b.leaders());
        assert_eq!(a.tick(), Tick::new(100));
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SimBuilder::new(test_cfg()).build().unwrap();
        let mut b = SimBuilder::new(SimConfig { seed: 7, ..test_cfg() }).build().unwrap();
        a.run_ticks(20, &mut NoopObserver);
        b.run_ticks(20, &mut NoopObserver);
        assert_ne!(a.boids(), b.boids());
    }

    #[test]
    fn containment_and_speed_caps_hold_over_time() {
        let cfg = test_cfg();
        let mut sim = SimBuilder::new(cfg.clone()).build().unwrap();
        for _ in 0..500 {
            sim.step(None, &mut NoopObserver);
            for boid in sim.boids() {
                assert!(cfg.bounds.contains(boid.position), "escaped at {}", sim.tick());
                let cap = match boid.role {
                    Role::Leader => cfg.leader_speed,
                    Role::Follower { .. } => cfg.max_follower_speed,
                };
                assert!(boid.velocity.length() <= cap + 1.0e-3);
                assert!(boid.heading.is_finite());
            }
        }
    }

    #[test]
    fn observer_sees_every_tick() {
        let mut sim = SimBuilder::new(test_cfg()).build().unwrap();
        let mut recorder = Recorder::default();
        sim.run_ticks(25, &mut recorder);
        assert_eq!(recorder.ticks.len(), 25);
        assert_eq!(recorder.ticks[0], Tick::new(1));
        assert_eq!(recorder.ticks[24], Tick::new(25));
    }
}

mod rotation {
    use super::*;

    #[test]
    fn fires_on_interval_multiples_only() {
        let mut sim = SimBuilder::new(test_cfg()).build().unwrap();
        let mut recorder = Recorder::default();
        sim.run_ticks(35, &mut recorder);

        let at: Vec<u64> = recorder.rotations.iter().map(|e| e.tick.0).collect();
        assert_eq!(at, vec![10, 20, 30]);
    }

    #[test]
    fn fixed_leadership_never_rotates() {
        let cfg = SimConfig { leadership: LeadershipMode::Fixed, ..test_cfg() };
        let mut sim = SimBuilder::new(cfg).build().unwrap();
        let mut recorder = Recorder::default();
        sim.run_ticks(50, &mut recorder);
        assert!(recorder.rotations.is_empty());
        assert_eq!(sim.leaders(), &[BoidId(0)]);
    }

    #[test]
    fn swap_is_complete_and_atomic() {
        let cfg = SimConfig { leader_count: 3, population: 20, ..test_cfg() };
        let mut sim = SimBuilder::new(cfg.clone()).build().unwrap();
        let mut recorder = Recorder::default();
        sim.run_ticks(10, &mut recorder);

        let event = &recorder.rotations[0];
        assert_eq!(event.demoted.len(), 3);
        assert_eq!(event.promoted.len(), 3);
        // The old and new leader sets are disjoint: every leader stepped down.
        for id in &event.promoted {
            assert!(!event.demoted.contains(id));
        }

        // Snapshot roles agree with the event.
        assert_eq!(sim.leaders(), event.promoted.as_slice());
        let leader_count = sim.boids().iter().filter(|b| b.role.is_leader()).count();
        assert_eq!(leader_count, 3);
        for &id in &event.demoted {
            assert!(matches!(sim.boids()[id.index()].role, Role::Follower { .. }));
        }
    }

    #[test]
    fn bystander_followers_keep_their_slots() {
        let mut sim = SimBuilder::new(test_cfg()).build().unwrap();
        sim.run_ticks(9, &mut NoopObserver);
        let before: Vec<Role> = sim.boids().iter().map(|b| b.role).collect();

        let mut recorder = Recorder::default();
        sim.step(None, &mut recorder);
        let event = &recorder.rotations[0];

        for (i, boid) in sim.boids().iter().enumerate() {
            let id = BoidId(i as u32);
            if event.demoted.contains(&id) || event.promoted.contains(&id) {
                continue;
            }
            // A slot belongs to the boid, not to a position in some list:
            // untouched followers must hold exactly the slot they had.
            assert_eq!(boid.role, before[i]);
        }
    }

    #[test]
    fn shortfall_promotes_what_exists_and_recovers() {
        // Two leaders over a population of three: the first rotation finds
        // only one follower to promote.
        let cfg = SimConfig { population: 3, leader_count: 2, ..test_cfg() };
        let mut sim = SimBuilder::new(cfg).build().unwrap();
        let mut recorder = Recorder::default();
        sim.run_ticks(10, &mut recorder);

        let event = &recorder.rotations[0];
        assert_eq!(event.demoted.len(), 2);
        assert_eq!(event.promoted, vec![BoidId(2)]);
        assert_eq!(sim.leaders(), &[BoidId(2)]);

        // The sim keeps ticking, and the next rotation sees two followers
        // again, restoring the configured leader count.
        sim.run_ticks(10, &mut recorder);
        assert_eq!(sim.tick(), Tick::new(20));
        assert_eq!(recorder.rotations[1].promoted.len(), 2);
        assert_eq!(sim.leaders(), &[BoidId(0), BoidId(1)]);
        let leader_count = sim.boids().iter().filter(|b| b.role.is_leader()).count();
        assert_eq!(leader_count, 2);
    }

    #[test]
    fn rotation_preserves_population_and_kinematics() {
        let mut sim = SimBuilder::new(test_cfg()).build().unwrap();
        sim.run_ticks(9, &mut NoopObserver);
        let positions: Vec<Vec2> = sim.boids().iter().map(|b| b.position).collect();

        sim.step(None, &mut NoopObserver);
        // The swap changes roles, never teleports anyone: positions moved by
        // at most one tick of travel.
        for (boid, old) in sim.boids().iter().zip(&positions) {
            assert!(boid.position.distance(*old) <= sim.config().max_follower_speed.max(sim.config().leader_speed) + 1.0e-3);
        }
        assert_eq!(sim.boids().len(), 12);
    }
}

mod pointer {
    use super::*;

    #[test]
    fn leader_homes_in_on_the_pointer() {
        let cfg = SimConfig {
            population: 5,
            ..SimConfig::pointer_follow()
        };
        let start = Vec2::new(100.0, 300.0);
        let target = Vec2::new(700.0, 300.0);
        let mut sim = SimBuilder::new(cfg.clone())
            .initial_positions(vec![start; 5])
            .build()
            .unwrap();

        for _ in 0..300 {
            sim.step(Some(target), &mut NoopObserver);
        }
        let leader = &sim.boids()[0];
        // The leader snaps its bearing to the pointer every tick, so it
        // ends up jittering within one tick of travel of the target.
        assert!(leader.position.distance(target) < 150.0);
    }

    #[test]
    fn missing_pointer_is_not_an_error() {
        let cfg = SimConfig { population: 5, ..SimConfig::pointer_follow() };
        let mut sim = SimBuilder::new(cfg.clone()).build().unwrap();
        sim.run_ticks(50, &mut NoopObserver);
        for boid in sim.boids() {
            assert!(cfg.bounds.contains(boid.position));
        }
    }
}

mod multi_leader {
    use super::*;

    #[test]
    fn followers_track_their_nearest_leader() {
        let cfg = SimConfig {
            population:   3,
            leader_count: 2,
            leadership:   LeadershipMode::Fixed,
            leader_mode:  LeaderMode::AutonomousWander { perturb_interval: 10_000, perturb_max: 0.0 },
            neighbor_force: 0.0,
            ..SimConfig::default()
        };
        // Leaders parked far apart; the lone follower sits near leader 1.
        let positions = vec![
            Vec2::new(100.0, 100.0),
            Vec2::new(1000.0, 500.0),
            Vec2::new(950.0, 500.0),
        ];
        let mut sim = SimBuilder::new(cfg)
            .initial_positions(positions)
            .initial_leaders(vec![BoidId(0), BoidId(1)])
            .build()
            .unwrap();

        sim.run_ticks(100, &mut NoopObserver);
        let near = sim.boids()[2].position.distance(sim.boids()[1].position);
        let far = sim.boids()[2].position.distance(sim.boids()[0].position);

        // The follower stays in leader 1's neighborhood rather than being
        // pulled toward the distant leader 0.
        assert!(near < far);
    }
}
