//! The full per-boid steering pipelines.
//!
//! [`SteeringEngine`] is read-only during a tick: every method takes the
//! previous tick's snapshot and returns a [`Steering`] intent without
//! touching shared state, so follower steering may run across threads.
//!
//! # Follower pipeline
//!
//! 1. Slot anchor on the assigned leader's formation ring.
//! 2. Heading turns toward the anchor, limited to `turn_rate` per tick.
//! 3. Desired speed `kp·d_anchor + k_leader·d_leader`, capped at
//!    `max_follower_speed` — far-from-formation boids hurry, settled ones
//!    creep.
//! 4. Separation and obstacle repulsion added to the velocity.
//! 5. Final magnitude clamp, then integration with the follower boundary
//!    mode.
//!
//! # Leader pipeline
//!
//! Heading comes from the configured [`LeaderMode`] (the bearing to the
//! pointer, or a periodic random perturbation); velocity is the heading at
//! `leader_speed`,
//! integrated with the leader boundary mode.  A bounce realigns the heading
//! with the reflected velocity.  Leaders carry no avoidance terms — the
//! formation routes around obstacles through its followers.

use flock_core::{
    BoidId, BoidRng, EPSILON, LeaderMode, SimConfig, Tick, Vec2, turn_toward, wrap_signed,
};
use flock_spatial::{NeighborIndex, ObstacleField};

use crate::avoidance::{obstacle_repulsion, separation};
use crate::boundary::integrate;
use crate::formation::slot_target;
use crate::state::{BoidState, Role};

/// One boid's steering intent: the state it will hold after the atomic
/// apply, minus its (unchanged) role.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Steering {
    pub position: Vec2,
    pub heading:  f32,
    pub velocity: Vec2,
}

/// Stateless-per-tick steering evaluator.  Built once from the validated
/// config; holds the obstacle index since obstacles never move.
pub struct SteeringEngine {
    cfg:       SimConfig,
    obstacles: ObstacleField,
}

impl SteeringEngine {
    pub fn new(cfg: &SimConfig) -> Self {
        Self {
            obstacles: ObstacleField::new(&cfg.obstacles),
            cfg:       cfg.clone(),
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.cfg
    }

    pub fn obstacles(&self) -> &ObstacleField {
        &self.obstacles
    }

    /// Summed fixed-magnitude push away from every obstacle in trigger range.
    fn obstacle_push(&self, origin: Vec2) -> Vec2 {
        if self.obstacles.is_empty() {
            return Vec2::ZERO;
        }
        let mut centers = Vec::new();
        self.obstacles
            .for_each_within(origin, self.cfg.obstacle_avoidance_distance, &mut |_, center| {
                centers.push(center);
            });
        obstacle_repulsion(origin, centers.into_iter(), self.cfg.obstacle_avoidance_force)
    }

    /// Steer one follower toward its slot on `leader`'s formation ring.
    ///
    /// `positions` is the full position snapshot (indexed by [`BoidId`]) the
    /// neighbor `index` was rebuilt from this tick.
    pub fn steer_follower<I>(
        &self,
        id: BoidId,
        boid: &BoidState,
        leader: Vec2,
        index: &I,
        positions: &[Vec2],
    ) -> Steering
    where
        I: NeighborIndex + ?Sized,
    {
        let slot = match boid.role {
            Role::Follower { slot } => slot,
            Role::Leader => {
                debug_assert!(false, "steer_follower called on a leader");
                return Steering { position: boid.position, heading: boid.heading, velocity: boid.velocity };
            }
        };

        let anchor = slot_target(leader, slot, self.cfg.formation_size, self.cfg.formation_radius);
        let to_anchor = anchor - boid.position;
        let dist_anchor = to_anchor.length();
        let dist_leader = boid.position.distance(leader);

        // At the anchor the bearing is undefined; hold the current heading.
        let desired_heading = if dist_anchor > EPSILON { to_anchor.angle() } else { boid.heading };
        let heading = wrap_signed(turn_toward(boid.heading, desired_heading, self.cfg.turn_rate));

        let speed = (self.cfg.kp * dist_anchor + self.cfg.k_leader * dist_leader)
            .min(self.cfg.max_follower_speed);
        let mut velocity = Vec2::from_angle(heading) * speed;

        let mut neighbors = Vec::new();
        index.for_each_within(boid.position, id, self.cfg.neighbor_radius, &mut |n, _| {
            neighbors.push(positions[n.index()]);
        });
        velocity += separation(
            boid.position,
            neighbors.into_iter(),
            self.cfg.neighbor_force,
            self.cfg.neighbor_gain,
        );
        velocity += self.obstacle_push(boid.position);
        velocity = velocity.clamp_length(self.cfg.max_follower_speed);

        let (position, velocity) =
            integrate(boid.position, velocity, &self.cfg.bounds, self.cfg.follower_boundary);
        Steering { position, heading, velocity }
    }

    /// Steer one leader.  `pointer` is this tick's external target when the
    /// leader mode is pointer-follow; `rng` feeds the wander perturbation.
    pub fn steer_leader(
        &self,
        boid: &BoidState,
        tick: Tick,
        pointer: Option<Vec2>,
        rng: &mut BoidRng,
    ) -> Steering {
        let mut heading = boid.heading;
        match self.cfg.leader_mode {
            LeaderMode::PointerFollow => {
                // The pointer is an absolute command: the heading snaps to
                // the bearing each tick, with no turn-rate smoothing.  No
                // pointer, or pointer on top of us: hold course.
                if let Some(target) = pointer {
                    let to_target = target - boid.position;
                    if to_target.length_squared() > EPSILON * EPSILON {
                        heading = to_target.angle();
                    }
                }
            }
            LeaderMode::AutonomousWander { perturb_interval, perturb_max } => {
                if tick.is_multiple_of(perturb_interval) {
                    heading = wrap_signed(heading + rng.gen_range(-perturb_max..=perturb_max));
                }
            }
        }

        let velocity = Vec2::from_angle(heading) * self.cfg.leader_speed;

        let (position, reflected) =
            integrate(boid.position, velocity, &self.cfg.bounds, self.cfg.leader_boundary);
        if reflected != velocity && reflected.length_squared() > EPSILON * EPSILON {
            heading = wrap_signed(reflected.angle());
        }
        Steering { position, heading, velocity: reflected }
    }
}
