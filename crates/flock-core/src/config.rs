//! Simulation configuration.
//!
//! A [`SimConfig`] carries every tunable the engine reads: population and
//! role split, per-role speeds, formation geometry, control gains, avoidance
//! radii/forces, world bounds, boundary/leadership/leader modes, obstacles,
//! and the RNG seed.  It is supplied once at construction and is immutable
//! thereafter; [`SimConfig::validate`] fails fast on every degenerate value
//! so the simulation never has to guard against them at runtime.
//!
//! The historical behavior variants (mouse-follow vs. autonomous leader,
//! bounce vs. clamp boundaries, rotating vs. fixed leadership) are plain
//! configuration here, not separate code paths.

use std::f32::consts::PI;

use crate::{FlockError, FlockResult, Obstacle, WorldBounds};

// ── Mode enums ────────────────────────────────────────────────────────────────

/// How a boid is kept inside the world interior after a move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundaryMode {
    /// Clamp the position component-wise into the interior; velocity is
    /// left unchanged.
    Clamp,
    /// Reflect: a velocity component whose projected move would cross a
    /// margin is inverted and the position mirrored about that margin.
    Bounce,
}

/// Where the leader's heading signal comes from.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LeaderMode {
    /// Steer toward the externally supplied target point (pointer).  When
    /// no target arrives for a tick the leader holds its heading.
    PointerFollow,
    /// Wander: perturb the heading by a uniform sample in
    /// `±perturb_max` radians once every `perturb_interval` ticks.
    AutonomousWander {
        perturb_interval: u64,
        perturb_max:      f32,
    },
}

/// Whether the leader role moves between boids over time.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LeadershipMode {
    /// The initial leader set keeps the role forever.
    Fixed,
    /// Every `interval` ticks the whole leader set is swapped for followers
    /// chosen uniformly at random.
    Rotating { interval: u64 },
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Full simulation configuration.  See module docs.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Total boid count, fixed for the simulation's lifetime.
    pub population: usize,

    /// How many boids hold the `Leader` role between rotations.
    pub leader_count: usize,

    /// Leader speed (units/tick); leader velocity is magnitude-clamped to it.
    pub leader_speed: f32,

    /// Follower speed cap (units/tick), applied after avoidance forces.
    pub max_follower_speed: f32,

    /// Maximum heading change per tick (radians) for followers.
    pub turn_rate: f32,

    /// Number of angular slots in the leader-centered lattice.
    pub formation_size: u16,

    /// Distance from leader to each slot target.
    pub formation_radius: f32,

    /// Proportional gain on distance-to-slot-target in the follower's
    /// desired-speed law.
    pub kp: f32,

    /// Gain on distance-to-leader in the follower's desired-speed law.
    pub k_leader: f32,

    /// Radius within which other boids contribute separation.
    pub neighbor_radius: f32,

    /// Magnitude of the neighbor-separation contribution.
    pub neighbor_force: f32,

    /// Gain applied to `neighbor_force`.  The historical unscaled variant
    /// is this gain set to 1.
    pub neighbor_gain: f32,

    /// Center-to-center distance at which obstacle repulsion triggers.
    pub obstacle_avoidance_distance: f32,

    /// Magnitude of the per-obstacle repulsion contribution.
    pub obstacle_avoidance_force: f32,

    /// Static obstacle set.
    pub obstacles: Vec<Obstacle>,

    /// World extents and boundary margin.
    pub bounds: WorldBounds,

    /// Containment mode for leaders (bounce keeps wanderers off the walls).
    pub leader_boundary: BoundaryMode,

    /// Containment mode for followers (clamp suffices; they are
    /// formation-bound).
    pub follower_boundary: BoundaryMode,

    /// Leader heading-signal source.
    pub leader_mode: LeaderMode,

    /// Fixed or rotating leadership.
    pub leadership: LeadershipMode,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,
}

impl Default for SimConfig {
    /// The rotating autonomous-wander variant: 100 boids, 1 leader swapped
    /// every 300 ticks, 4-slot lattice of radius 100 in a 1200×600 world.
    fn default() -> Self {
        Self {
            population:                  100,
            leader_count:                1,
            leader_speed:                2.0,
            max_follower_speed:          2.0,
            turn_rate:                   0.1,
            formation_size:              4,
            formation_radius:            100.0,
            kp:                          0.01,
            k_leader:                    0.02,
            neighbor_radius:             15.0,
            neighbor_force:              15.0,
            neighbor_gain:               1.0,
            obstacle_avoidance_distance: 30.0,
            obstacle_avoidance_force:    10.0,
            obstacles:                   Vec::new(),
            bounds:                      WorldBounds::new(1200.0, 600.0, 50.0),
            leader_boundary:             BoundaryMode::Bounce,
            follower_boundary:           BoundaryMode::Clamp,
            leader_mode:                 LeaderMode::AutonomousWander {
                perturb_interval: 120,
                perturb_max:      PI / 4.0,
            },
            leadership:                  LeadershipMode::Rotating { interval: 300 },
            seed:                        42,
        }
    }
}

impl SimConfig {
    /// The pointer-follow variant: 200 boids, one fixed leader chasing the
    /// pointer, gentler turn rate and a 80-unit lattice in an 800×600 world.
    pub fn pointer_follow() -> Self {
        Self {
            population:                  200,
            leader_count:                1,
            leader_speed:                4.0,
            max_follower_speed:          2.0,
            turn_rate:                   0.05,
            formation_size:              4,
            formation_radius:            80.0,
            kp:                          0.01,
            k_leader:                    0.0,
            neighbor_radius:             30.0,
            neighbor_force:              1.0,
            neighbor_gain:               0.5,
            obstacle_avoidance_distance: 30.0,
            obstacle_avoidance_force:    5.0,
            obstacles:                   Vec::new(),
            bounds:                      WorldBounds::new(800.0, 600.0, 50.0),
            leader_boundary:             BoundaryMode::Bounce,
            follower_boundary:           BoundaryMode::Clamp,
            leader_mode:                 LeaderMode::PointerFollow,
            leadership:                  LeadershipMode::Fixed,
            seed:                        42,
        }
    }

    /// Fail fast on any degenerate value.  Called by the sim builder; a
    /// config that passes never needs runtime guards beyond the documented
    /// zero-length normalization cases.
    pub fn validate(&self) -> FlockResult<()> {
        if self.leader_count == 0 {
            return Err(FlockError::Config("leader count must be positive".into()));
        }
        if self.leader_count >= self.population {
            return Err(FlockError::Config(format!(
                "leader count {} must be less than population {}",
                self.leader_count, self.population
            )));
        }
        if self.formation_size == 0 {
            return Err(FlockError::Config("formation size must be positive".into()));
        }

        for (name, value) in [
            ("leader_speed", self.leader_speed),
            ("max_follower_speed", self.max_follower_speed),
            ("turn_rate", self.turn_rate),
            ("formation_radius", self.formation_radius),
            ("kp", self.kp),
            ("k_leader", self.k_leader),
            ("neighbor_radius", self.neighbor_radius),
            ("neighbor_force", self.neighbor_force),
            ("neighbor_gain", self.neighbor_gain),
            ("obstacle_avoidance_distance", self.obstacle_avoidance_distance),
            ("obstacle_avoidance_force", self.obstacle_avoidance_force),
            ("boundary margin", self.bounds.margin),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(FlockError::Config(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }

        let b = &self.bounds;
        if !b.width.is_finite() || !b.height.is_finite() {
            return Err(FlockError::Config("world dimensions must be finite".into()));
        }
        if b.width < 2.0 * b.margin || b.height < 2.0 * b.margin {
            return Err(FlockError::Config(format!(
                "world {}×{} is smaller than twice the margin {}",
                b.width, b.height, b.margin
            )));
        }

        for (i, obstacle) in self.obstacles.iter().enumerate() {
            if !obstacle.position.is_finite() || !obstacle.radius.is_finite() || obstacle.radius < 0.0 {
                return Err(FlockError::Config(format!(
                    "obstacle {i} has a non-finite position or negative radius"
                )));
            }
        }

        if let LeadershipMode::Rotating { interval } = self.leadership {
            if interval == 0 {
                return Err(FlockError::Config("rotation interval must be positive".into()));
            }
        }
        if let LeaderMode::AutonomousWander { perturb_interval, perturb_max } = self.leader_mode {
            if perturb_interval == 0 {
                return Err(FlockError::Config("perturb interval must be positive".into()));
            }
            if !perturb_max.is_finite() || perturb_max < 0.0 {
                return Err(FlockError::Config(format!(
                    "perturb_max must be finite and non-negative, got {perturb_max}"
                )));
            }
        }

        Ok(())
    }
}
