//! The per-boid snapshot record.

use flock_core::{SlotId, Vec2};

/// A boid's role for the current rotation epoch.
///
/// A follower's slot is part of its identity, not its list position: slots
/// survive leadership rotations untouched unless the boid itself changes
/// role.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Leader,
    Follower { slot: SlotId },
}

impl Role {
    #[inline]
    pub fn is_leader(self) -> bool {
        matches!(self, Role::Leader)
    }
}

/// One boid's kinematic state plus role.  The simulation keeps two buffers
/// of these and swaps them each tick.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoidState {
    pub position: Vec2,
    /// Facing direction in radians, wrapped to `(-π, π]`.
    pub heading:  f32,
    /// Realized velocity of the last tick (units/tick).
    pub velocity: Vec2,
    pub role:     Role,
}

impl BoidState {
    pub fn new(position: Vec2, heading: f32, role: Role) -> Self {
        Self { position, heading, velocity: Vec2::ZERO, role }
    }
}
