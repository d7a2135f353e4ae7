//! Repulsive steering forces.
//!
//! Both forces are built from unit direction vectors so their strength is
//! set entirely by the configured magnitudes, not by how close the threat
//! is.  A neighbor or obstacle exactly coincident with the boid contributes
//! nothing: the away-direction is undefined there, and dropping the term is
//! the only choice that keeps the force finite.

use flock_core::Vec2;

/// Separation force away from nearby flockmates.
///
/// The unit vectors pointing from each neighbor to `origin` are averaged
/// and the result renormalized, so the force has magnitude `force * gain`
/// regardless of crowd density — dense clusters relax instead of exploding.
/// Opposing neighbors can cancel to zero, in which case no force applies.
pub fn separation(origin: Vec2, neighbors: impl Iterator<Item = Vec2>, force: f32, gain: f32) -> Vec2 {
    let mut away = Vec2::ZERO;
    for neighbor in neighbors {
        away += (origin - neighbor).normalize_or_zero();
    }
    away.normalize_or_zero() * (force * gain)
}

/// Repulsion away from obstacle centers.
///
/// Per-obstacle contributions of fixed magnitude `force` are summed, so a
/// boid threading a gap between two obstacles feels both walls.
pub fn obstacle_repulsion(origin: Vec2, centers: impl Iterator<Item = Vec2>, force: f32) -> Vec2 {
    let mut push = Vec2::ZERO;
    for center in centers {
        push += (origin - center).normalize_or_zero() * force;
    }
    push
}
