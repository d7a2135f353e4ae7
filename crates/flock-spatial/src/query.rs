//! The neighbor-query seam between spatial indexing and steering.
//!
//! The steering engine is generic over [`NeighborIndex`] so the same
//! separation code runs against [`crate::UniformGrid`] in production and
//! [`crate::LinearScan`] in tests (and as the small-population fallback).

use flock_core::{BoidId, Vec2};

/// A rebuildable index answering "which boids lie within `radius` of a
/// point?".
///
/// Implementations are rebuilt from scratch once per tick from the current
/// position snapshot; positions are indexed implicitly by [`BoidId`] — slot
/// `i` of the rebuild slice is boid `i`.
pub trait NeighborIndex {
    /// Re-index from the current position snapshot.  Called once per tick
    /// before any queries; the index holds no stale state afterwards.
    fn rebuild(&mut self, positions: &[Vec2]);

    /// Invoke `visit` for every boid strictly within `radius` of `origin`,
    /// excluding `origin_id` itself.  `visit` receives the neighbor's ID and
    /// the **squared** distance — callers that need the true distance take
    /// the square root themselves, so cheap rejection stays cheap.
    ///
    /// Visit order is unspecified but deterministic for a given index state.
    fn for_each_within(
        &self,
        origin: Vec2,
        origin_id: BoidId,
        radius: f32,
        visit: &mut dyn FnMut(BoidId, f32),
    );
}
