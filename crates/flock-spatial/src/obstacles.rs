//! Static obstacle proximity queries.
//!
//! Obstacles never move, so they get an R-tree built once at simulation
//! init rather than the per-tick bucket grid the boids use.  Queries are
//! center-to-center: repulsion triggers at a fixed distance from the
//! obstacle's center regardless of its drawn radius.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use flock_core::{Obstacle, ObstacleId, Vec2};

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct ObstacleEntry {
    point: [f32; 2],
    id:    ObstacleId,
}

impl RTreeObject for ObstacleEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for ObstacleEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── ObstacleField ─────────────────────────────────────────────────────────────

/// Immutable R-tree index over the configured obstacle set.
pub struct ObstacleField {
    tree:      RTree<ObstacleEntry>,
    obstacles: Vec<Obstacle>,
}

impl ObstacleField {
    pub fn new(obstacles: &[Obstacle]) -> Self {
        let entries = obstacles
            .iter()
            .enumerate()
            .map(|(i, o)| ObstacleEntry {
                point: [o.position.x, o.position.y],
                id:    ObstacleId(i as u32),
            })
            .collect();
        Self {
            tree:      RTree::bulk_load(entries),
            obstacles: obstacles.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Center position of an obstacle.
    #[inline]
    pub fn position(&self, id: ObstacleId) -> Vec2 {
        self.obstacles[id.index()].position
    }

    /// Invoke `visit` for every obstacle whose center lies strictly within
    /// `distance` of `origin`.  Order is unspecified but deterministic for
    /// a given field.
    pub fn for_each_within(
        &self,
        origin: Vec2,
        distance: f32,
        visit: &mut dyn FnMut(ObstacleId, Vec2),
    ) {
        // locate_within_distance takes the squared radius and is inclusive;
        // re-check strictly to keep the trigger boundary exclusive.
        let distance_sq = distance * distance;
        for entry in self
            .tree
            .locate_within_distance([origin.x, origin.y], distance_sq)
        {
            let pos = Vec2::new(entry.point[0], entry.point[1]);
            if origin.distance_squared(pos) < distance_sq {
                visit(entry.id, pos);
            }
        }
    }
}
