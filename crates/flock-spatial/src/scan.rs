//! Brute-force neighbor index.
//!
//! O(n) per query, O(n²) per tick overall.  Kept as the reference
//! implementation the grid is tested against, and as the sensible choice
//! for tiny populations where grid bookkeeping costs more than it saves.

use flock_core::{BoidId, Vec2};

use crate::query::NeighborIndex;

/// Linear-scan neighbor index: rebuild copies the snapshot, queries walk it.
#[derive(Default)]
pub struct LinearScan {
    positions: Vec<Vec2>,
}

impl LinearScan {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NeighborIndex for LinearScan {
    fn rebuild(&mut self, positions: &[Vec2]) {
        self.positions.clear();
        self.positions.extend_from_slice(positions);
    }

    fn for_each_within(
        &self,
        origin: Vec2,
        origin_id: BoidId,
        radius: f32,
        visit: &mut dyn FnMut(BoidId, f32),
    ) {
        let radius_sq = radius * radius;
        for (i, p) in self.positions.iter().enumerate() {
            let candidate = BoidId(i as u32);
            if candidate == origin_id {
                continue;
            }
            let dist_sq = origin.distance_squared(*p);
            if dist_sq < radius_sq {
                visit(candidate, dist_sq);
            }
        }
    }
}
