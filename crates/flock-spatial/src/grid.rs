//! Dense uniform bucket grid for neighbor queries.
//!
//! # Data layout
//!
//! The classic head/next intrusive-list grid: `head[cell]` holds the index
//! of the first boid in the cell and `next[boid]` chains to the next boid in
//! the same cell, with `EMPTY` terminating each chain.  A rebuild is two
//! linear passes (clear heads, push every boid) and allocates nothing after
//! the first tick, so re-indexing every tick is cheap even for large
//! populations.
//!
//! # Cell size
//!
//! Choose the cell size equal to the query radius (the simulation uses the
//! neighbor radius).  A query then never touches more than a 3×3 block of
//! cells, and every candidate in that block is a single squared-distance
//! check away from accept/reject.

use flock_core::{BoidId, Vec2, WorldBounds};

use crate::error::{SpatialError, SpatialResult};
use crate::query::NeighborIndex;

/// Chain terminator / empty-cell marker.
const EMPTY: u32 = u32::MAX;

/// Bucket-grid neighbor index over the world rectangle.
pub struct UniformGrid {
    cell_size: f32,
    cols:      usize,
    rows:      usize,
    /// First boid in each cell, `EMPTY` if the cell is vacant.
    head: Vec<u32>,
    /// Per-boid chain link to the next boid in the same cell.
    next: Vec<u32>,
    /// Position snapshot captured at the last [`rebuild`](NeighborIndex::rebuild).
    positions: Vec<Vec2>,
}

impl UniformGrid {
    /// Build an empty grid covering `bounds` with square cells of
    /// `cell_size` units.
    pub fn new(bounds: &WorldBounds, cell_size: f32) -> SpatialResult<Self> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(SpatialError::InvalidCellSize(cell_size));
        }
        let cols = (bounds.width / cell_size).ceil() as usize;
        let rows = (bounds.height / cell_size).ceil() as usize;
        if cols == 0 || rows == 0 {
            return Err(SpatialError::DegenerateWorld {
                width:  bounds.width,
                height: bounds.height,
            });
        }
        Ok(Self {
            cell_size,
            cols,
            rows,
            head: vec![EMPTY; cols * rows],
            next: Vec::new(),
            positions: Vec::new(),
        })
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Column index for an x coordinate, clamped into the grid.  Positions
    /// are kept inside the world by the boundary pass, but a clamp here
    /// keeps a stray float from indexing out of bounds.
    #[inline]
    fn col_of(&self, x: f32) -> usize {
        ((x.max(0.0) / self.cell_size) as usize).min(self.cols - 1)
    }

    #[inline]
    fn row_of(&self, y: f32) -> usize {
        ((y.max(0.0) / self.cell_size) as usize).min(self.rows - 1)
    }
}

impl NeighborIndex for UniformGrid {
    fn rebuild(&mut self, positions: &[Vec2]) {
        self.head.fill(EMPTY);
        self.next.clear();
        self.next.resize(positions.len(), EMPTY);
        self.positions.clear();
        self.positions.extend_from_slice(positions);

        // Push each boid onto its cell's chain.  Chains therefore iterate
        // in reverse insertion order, which is stable across rebuilds.
        for (i, p) in positions.iter().enumerate() {
            let cell = self.row_of(p.y) * self.cols + self.col_of(p.x);
            self.next[i] = self.head[cell];
            self.head[cell] = i as u32;
        }
    }

    fn for_each_within(
        &self,
        origin: Vec2,
        origin_id: BoidId,
        radius: f32,
        visit: &mut dyn FnMut(BoidId, f32),
    ) {
        let radius_sq = radius * radius;
        let col_min = self.col_of(origin.x - radius);
        let col_max = self.col_of(origin.x + radius);
        let row_min = self.row_of(origin.y - radius);
        let row_max = self.row_of(origin.y + radius);

        for row in row_min..=row_max {
            for col in col_min..=col_max {
                let mut i = self.head[row * self.cols + col];
                while i != EMPTY {
                    let candidate = BoidId(i);
                    if candidate != origin_id {
                        let dist_sq = origin.distance_squared(self.positions[i as usize]);
                        if dist_sq < radius_sq {
                            visit(candidate, dist_sq);
                        }
                    }
                    i = self.next[i as usize];
                }
            }
        }
    }
}
