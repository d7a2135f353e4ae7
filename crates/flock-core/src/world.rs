//! World extents and static obstacles.

use crate::Vec2;

// ── WorldBounds ───────────────────────────────────────────────────────────────

/// The rectangular world, with the margin boids must keep from its edges.
///
/// The *interior* is `[margin, width − margin] × [margin, height − margin]`;
/// every boid position lies inside it after each completed tick.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldBounds {
    pub width:  f32,
    pub height: f32,
    pub margin: f32,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32, margin: f32) -> Self {
        Self { width, height, margin }
    }

    /// Interior extent on the x axis: `(min_x, max_x)`.
    #[inline]
    pub fn x_range(&self) -> (f32, f32) {
        (self.margin, self.width - self.margin)
    }

    /// Interior extent on the y axis: `(min_y, max_y)`.
    #[inline]
    pub fn y_range(&self) -> (f32, f32) {
        (self.margin, self.height - self.margin)
    }

    /// `true` if `p` lies inside the interior (margins inclusive).
    pub fn contains(&self, p: Vec2) -> bool {
        let (x0, x1) = self.x_range();
        let (y0, y1) = self.y_range();
        (x0..=x1).contains(&p.x) && (y0..=y1).contains(&p.y)
    }

    /// Clamp `p` component-wise into the interior.
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        let (x0, x1) = self.x_range();
        let (y0, y1) = self.y_range();
        Vec2::new(p.x.clamp(x0, x1), p.y.clamp(y0, y1))
    }

    /// Geometric center of the world.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

// ── Obstacle ──────────────────────────────────────────────────────────────────

/// A static circular obstacle.  Immutable after construction; repulsion
/// triggers on center-to-center distance (the radius is cosmetic plus a
/// hint for placement, not part of the avoidance threshold).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    pub position: Vec2,
    pub radius:   f32,
}

impl Obstacle {
    pub fn new(position: Vec2, radius: f32) -> Self {
        Self { position, radius }
    }
}
