//! Position integration with boundary containment.
//!
//! The world interior is the rectangle inset by the configured margin.
//! Integration moves a boid by its velocity and then keeps it inside the
//! interior per the configured [`BoundaryMode`]:
//!
//! - `Clamp` pins each position component to the interior; velocity is left
//!   alone, so a boid pressed against a wall slides along it.
//! - `Bounce` mirrors the overshooting component about the wall and negates
//!   that velocity component, the billiard reflection.  A final clamp
//!   backstops the mirror for moves longer than the interior itself.

use flock_core::{BoundaryMode, Vec2, WorldBounds};

/// Advance `position` by `velocity` and contain the result.  Returns the
/// new position and the (possibly reflected) velocity.
#[inline]
pub fn integrate(
    position: Vec2,
    velocity: Vec2,
    bounds: &WorldBounds,
    mode: BoundaryMode,
) -> (Vec2, Vec2) {
    let next = position + velocity;
    match mode {
        BoundaryMode::Clamp => (bounds.clamp(next), velocity),
        BoundaryMode::Bounce => {
            let (x_min, x_max) = bounds.x_range();
            let (y_min, y_max) = bounds.y_range();
            let mut p = next;
            let mut v = velocity;

            if p.x < x_min {
                p.x = 2.0 * x_min - p.x;
                v.x = -v.x;
            } else if p.x > x_max {
                p.x = 2.0 * x_max - p.x;
                v.x = -v.x;
            }
            if p.y < y_min {
                p.y = 2.0 * y_min - p.y;
                v.y = -v.y;
            } else if p.y > y_max {
                p.y = 2.0 * y_max - p.y;
                v.y = -v.y;
            }

            (bounds.clamp(p), v)
        }
    }
}
