//! 2D vector type used for positions, velocities, and force accumulators.
//!
//! `Vec2` uses `f32` components.  At world scales of a few thousand units
//! this leaves ~0.25 milli-unit precision — more than sufficient for visual
//! steering while keeping snapshots compact.
//!
//! The normalization and clamping helpers are zero-guarded: a zero-length
//! vector normalizes to zero and clamps to zero instead of producing NaN.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Length below which a vector is treated as zero for normalization.
pub const EPSILON: f32 = 1.0e-6;

/// A 2D single-precision vector.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing along `heading` (radians, counter-clockwise
    /// from +x).
    #[inline]
    pub fn from_angle(heading: f32) -> Self {
        Self { x: heading.cos(), y: heading.sin() }
    }

    /// The heading of this vector via `atan2(y, x)`.  Zero vector → 0.0.
    #[inline]
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (other - self).length()
    }

    /// Squared distance — cheaper rejection test for radius queries.
    #[inline]
    pub fn distance_squared(self, other: Vec2) -> f32 {
        (other - self).length_squared()
    }

    /// Scale to unit length, or return `ZERO` when the length is below the
    /// epsilon guard.  Never divides by zero.
    pub fn normalize_or_zero(self) -> Vec2 {
        let len_sq = self.length_squared();
        if len_sq <= EPSILON * EPSILON {
            return Vec2::ZERO;
        }
        self / len_sq.sqrt()
    }

    /// Rescale so the magnitude does not exceed `max`, preserving direction.
    ///
    /// A zero vector is returned unchanged — the speed-cap guard the
    /// steering pipeline relies on.
    pub fn clamp_length(self, max: f32) -> Vec2 {
        let len_sq = self.length_squared();
        if len_sq <= max * max || len_sq <= EPSILON * EPSILON {
            return self;
        }
        self * (max / len_sq.sqrt())
    }

    /// `true` if both components are finite (no NaN/inf leaked in).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
