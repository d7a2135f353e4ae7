//! Heading angle helpers.
//!
//! Headings are radians, counter-clockwise from +x.  All comparisons between
//! headings go through [`wrap_signed`] so that the difference between two
//! angles is always the short way around the circle.

use std::f32::consts::PI;

/// Wrap `theta` into `(−π, π]`.
///
/// The boundary is single-valued: an input of exactly `−π` maps to `+π`, so
/// repeated wrapping of a half-turn difference never oscillates between the
/// two representations.
pub fn wrap_signed(theta: f32) -> f32 {
    let two_pi = 2.0 * PI;
    let mut t = theta % two_pi;
    if t > PI {
        t -= two_pi;
    } else if t <= -PI {
        t += two_pi;
    }
    t
}

/// Advance `current` toward `desired` by at most `max_step` radians.
///
/// The difference is wrapped into `(−π, π]` first, so the turn always takes
/// the short way around.  `max_step` must be non-negative; a desired heading
/// within `max_step` is reached exactly (no overshoot).
pub fn turn_toward(current: f32, desired: f32, max_step: f32) -> f32 {
    let diff = wrap_signed(desired - current);
    current + diff.clamp(-max_step, max_step)
}
