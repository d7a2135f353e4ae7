//! Simulation observer trait for progress reporting and data collection.

use flock_core::Tick;
use flock_steer::BoidState;

use crate::rotation::RotationEvent;

/// Callbacks invoked by [`Sim::step`][crate::Sim::step] at key points in
/// the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — rotation logger
///
/// ```rust,ignore
/// struct RotationLogger;
///
/// impl SimObserver for RotationLogger {
///     fn on_rotation(&mut self, event: &RotationEvent) {
///         println!("{}: {} new leaders", event.tick, event.promoted.len());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the start of each tick, before rotation and steering.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the snapshot swap with read-only access to the new
    /// state, so renderers and recorders can consume a settled frame.
    fn on_tick_end(&mut self, _tick: Tick, _boids: &[BoidState]) {}

    /// Called whenever a leadership rotation fires.
    fn on_rotation(&mut self, _event: &RotationEvent) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `step`
/// but don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
