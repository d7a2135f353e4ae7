//! Simulation-level error type.

use thiserror::Error;

/// Errors produced when assembling a [`Sim`][crate::Sim].  The tick loop
/// itself is infallible: anything that could go wrong at runtime is either
/// rejected here or recovered locally.
#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] flock_core::FlockError),

    #[error(transparent)]
    Spatial(#[from] flock_spatial::SpatialError),

    #[error("expected {expected} {what}, got {got}")]
    CountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("initial leader set contains {0}, which is out of range or duplicated")]
    BadLeader(flock_core::BoidId),
}

pub type SimResult<T> = Result<T, SimError>;
