//! Spatial-subsystem error type.

use thiserror::Error;

/// Errors produced by `flock-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("grid cell size must be positive and finite, got {0}")]
    InvalidCellSize(f32),

    #[error("world of {width}×{height} units yields no grid cells")]
    DegenerateWorld { width: f32, height: f32 },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
