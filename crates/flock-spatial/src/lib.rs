//! `flock-spatial` — proximity indexes for neighbor and obstacle queries.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`query`]     | `NeighborIndex` trait — the steering engine's query seam  |
//! | [`grid`]      | `UniformGrid` — dense bucket grid, O(1) rebuild per boid  |
//! | [`scan`]      | `LinearScan` — brute-force reference implementation       |
//! | [`obstacles`] | `ObstacleField` — R-tree over static obstacle centers     |
//! | [`error`]     | `SpatialError`, `SpatialResult<T>`                        |

pub mod error;
pub mod grid;
pub mod obstacles;
pub mod query;
pub mod scan;

#[cfg(test)]
mod tests;

pub use error::{SpatialError, SpatialResult};
pub use grid::UniformGrid;
pub use obstacles::ObstacleField;
pub use query::NeighborIndex;
pub use scan::LinearScan;
