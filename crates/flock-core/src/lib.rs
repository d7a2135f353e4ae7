//! `flock-core` — foundational types for the flockform formation-flocking engine.
//!
//! This crate is a dependency of every other `flock-*` crate.  It intentionally
//! has no `flock-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`ids`]     | `BoidId`, `ObstacleId`, `SlotId`                        |
//! | [`vec2`]    | `Vec2` — 2D float vector with zero-guarded normalize    |
//! | [`angle`]   | heading wrap into `(−π, π]`, turn-rate-limited steering |
//! | [`time`]    | `Tick` — monotone simulation tick counter               |
//! | [`rng`]     | `BoidRng` (per-boid), `BoidRngs`, `SimRng` (global)     |
//! | [`world`]   | `WorldBounds`, `Obstacle`                               |
//! | [`config`]  | `SimConfig` + mode enums + fail-fast validation         |
//! | [`error`]   | `FlockError`, `FlockResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                |
//! |---------|-------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.   |

pub mod angle;
pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod vec2;
pub mod world;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use angle::{turn_toward, wrap_signed};
pub use config::{BoundaryMode, LeaderMode, LeadershipMode, SimConfig};
pub use error::{FlockError, FlockResult};
pub use ids::{BoidId, ObstacleId, SlotId};
pub use rng::{BoidRng, BoidRngs, SimRng};
pub use time::Tick;
pub use vec2::{EPSILON, Vec2};
pub use world::{Obstacle, WorldBounds};
