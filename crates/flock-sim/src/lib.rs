//! `flock-sim` — the tick loop orchestrator.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`sim`]      | `Sim` — snapshot buffers, the three-phase tick loop        |
//! | [`builder`]  | `SimBuilder` — validation and initial population layout    |
//! | [`rotation`] | Leadership rotation — atomic role swap, `RotationEvent`    |
//! | [`observer`] | `SimObserver` trait, `NoopObserver`                        |
//! | [`error`]    | `SimError`, `SimResult<T>`                                 |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Rayon-parallel steering phase.                            |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.        |

pub mod builder;
pub mod error;
pub mod observer;
pub mod rotation;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use rotation::RotationEvent;
pub use sim::Sim;
