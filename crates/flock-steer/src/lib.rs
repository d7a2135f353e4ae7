//! `flock-steer` — per-boid steering: formation keeping, avoidance, and
//! boundary containment.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`state`]     | `Role`, `BoidState` — the per-boid snapshot record         |
//! | [`formation`] | Slot-target geometry and the `SlotLedger`                  |
//! | [`avoidance`] | Neighbor-separation and obstacle-repulsion forces          |
//! | [`boundary`]  | Position integration with clamp / bounce containment       |
//! | [`engine`]    | `SteeringEngine` — the full leader and follower pipelines  |
//!
//! Everything here is a pure function of the previous tick's snapshot: the
//! engine reads old state and produces a [`engine::Steering`] intent, and
//! the simulation layer applies intents atomically.  No module in this
//! crate mutates shared state.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod avoidance;
pub mod boundary;
pub mod engine;
pub mod formation;
pub mod state;


pub use boundary::integrate;
pub use engine::{Steering, SteeringEngine};
pub use formation::{SlotLedger, slot_target};
pub use state::{BoidState, Role};
