//! Atomic leadership rotation.
//!
//! A rotation is a whole-population role swap performed between ticks: the
//! entire current leader set steps down and an equal number of followers,
//! sampled uniformly without replacement, steps up.  No steering runs while
//! roles are in flux — the swap completes before the tick's intent phase
//! reads any role.
//!
//! Slots move with the roles: a promoted follower releases its slot back to
//! the ledger first, then each demoted leader claims a fresh slot, so the
//! freed anchors are available to the boids that need them.

use flock_core::{BoidId, SimRng, Tick};
use flock_steer::{BoidState, Role, SlotLedger};

/// Record of one completed rotation, handed to
/// [`SimObserver::on_rotation`][crate::SimObserver::on_rotation].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationEvent {
    pub tick: Tick,
    /// Former leaders, now followers.  Ascending ID order.
    pub demoted: Vec<BoidId>,
    /// New leaders.  Ascending ID order.
    pub promoted: Vec<BoidId>,
}

/// Swap the leader set.  `target` is the configured leader count; when
/// fewer followers exist than `target` (a leader count close to the
/// population) the rotation promotes as many as it can and logs a warning
/// rather than failing.
///
/// Returns the event describing the swap.  `states` roles, the `ledger`,
/// and the caller's leader list (rebuilt from the event) all change
/// together — the swap is atomic from the tick loop's point of view.
pub fn rotate(
    states: &mut [BoidState],
    ledger: &mut SlotLedger,
    target: usize,
    rng: &mut SimRng,
    tick: Tick,
) -> RotationEvent {
    let mut demoted = Vec::with_capacity(target);
    let mut followers = Vec::with_capacity(states.len());
    for (i, boid) in states.iter().enumerate() {
        match boid.role {
            Role::Leader => demoted.push(BoidId(i as u32)),
            Role::Follower { .. } => followers.push(BoidId(i as u32)),
        }
    }

    let take = target.min(followers.len());
    if take < target {
        tracing::warn!(
            requested = target,
            available = followers.len(),
            "leadership rotation shortfall; promoting fewer leaders"
        );
    }

    let mut promoted: Vec<BoidId> = rand::seq::index::sample(rng.inner(), followers.len(), take)
        .into_iter()
        .map(|i| followers[i])
        .collect();
    promoted.sort_unstable();

    // Promote first so the freed slots are in the ledger before the
    // demoted leaders claim theirs.
    for &id in &promoted {
        if let Role::Follower { slot } = states[id.index()].role {
            ledger.release(slot);
        }
        states[id.index()].role = Role::Leader;
    }
    for &id in &demoted {
        states[id.index()].role = Role::Follower { slot: ledger.assign() };
    }

    tracing::debug!(
        %tick,
        demoted = demoted.len(),
        promoted = promoted.len(),
        "leadership rotated"
    );

    RotationEvent { tick, demoted, promoted }
}
