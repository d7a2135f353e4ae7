//! Formation-slot geometry and slot bookkeeping.
//!
//! The formation is a virtual ring of `formation_size` anchor points spaced
//! at equal angles around each leader.  A follower owns one [`SlotId`] and
//! always steers toward that slot's anchor; when the population outnumbers
//! the slots, several followers share an anchor and the separation force
//! spreads them around it.

use std::f32::consts::TAU;

use flock_core::{SlotId, Vec2};

/// World position of `slot`'s anchor on the ring around `leader`.
///
/// Slot 0 sits on the leader's +x side; slots advance counter-clockwise.
/// The anchor depends only on the leader's position, never its heading, so
/// the ring does not spin as the leader turns.
#[inline]
pub fn slot_target(leader: Vec2, slot: SlotId, formation_size: u16, radius: f32) -> Vec2 {
    let angle = TAU * slot.0 as f32 / formation_size as f32;
    leader + Vec2::from_angle(angle) * radius
}

/// Occupancy counts for the formation's slots.
///
/// Assignment policy: the lowest-numbered vacant slot, or when every slot
/// is taken, the lowest-numbered slot with the fewest occupants.  This
/// fills the ring evenly and deterministically regardless of population.
#[derive(Clone, Debug)]
pub struct SlotLedger {
    occupancy: Vec<u32>,
}

impl SlotLedger {
    pub fn new(formation_size: u16) -> Self {
        Self { occupancy: vec![0; formation_size as usize] }
    }

    pub fn formation_size(&self) -> u16 {
        self.occupancy.len() as u16
    }

    pub fn occupancy(&self, slot: SlotId) -> u32 {
        self.occupancy[slot.index()]
    }

    /// Claim the emptiest slot (ties to the lowest index) and return it.
    pub fn assign(&mut self) -> SlotId {
        let (slot, _) = self
            .occupancy
            .iter()
            .enumerate()
            .min_by_key(|&(i, &count)| (count, i))
            .expect("ledger has at least one slot");
        self.occupancy[slot] += 1;
        SlotId(slot as u16)
    }

    /// Release a previously assigned slot (the holder became a leader).
    ///
    /// # Panics
    /// Panics in debug mode if the slot has no occupants to release.
    pub fn release(&mut self, slot: SlotId) {
        debug_assert!(self.occupancy[slot.index()] > 0, "releasing vacant {slot}");
        self.occupancy[slot.index()] = self.occupancy[slot.index()].saturating_sub(1);
    }
}
