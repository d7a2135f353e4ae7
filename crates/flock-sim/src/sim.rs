//! The `Sim` struct and its tick loop.

use std::mem;

use flock_core::{BoidId, BoidRng, BoidRngs, LeadershipMode, SimConfig, SimRng, Tick, Vec2};
use flock_spatial::NeighborIndex;
use flock_steer::{BoidState, Role, SlotLedger, SteeringEngine};

use crate::SimObserver;
use crate::rotation;

/// The main simulation runner.
///
/// `Sim<I>` holds all simulation state and drives the three-phase tick loop:
///
/// 1. **Rotation** (sequential): on rotation ticks the leader set is swapped
///    atomically before any steering reads a role.
/// 2. **Steering phase** (optionally parallel with the `parallel` feature):
///    every boid's next state is computed from the settled front buffer into
///    the back buffer.  Nothing written this phase is read this phase, so
///    update order cannot leak into the physics.
/// 3. **Apply** (one `mem::swap`): the back buffer becomes the new snapshot.
///
/// Readers between ticks always see a settled frame via [`Sim::boids`].
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<I> {
    engine: SteeringEngine,

    /// The last completed tick; [`Tick::ZERO`] before the first step.
    tick: Tick,

    /// Front buffer — the settled snapshot readers see.
    states: Vec<BoidState>,

    /// Back buffer the steering phase writes into.
    scratch: Vec<BoidState>,

    /// Position column extracted from the front buffer each tick for the
    /// neighbor index rebuild.
    positions: Vec<Vec2>,

    index: I,

    /// Slot occupancy, carried across rotations.
    ledger: SlotLedger,

    /// Current leader set, ascending `BoidId` order.
    leaders: Vec<BoidId>,

    /// Per-boid deterministic RNGs, separated for the split-borrow pattern.
    rngs: BoidRngs,

    /// Simulation-level RNG used only in sequential phases (rotation).
    rng: SimRng,
}

impl<I> Sim<I>
where
    I: NeighborIndex + Sync,
{
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        engine: SteeringEngine,
        states: Vec<BoidState>,
        index: I,
        ledger: SlotLedger,
        leaders: Vec<BoidId>,
        rngs: BoidRngs,
        rng: SimRng,
    ) -> Self {
        let positions = Vec::with_capacity(states.len());
        let scratch = states.clone();
        Self { engine, tick: Tick::ZERO, states, scratch, positions, index, ledger, leaders, rngs, rng }
    }

    // ── Public API ────────────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        self.engine.config()
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// The settled snapshot of the last completed tick.
    pub fn boids(&self) -> &[BoidState] {
        &self.states
    }

    /// Current leader IDs, ascending.
    pub fn leaders(&self) -> &[BoidId] {
        &self.leaders
    }

    /// Advance one tick.  `pointer` is this tick's external steer target,
    /// consumed only when the leader mode is pointer-follow.
    pub fn step<O: SimObserver>(&mut self, pointer: Option<Vec2>, observer: &mut O) {
        let now = self.tick + 1;
        observer.on_tick_start(now);

        // ── Phase 0: leadership rotation ──────────────────────────────────
        let leader_count = self.engine.config().leader_count;
        if let LeadershipMode::Rotating { interval } = self.engine.config().leadership {
            if now.is_multiple_of(interval) {
                let event = rotation::rotate(
                    &mut self.states,
                    &mut self.ledger,
                    leader_count,
                    &mut self.rng,
                    now,
                );
                self.leaders = event.promoted.clone();
                observer.on_rotation(&event);
            }
        }

        // ── Phase 1: re-index the settled positions ───────────────────────
        self.positions.clear();
        self.positions.extend(self.states.iter().map(|b| b.position));
        self.index.rebuild(&self.positions);

        let leader_positions: Vec<(BoidId, Vec2)> = self
            .leaders
            .iter()
            .map(|&id| (id, self.states[id.index()].position))
            .collect();

        // ── Phase 2: steering (produce into the back buffer) ──────────────
        //
        // Explicit field borrows so the borrow checker sees disjoint access.
        let engine = &self.engine;
        let states = self.states.as_slice();
        let positions = self.positions.as_slice();
        let index = &self.index;
        let leaders = leader_positions.as_slice();

        #[cfg(not(feature = "parallel"))]
        {
            for (i, (out, rng)) in self.scratch.iter_mut().zip(self.rngs.inner.iter_mut()).enumerate() {
                *out = steer_one(
                    engine, BoidId(i as u32), &states[i], leaders, index, positions, now, pointer, rng,
                );
            }
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            self.scratch
                .par_iter_mut()
                .zip_eq(self.rngs.inner.par_iter_mut())
                .enumerate()
                .for_each(|(i, (out, rng))| {
                    *out = steer_one(
                        engine, BoidId(i as u32), &states[i], leaders, index, positions, now, pointer, rng,
                    );
                });
        }

        // ── Phase 3: atomic apply ─────────────────────────────────────────
        mem::swap(&mut self.states, &mut self.scratch);
        self.tick = now;
        observer.on_tick_end(now, &self.states);
    }

    /// Step `n` ticks with no pointer input.  Useful for the autonomous
    /// modes, tests, and batch runs.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(None, observer);
        }
    }
}

// ── Per-boid steering dispatch ────────────────────────────────────────────────

/// Compute one boid's next state from the settled snapshot.  Free function
/// so the parallel and sequential paths share it verbatim.
#[allow(clippy::too_many_arguments)]
fn steer_one<I>(
    engine: &SteeringEngine,
    id: BoidId,
    boid: &BoidState,
    leaders: &[(BoidId, Vec2)],
    index: &I,
    positions: &[Vec2],
    now: Tick,
    pointer: Option<Vec2>,
    rng: &mut BoidRng,
) -> BoidState
where
    I: NeighborIndex + ?Sized,
{
    let steering = match boid.role {
        Role::Leader => engine.steer_leader(boid, now, pointer, rng),
        Role::Follower { .. } => {
            let leader = nearest_leader(boid.position, leaders);
            engine.steer_follower(id, boid, leader, index, positions)
        }
    };
    BoidState {
        position: steering.position,
        heading:  steering.heading,
        velocity: steering.velocity,
        role:     boid.role,
    }
}

/// Position of the closest leader.  `leaders` is non-empty and ascending,
/// so distance ties resolve to the lowest ID deterministically.
fn nearest_leader(origin: Vec2, leaders: &[(BoidId, Vec2)]) -> Vec2 {
    let mut best = leaders[0].1;
    let mut best_dist = origin.distance_squared(best);
    for &(_, pos) in &leaders[1..] {
        let dist = origin.distance_squared(pos);
        if dist < best_dist {
            best = pos;
            best_dist = dist;
        }
    }
    best
}
