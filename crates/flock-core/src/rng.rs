//! Deterministic per-boid and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each boid gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (boid_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive boid IDs uniformly across the seed space.
//! This means:
//!
//! - Boids never share RNG state, so steering results do not depend on the
//!   order in which boids are updated — the snapshot phase may run across
//!   threads without perturbing the run.
//! - The same global seed always produces an identical simulation.
//!
//! The global [`SimRng`] is reserved for whole-population operations that
//! are inherently sequential: initial placement and leadership rotation
//! sampling.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::BoidId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── BoidRng ───────────────────────────────────────────────────────────────────

/// Per-boid deterministic RNG.
///
/// Created once per boid at simulation init and stored in [`BoidRngs`]
/// alongside the snapshot arrays.  The type is `!Sync` to prevent accidental
/// sharing across threads — each worker must hold exclusive access.
pub struct BoidRng(SmallRng);

impl BoidRng {
    /// Seed deterministically from the run's global seed and a boid ID.
    pub fn new(global_seed: u64, boid: BoidId) -> Self {
        let seed = global_seed ^ (boid.0 as u64).wrapping_mul(MIXING_CONSTANT);
        BoidRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}

// ── BoidRngs ──────────────────────────────────────────────────────────────────

/// Per-boid RNG state for the whole population, kept apart from the snapshot
/// so the steering phase can borrow `&mut BoidRngs` and the read-only
/// snapshot simultaneously.
///
/// `BoidRngs` is `Send` but intentionally not `Sync` — per-boid RNG state
/// must never be shared between threads.  Rayon's `par_iter_mut()` provides
/// the exclusive-per-thread access pattern.
pub struct BoidRngs {
    pub inner: Vec<BoidRng>,
}

impl BoidRngs {
    /// Allocate and seed `count` per-boid RNGs from `global_seed`.
    pub fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| BoidRng::new(global_seed, BoidId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one boid's RNG.
    #[inline]
    pub fn get_mut(&mut self, boid: BoidId) -> &mut BoidRng {
        &mut self.inner[boid.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for global operations: initial placement and
/// leadership-rotation sampling.
///
/// Used only in single-threaded phases; per-boid randomness goes through
/// [`BoidRng`] instead.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
