//! Fluent builder for constructing a [`Sim`].

use std::f32::consts::PI;

use flock_core::{BoidId, BoidRngs, FlockError, SimConfig, SimRng, Vec2};
use flock_spatial::{NeighborIndex, UniformGrid};
use flock_steer::{BoidState, Role, SlotLedger, SteeringEngine};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — population, gains, modes, world, seed.
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                                      |
/// |-------------------------|----------------------------------------------|
/// | `.initial_positions(v)` | Uniform random over the world interior       |
/// | `.initial_leaders(v)`   | `BoidId(0) .. BoidId(leader_count)`          |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::default()).build()?;
/// sim.run_ticks(1_000, &mut NoopObserver);
/// ```
pub struct SimBuilder {
    cfg:       SimConfig,
    positions: Option<Vec<Vec2>>,
    leaders:   Option<Vec<BoidId>>,
}

impl SimBuilder {
    pub fn new(cfg: SimConfig) -> Self {
        Self { cfg, positions: None, leaders: None }
    }

    /// Supply explicit starting positions (must be length `population`).
    /// Positions are clamped into the world interior.
    pub fn initial_positions(mut self, positions: Vec<Vec2>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Supply the explicit initial leader set (must be length
    /// `leader_count`, unique, in range).
    pub fn initial_leaders(mut self, leaders: Vec<BoidId>) -> Self {
        self.leaders = Some(leaders);
        self
    }

    /// Build with the default bucket-grid neighbor index.
    pub fn build(self) -> SimResult<Sim<UniformGrid>> {
        // A zero neighbor radius still needs non-degenerate cells; queries
        // at radius 0 simply return nothing.
        let cell_size = self.cfg.neighbor_radius.max(1.0);
        let index = UniformGrid::new(&self.cfg.bounds, cell_size)?;
        self.build_with_index(index)
    }

    /// Build with a caller-supplied neighbor index implementation.
    pub fn build_with_index<I>(self, index: I) -> SimResult<Sim<I>>
    where
        I: NeighborIndex + Sync,
    {
        let cfg = self.cfg;
        cfg.validate()?;
        let population = cfg.population;
        let mut rng = SimRng::new(cfg.seed);

        // ── Resolve starting positions ────────────────────────────────────
        let (x_min, x_max) = cfg.bounds.x_range();
        let (y_min, y_max) = cfg.bounds.y_range();
        let positions: Vec<Vec2> = match self.positions {
            Some(supplied) => {
                if supplied.len() != population {
                    return Err(SimError::CountMismatch {
                        expected: population,
                        got:      supplied.len(),
                        what:     "initial positions",
                    });
                }
                for p in &supplied {
                    if !p.is_finite() {
                        return Err(FlockError::Config(format!(
                            "initial position {p} is not finite"
                        ))
                        .into());
                    }
                }
                supplied.into_iter().map(|p| cfg.bounds.clamp(p)).collect()
            }
            None => (0..population)
                .map(|_| Vec2::new(rng.gen_range(x_min..=x_max), rng.gen_range(y_min..=y_max)))
                .collect(),
        };

        // ── Resolve the initial leader set ────────────────────────────────
        let leaders: Vec<BoidId> = match self.leaders {
            Some(mut supplied) => {
                if supplied.len() != cfg.leader_count {
                    return Err(SimError::CountMismatch {
                        expected: cfg.leader_count,
                        got:      supplied.len(),
                        what:     "initial leaders",
                    });
                }
                supplied.sort_unstable();
                for pair in supplied.windows(2) {
                    if pair[0] == pair[1] {
                        return Err(SimError::BadLeader(pair[1]));
                    }
                }
                if let Some(&last) = supplied.last() {
                    if last.index() >= population {
                        return Err(SimError::BadLeader(last));
                    }
                }
                supplied
            }
            None => (0..cfg.leader_count).map(|i| BoidId(i as u32)).collect(),
        };

        // ── Lay out roles, slots, and headings ────────────────────────────
        let mut is_leader = vec![false; population];
        for &id in &leaders {
            is_leader[id.index()] = true;
        }

        let mut ledger = SlotLedger::new(cfg.formation_size);
        let states: Vec<BoidState> = positions
            .iter()
            .enumerate()
            .map(|(i, &position)| {
                let heading = rng.gen_range(-PI..PI);
                let role = if is_leader[i] {
                    Role::Leader
                } else {
                    Role::Follower { slot: ledger.assign() }
                };
                BoidState::new(position, heading, role)
            })
            .collect();

        let rngs = BoidRngs::new(population, cfg.seed);
        let engine = SteeringEngine::new(&cfg);

        tracing::info!(
            population,
            leaders = cfg.leader_count,
            seed = cfg.seed,
            "simulation built"
        );

        Ok(Sim::from_parts(engine, states, index, ledger, leaders, rngs, rng))
    }
}
