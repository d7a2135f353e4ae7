//! wander — headless demo run of the flock engine.
//!
//! 100 boids with one wandering leader, rotating leadership every 300
//! ticks, two obstacles in the middle of the world.  Prints a formation
//! summary every few hundred ticks and totals at the end; attach a real
//! renderer by consuming the same observer callbacks.

use std::time::Instant;

use anyhow::Result;

use flock_core::{Obstacle, SimConfig, Tick, Vec2};
use flock_sim::{RotationEvent, SimBuilder, SimObserver};
use flock_steer::{BoidState, Role, slot_target};

// ── Constants ─────────────────────────────────────────────────────────────────

const TOTAL_TICKS:     u64 = 3_000;
const REPORT_INTERVAL: u64 = 500;
const SEED:            u64 = 42;

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints periodic formation summaries and tallies rotations.
struct Reporter {
    cfg:       SimConfig,
    rotations: usize,
}

impl Reporter {
    fn new(cfg: SimConfig) -> Self {
        Self { cfg, rotations: 0 }
    }

    /// Mean follower distance to its slot anchor, a rough "how settled is
    /// the formation" number.
    fn mean_anchor_error(&self, boids: &[BoidState]) -> f32 {
        let leaders: Vec<Vec2> = boids
            .iter()
            .filter(|b| b.role.is_leader())
            .map(|b| b.position)
            .collect();

        let mut total = 0.0;
        let mut count = 0u32;
        for boid in boids {
            let Role::Follower { slot } = boid.role else { continue };
            let leader = leaders
                .iter()
                .copied()
                .min_by(|a, b| {
                    boid.position
                        .distance_squared(*a)
                        .total_cmp(&boid.position.distance_squared(*b))
                })
                .unwrap_or(Vec2::ZERO);
            let anchor = slot_target(leader, slot, self.cfg.formation_size, self.cfg.formation_radius);
            total += boid.position.distance(anchor);
            count += 1;
        }
        if count == 0 { 0.0 } else { total / count as f32 }
    }
}

impl SimObserver for Reporter {
    fn on_tick_end(&mut self, tick: Tick, boids: &[BoidState]) {
        if tick.0 % REPORT_INTERVAL == 0 {
            println!(
                "  {tick:>6}  mean anchor error: {:8.1}",
                self.mean_anchor_error(boids)
            );
        }
    }

    fn on_rotation(&mut self, event: &RotationEvent) {
        self.rotations += 1;
        tracing::info!(%event.tick, new_leader = %event.promoted[0], "leadership rotated");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    // 1. Configure: the stock rotating-wander setup plus two obstacles.
    let cfg = SimConfig {
        obstacles: vec![
            Obstacle::new(Vec2::new(450.0, 300.0), 20.0),
            Obstacle::new(Vec2::new(750.0, 300.0), 20.0),
        ],
        seed: SEED,
        ..SimConfig::default()
    };

    println!("=== wander — flock formation demo ===");
    println!(
        "Boids: {}  |  Leaders: {}  |  World: {}x{}  |  Seed: {}",
        cfg.population, cfg.leader_count, cfg.bounds.width, cfg.bounds.height, cfg.seed
    );
    println!();

    // 2. Build.
    let mut sim = SimBuilder::new(cfg.clone()).build()?;
    let mut reporter = Reporter::new(cfg.clone());

    // 3. Run.
    println!("Running {TOTAL_TICKS} ticks:");
    let t0 = Instant::now();
    sim.run_ticks(TOTAL_TICKS, &mut reporter);
    let elapsed = t0.elapsed();

    // 4. Summary.
    let final_error = reporter.mean_anchor_error(sim.boids());
    println!();
    println!("=== Summary ===");
    println!("  Ticks:              {TOTAL_TICKS}");
    println!("  Rotations:          {}", reporter.rotations);
    println!("  Final anchor error: {final_error:.1}");
    println!(
        "  Wall time:          {:.2?}  ({:.0} ticks/s)",
        elapsed,
        TOTAL_TICKS as f64 / elapsed.as_secs_f64()
    );

    Ok(())
}
