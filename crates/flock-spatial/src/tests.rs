use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use flock_core::{BoidId, Obstacle, Vec2, WorldBounds};

use crate::{LinearScan, NeighborIndex, ObstacleField, UniformGrid};

fn collect_within(index: &dyn NeighborIndex, origin: Vec2, id: BoidId, radius: f32) -> Vec<(BoidId, f32)> {
    let mut hits = Vec::new();
    index.for_each_within(origin, id, radius, &mut |n, d| hits.push((n, d)));
    hits.sort_by_key(|(n, _)| *n);
    hits
}

mod grid {
    use super::*;

    #[test]
    fn rejects_bad_cell_size() {
        let bounds = WorldBounds::new(100.0, 100.0, 0.0);
        assert!(UniformGrid::new(&bounds, 0.0).is_err());
        assert!(UniformGrid::new(&bounds, -5.0).is_err());
        assert!(UniformGrid::new(&bounds, f32::NAN).is_err());
        assert!(UniformGrid::new(&bounds, 15.0).is_ok());
    }

    #[test]
    fn finds_neighbors_across_cell_boundaries() {
        let bounds = WorldBounds::new(100.0, 100.0, 0.0);
        let mut grid = UniformGrid::new(&bounds, 10.0).unwrap();
        // Two boids 2 units apart, straddling the cell boundary at x = 10.
        let positions = vec![Vec2::new(9.0, 5.0), Vec2::new(11.0, 5.0)];
        grid.rebuild(&positions);

        let hits = collect_within(&grid, positions[0], BoidId(0), 5.0);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, BoidId(1));
        assert!((hits[0].1 - 4.0).abs() < 1.0e-6);
    }

    #[test]
    fn excludes_the_querying_boid() {
        let bounds = WorldBounds::new(100.0, 100.0, 0.0);
        let mut grid = UniformGrid::new(&bounds, 10.0).unwrap();
        let positions = vec![Vec2::new(50.0, 50.0)];
        grid.rebuild(&positions);

        let hits = collect_within(&grid, positions[0], BoidId(0), 10.0);
        assert!(hits.is_empty());
    }

    #[test]
    fn radius_boundary_is_exclusive() {
        let bounds = WorldBounds::new(100.0, 100.0, 0.0);
        let mut grid = UniformGrid::new(&bounds, 10.0).unwrap();
        let positions = vec![Vec2::new(10.0, 10.0), Vec2::new(10.0, 25.0)];
        grid.rebuild(&positions);

        // Exactly 15 apart: not a neighbor at radius 15.
        assert!(collect_within(&grid, positions[0], BoidId(0), 15.0).is_empty());
        assert_eq!(collect_within(&grid, positions[0], BoidId(0), 15.01).len(), 1);
    }

    #[test]
    fn queries_near_world_edges_stay_in_bounds() {
        let bounds = WorldBounds::new(100.0, 100.0, 0.0);
        let mut grid = UniformGrid::new(&bounds, 15.0).unwrap();
        let positions = vec![Vec2::new(0.0, 0.0), Vec2::new(99.9, 99.9), Vec2::new(1.0, 99.0)];
        grid.rebuild(&positions);

        // Query boxes poking past every edge must not panic and must still
        // see in-bounds neighbors.
        let hits = collect_within(&grid, Vec2::new(0.5, 99.5), BoidId::INVALID, 3.0);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, BoidId(2));
        collect_within(&grid, Vec2::new(100.0, 0.0), BoidId::INVALID, 20.0);
    }

    #[test]
    fn agrees_with_linear_scan() {
        let bounds = WorldBounds::new(300.0, 200.0, 0.0);
        let mut rng = SmallRng::seed_from_u64(0xf10c);
        let positions: Vec<Vec2> = (0..250)
            .map(|_| Vec2::new(rng.gen_range(0.0..300.0), rng.gen_range(0.0..200.0)))
            .collect();

        let mut grid = UniformGrid::new(&bounds, 15.0).unwrap();
        let mut scan = LinearScan::new();
        grid.rebuild(&positions);
        scan.rebuild(&positions);

        for (i, &p) in positions.iter().enumerate() {
            let id = BoidId(i as u32);
            for radius in [5.0, 15.0, 40.0] {
                let from_grid = collect_within(&grid, p, id, radius);
                let from_scan = collect_within(&scan, p, id, radius);
                assert_eq!(from_grid, from_scan, "boid {i} radius {radius}");
            }
        }
    }

    #[test]
    fn rebuild_discards_stale_state() {
        let bounds = WorldBounds::new(100.0, 100.0, 0.0);
        let mut grid = UniformGrid::new(&bounds, 10.0).unwrap();
        grid.rebuild(&[Vec2::new(50.0, 50.0), Vec2::new(52.0, 50.0)]);
        assert_eq!(collect_within(&grid, Vec2::new(50.0, 50.0), BoidId(0), 5.0).len(), 1);

        // Boid 1 moves far away; the old bucket entry must be gone.
        grid.rebuild(&[Vec2::new(50.0, 50.0), Vec2::new(5.0, 5.0)]);
        assert!(collect_within(&grid, Vec2::new(50.0, 50.0), BoidId(0), 5.0).is_empty());
    }
}

mod obstacles {
    use super::*;
    use flock_core::ObstacleId;

    #[test]
    fn center_distance_trigger() {
        let field = ObstacleField::new(&[
            Obstacle::new(Vec2::new(100.0, 100.0), 8.0),
            Obstacle::new(Vec2::new(200.0, 100.0), 8.0),
        ]);

        let mut hits = Vec::new();
        field.for_each_within(Vec2::new(110.0, 100.0), 30.0, &mut |id, pos| {
            hits.push((id, pos));
        });
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, ObstacleId(0));
        assert_eq!(hits[0].1, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn trigger_boundary_is_exclusive() {
        let field = ObstacleField::new(&[Obstacle::new(Vec2::new(0.0, 0.0), 5.0)]);
        let mut count = 0;
        field.for_each_within(Vec2::new(30.0, 0.0), 30.0, &mut |_, _| count += 1);
        assert_eq!(count, 0);
        field.for_each_within(Vec2::new(29.9, 0.0), 30.0, &mut |_, _| count += 1);
        assert_eq!(count, 1);
    }

    #[test]
    fn empty_field() {
        let field = ObstacleField::new(&[]);
        assert!(field.is_empty());
        let mut count = 0;
        field.for_each_within(Vec2::new(0.0, 0.0), 1000.0, &mut |_, _| count += 1);
        assert_eq!(count, 0);
    }
}
