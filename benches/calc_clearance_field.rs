//! Measure calculating a ClearanceField
//!
//! World is 200x200 cells with a wall on every fifth cell of every fifth row
//!

use bevy_sdf_pathfinding_plugin::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Create a grid sprinkled with single wall cells
fn prepare_grid(length: u32, depth: u32) -> ObstacleGrid {
	let dimensions = GridDimensions::new(length, depth, 1.0);
	let mut grid = ObstacleGrid::new(&dimensions);
	for row in (0..depth as usize).step_by(5) {
		for column in (0..length as usize).step_by(5) {
			grid.set_obstacle(FieldCell::new(column, row), true).unwrap();
		}
	}
	grid
}

/// Recalculate the field from scratch
fn calc(grid: &ObstacleGrid, field: &mut ClearanceField, metric: DistanceMetric) {
	field.calculate(grid, metric);
}

pub fn criterion_benchmark(c: &mut Criterion) {
	let mut group = c.benchmark_group("algorithm_use");
	group.significance_level(0.05).sample_size(100);
	let grid = prepare_grid(200, 200);
	let mut field = ClearanceField::from_obstacles(&grid, DistanceMetric::Euclidean);
	for metric in [DistanceMetric::Euclidean, DistanceMetric::Chebyshev, DistanceMetric::Manhattan] {
		group.bench_function(format!("calc_clearance_field_{:?}", metric), |b| {
			b.iter(|| calc(black_box(&grid), black_box(&mut field), black_box(metric)))
		});
	}
	group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
