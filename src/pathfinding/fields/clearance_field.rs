//! The ClearanceField contains a 2D array of 8-bit values estimating how far
//! each cell is from the nearest wall of an [ObstacleGrid], capped at
//! [CLEARANCE_CAP]. Walls themselves are `0`. It behaves like a discretised,
//! one-sided signed distance field.
//!
//! A single wall cell in the middle of an open map produces rings of
//! increasing values around it (euclidean metric, rounded up):
//!
//! ```text
//!  _____________________________
//! |  |  |  |  |  |  |  |  |  |  |
//! |6_|5_|5_|5_|4_|5_|5_|5_|6_|7_|
//! |5_|5_|4_|4_|3_|4_|4_|5_|5_|6_|
//! |5_|4_|3_|3_|2_|3_|3_|4_|5_|6_|
//! |5_|4_|3_|2_|1_|2_|3_|4_|5_|6_|
//! |4_|3_|2_|1_|0_|1_|2_|3_|4_|5_|
//! |5_|4_|3_|2_|1_|2_|3_|4_|5_|6_|
//! ```
//!
//! The field answers two questions for the search:
//!
//! 1. Can an agent of a given size stand on a cell at all? Only if the
//!    clearance is at least its unit size
//! 2. How far can an agent hop from a cell without clipping through a wall?
//!    Up to the clearance minus its unit size
//!
//! Calculation is a brute force relaxation: every wall cell writes its
//! distance into the square window of [CLEARANCE_WINDOW] cells around it. This
//! is fine for tutorial sized maps and gets slow on large ones.
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Clearance of every cell in the grid. It is always derived from an
/// [ObstacleGrid] through [ClearanceField::calculate], so it only serialises
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Component, Clone, Debug, PartialEq)]
pub struct ClearanceField {
	/// Number of columns
	length: usize,
	/// Number of rows
	depth: usize,
	/// Clearance values laid out row by row
	values: Vec<u8>,
}

impl Field<u8> for ClearanceField {
	fn get(&self) -> &[u8] {
		&self.values
	}
	fn get_length(&self) -> usize {
		self.length
	}
	fn get_depth(&self) -> usize {
		self.depth
	}
}

impl ClearanceField {
	/// Create a field where every cell is fully open, i.e [CLEARANCE_CAP]
	pub fn new(dimensions: &GridDimensions) -> Self {
		ClearanceField {
			length: dimensions.get_length() as usize,
			depth: dimensions.get_depth() as usize,
			values: vec![CLEARANCE_CAP; dimensions.get_cell_count()],
		}
	}
	/// Create and calculate a field from the walls of `grid`
	pub fn from_obstacles(grid: &ObstacleGrid, metric: DistanceMetric) -> Self {
		let mut field = ClearanceField {
			length: grid.get_length(),
			depth: grid.get_depth(),
			values: vec![CLEARANCE_CAP; grid.get_length() * grid.get_depth()],
		};
		field.calculate(grid, metric);
		field
	}
	/// Recalculate the whole field from the walls of `grid` measuring
	/// distances with `metric`. Any previous content is overwritten and the
	/// field takes on the size of the grid
	pub fn calculate(&mut self, grid: &ObstacleGrid, metric: DistanceMetric) {
		self.length = grid.get_length();
		self.depth = grid.get_depth();
		self.values.clear();
		self.values.resize(self.length * self.depth, CLEARANCE_CAP);
		let max_column = self.length as i32 - 1;
		let max_row = self.depth as i32 - 1;
		for wall in grid.iter_blocked() {
			let column = wall.get_column() as i32;
			let row = wall.get_row() as i32;
			self.values[wall.get_row() * self.length + wall.get_column()] = 0;
			// clip the window to the grid
			let min_x = (column - CLEARANCE_WINDOW).clamp(0, max_column);
			let max_x = (column + CLEARANCE_WINDOW).clamp(0, max_column);
			let min_y = (row - CLEARANCE_WINDOW).clamp(0, max_row);
			let max_y = (row + CLEARANCE_WINDOW).clamp(0, max_row);
			for y in min_y..=max_y {
				for x in min_x..=max_x {
					let d = metric.distance(column - x, row - y);
					let index = y as usize * self.length + x as usize;
					if d < CLEARANCE_CAP as u32 && d < self.values[index] as u32 {
						self.values[index] = d as u8;
					}
				}
			}
		}
		debug!(
			"Calculated ClearanceField {}x{} from {} walls using {:?}",
			self.length,
			self.depth,
			grid.blocked_count(),
			metric
		);
	}
	/// Get the `(length, depth)` of the field
	pub fn get_dimensions(&self) -> (usize, usize) {
		(self.length, self.depth)
	}
	/// Clearance of a cell
	pub fn get_clearance(&self, field_cell: FieldCell) -> Result<u8, PathfindingError> {
		let index = self.try_index(field_cell)?;
		Ok(self.values[index])
	}
	/// Iterate over every cell and its clearance, row by row. Useful for
	/// shading the map
	pub fn iter_cells(&self) -> impl Iterator<Item = (FieldCell, u8)> + '_ {
		let length = self.length;
		self.values
			.iter()
			.enumerate()
			.map(move |(i, v)| (FieldCell::new(i % length, i / length), *v))
	}
}
