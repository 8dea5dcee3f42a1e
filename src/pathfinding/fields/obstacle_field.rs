//! The ObstacleGrid is a 2D array of flags marking which cells of the map are
//! walls. It is the only input of a [ClearanceField] and the part of the map
//! an editor or game logic mutates.
//!
//! A small map with a wall running down from the top:
//!
//! ```text
//!  _____________________________
//! |__|__|__|__|x_|__|__|__|__|__|
//! |__|__|__|__|x_|__|__|__|__|__|
//! |__|__|__|__|x_|__|__|__|__|__|
//! |__|__|__|__|x_|__|__|__|__|__|
//! |__|__|__|__|__|__|__|__|__|__|
//! ```
//!
//! Editing a cell does not update anything else, the caller decides when the
//! [ClearanceField] and routes get recalculated.
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Blocked/free flag of every cell in the grid
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Component, Clone, Debug, PartialEq)]
pub struct ObstacleGrid {
	/// Number of columns
	length: usize,
	/// Number of rows
	depth: usize,
	/// `true` marks a blocked cell, laid out row by row
	cells: Vec<bool>,
}

impl Field<bool> for ObstacleGrid {
	fn get(&self) -> &[bool] {
		&self.cells
	}
	fn get_length(&self) -> usize {
		self.length
	}
	fn get_depth(&self) -> usize {
		self.depth
	}
}

impl ObstacleGrid {
	/// Create an open grid sized from the [GridDimensions]
	pub fn new(dimensions: &GridDimensions) -> Self {
		ObstacleGrid {
			length: dimensions.get_length() as usize,
			depth: dimensions.get_depth() as usize,
			cells: vec![false; dimensions.get_cell_count()],
		}
	}
	/// Build a grid from rows of flags, every row must have the same length
	pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, PathfindingError> {
		let depth = rows.len();
		let length = rows.first().map(|r| r.len()).unwrap_or(0);
		if length == 0 {
			return Err(PathfindingError::MalformedGrid(
				"a grid needs at least one cell".to_string(),
			));
		}
		let mut cells = Vec::with_capacity(length * depth);
		for (i, row) in rows.into_iter().enumerate() {
			if row.len() != length {
				return Err(PathfindingError::MalformedGrid(format!(
					"row {} has {} cells, expected {}",
					i,
					row.len(),
					length
				)));
			}
			cells.extend(row);
		}
		Ok(ObstacleGrid {
			length,
			depth,
			cells,
		})
	}
	/// Mark a cell as blocked or free. Nothing is recalculated, see
	/// [ClearanceField::calculate]
	pub fn set_obstacle(&mut self, field_cell: FieldCell, blocked: bool) -> Result<(), PathfindingError> {
		let index = self.try_index(field_cell)?;
		self.cells[index] = blocked;
		Ok(())
	}
	/// Whether a cell is blocked
	pub fn is_blocked(&self, field_cell: FieldCell) -> Result<bool, PathfindingError> {
		let index = self.try_index(field_cell)?;
		Ok(self.cells[index])
	}
	/// Free every cell
	pub fn clear(&mut self) {
		self.cells.fill(false);
	}
	/// Iterate over the blocked cells, row by row
	pub fn iter_blocked(&self) -> impl Iterator<Item = FieldCell> + '_ {
		let length = self.length;
		self.cells
			.iter()
			.enumerate()
			.filter(|(_, blocked)| **blocked)
			.map(move |(i, _)| FieldCell::new(i % length, i / length))
	}
	/// Number of blocked cells
	pub fn blocked_count(&self) -> usize {
		self.cells.iter().filter(|b| **b).count()
	}
	/// Stamp `count` square blocks of half-size 1 or 2 onto the grid, each one
	/// randomly either walling off or clearing its area. Block centres keep
	/// `margin` cells away from the edges so that agents placed near the
	/// borders keep some room
	#[cfg(feature = "random")]
	pub fn scatter_blocks<R: rand::Rng>(&mut self, rng: &mut R, count: usize, margin: usize) {
		self.clear();
		if self.length <= margin * 2 || self.depth <= margin * 2 {
			warn!(
				"Grid {}x{} is too small for a margin of {}, no blocks scattered",
				self.length, self.depth, margin
			);
			return;
		}
		for _ in 0..count {
			let column = rng.random_range(margin..self.length - margin) as i32;
			let row = rng.random_range(margin..self.depth - margin) as i32;
			let size: i32 = rng.random_range(1..=2);
			let blocked = rng.random_bool(0.5);
			for dy in -size..=size {
				for dx in -size..=size {
					let (x, y) = (column + dx, row + dy);
					if x >= 0 && y >= 0 && (x as usize) < self.length && (y as usize) < self.depth {
						self.cells[y as usize * self.length + x as usize] = blocked;
					}
				}
			}
		}
	}
	/// From a `ron` file generate the [ObstacleGrid]
	#[cfg(feature = "ron")]
	pub fn from_ron(path: &str) -> Result<Self, PathfindingError> {
		let file = std::fs::File::open(path)?;
		let grid: ObstacleGrid = ron::de::from_reader(file)?;
		if grid.length * grid.depth != grid.cells.len() || grid.cells.is_empty() {
			return Err(PathfindingError::MalformedGrid(format!(
				"{} cells cannot fill a {}x{} grid",
				grid.cells.len(),
				grid.length,
				grid.depth
			)));
		}
		Ok(grid)
	}
	/// From a CSV file of `0` (free) and `1` (blocked) values generate the
	/// [ObstacleGrid], each record being a row of the map
	#[cfg(feature = "csv")]
	pub fn from_csv(path: &str) -> Result<Self, PathfindingError> {
		let data = std::fs::File::open(path)?;
		let mut rdr = csv::ReaderBuilder::new()
			.has_headers(false)
			.from_reader(data);
		let mut rows = Vec::new();
		for record in rdr.records() {
			let mut row = Vec::new();
			for value in record?.iter() {
				match value.trim() {
					"0" => row.push(false),
					"1" => row.push(true),
					other => {
						return Err(PathfindingError::MalformedGrid(format!(
							"CSV expects 0 or 1 values, found `{}`",
							other
						)))
					}
				}
			}
			rows.push(row);
		}
		ObstacleGrid::from_rows(rows)
	}
	/// Create an [ObstacleGrid] from an image where each pixel is a cell, any
	/// pixel darker than `threshold` (average of its rgb channels) is a wall
	#[cfg(feature = "heightmap")]
	pub fn from_heightmap(path: &str, threshold: u8) -> Result<Self, PathfindingError> {
		use photon_rs::native::open_image;
		let img = open_image(path)
			.map_err(|e| PathfindingError::MalformedGrid(format!("unable to open image: {:?}", e)))?;
		let length = img.get_width() as usize;
		let depth = img.get_height() as usize;
		let pixels = img.get_raw_pixels();
		let mut rows = Vec::with_capacity(depth);
		for row in 0..depth {
			let mut cells = Vec::with_capacity(length);
			for column in 0..length {
				// rgba layout
				let i = (row * length + column) * 4;
				let luma = (pixels[i] as u32 + pixels[i + 1] as u32 + pixels[i + 2] as u32) / 3;
				cells.push(luma < threshold as u32);
			}
			rows.push(cells);
		}
		ObstacleGrid::from_rows(rows)
	}
}
