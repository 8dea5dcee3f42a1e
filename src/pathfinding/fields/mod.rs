//! The kinds of fields used by the algorithm
//!

pub mod clearance_field;
pub mod obstacle_field;

use crate::prelude::*;
use bevy::prelude::*;

/// Defines required access to field arrays
pub trait Field<T: Copy> {
	/// Get a reference to the field array, laid out row by row
	fn get(&self) -> &[T];
	/// Number of columns
	fn get_length(&self) -> usize;
	/// Number of rows
	fn get_depth(&self) -> usize;
	/// Whether a field cell lies inside the field
	fn contains(&self, field_cell: FieldCell) -> bool {
		field_cell.get_column() < self.get_length() && field_cell.get_row() < self.get_depth()
	}
	/// Flat index of a field cell, or an error if it sits outside the field
	fn try_index(&self, field_cell: FieldCell) -> Result<usize, PathfindingError> {
		if self.contains(field_cell) {
			Ok(field_cell.get_row() * self.get_length() + field_cell.get_column())
		} else {
			Err(PathfindingError::OutOfBounds {
				column: field_cell.get_column(),
				row: field_cell.get_row(),
				length: self.get_length(),
				depth: self.get_depth(),
			})
		}
	}
	/// Retrieve a field cell value
	fn get_field_cell_value(&self, field_cell: FieldCell) -> T {
		if !self.contains(field_cell) {
			panic!("Cannot get a field value, index out of bounds. Asked for column {}, row {}, field column length is {}, field row length is {}", field_cell.get_column(), field_cell.get_row(), self.get_length(), self.get_depth())
		}
		self.get()[field_cell.get_row() * self.get_length() + field_cell.get_column()]
	}
}

/// ID of a cell within a field
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash, Reflect)]
pub struct FieldCell((usize, usize));

impl FieldCell {
	/// Create a new instance of [FieldCell]
	pub fn new(column: usize, row: usize) -> Self {
		FieldCell((column, row))
	}
	/// Get the column
	pub fn get_column(&self) -> usize {
		self.0 .0
	}
	/// Get the row
	pub fn get_row(&self) -> usize {
		self.0 .1
	}
	/// Shift the cell by an offset, [None] when the result would leave a
	/// `length` x `depth` grid
	pub fn offset(&self, dx: i32, dy: i32, length: usize, depth: usize) -> Option<FieldCell> {
		let column = self.get_column() as i64 + dx as i64;
		let row = self.get_row() as i64 + dy as i64;
		if column < 0 || row < 0 || column >= length as i64 || row >= depth as i64 {
			None
		} else {
			Some(FieldCell::new(column as usize, row as usize))
		}
	}
	/// Integer `(dx, dy)` offset that leads from `self` to `target`
	pub fn delta_to(&self, target: &FieldCell) -> (i32, i32) {
		(
			target.get_column() as i32 - self.get_column() as i32,
			target.get_row() as i32 - self.get_row() as i32,
		)
	}
	/// Straight line distance between the centres of two cells
	pub fn distance_to(&self, target: &FieldCell) -> f32 {
		let (dx, dy) = self.delta_to(target);
		((dx * dx + dy * dy) as f32).sqrt()
	}
	/// The cell as a point in grid space
	pub fn as_vec2(&self) -> Vec2 {
		Vec2::new(self.get_column() as f32, self.get_row() as f32)
	}
}

/// The dimensions of the world
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Component, Clone, Copy, Debug, PartialEq, Reflect)]
pub struct GridDimensions {
	/// Number of `(columns, rows)` in the grid
	size: (u32, u32),
	/// Length of the side of a cell in world units. In 2d this is typically
	/// the pixel size of a tile sprite
	cell_size: f32,
}

impl GridDimensions {
	/// Create a new instance of [GridDimensions]. `length` is the number of
	/// columns along `x`, `depth` the number of rows and `cell_size` how many
	/// world units a cell spans
	pub fn new(length: u32, depth: u32, cell_size: f32) -> Self {
		if length == 0 || depth == 0 {
			panic!(
				"Grid dimensions `({}, {})` are invalid, a grid needs at least one cell",
				length, depth
			);
		}
		if cell_size <= 0.0 {
			panic!("Cell size must be greater than zero, got {}", cell_size);
		}
		GridDimensions {
			size: (length, depth),
			cell_size,
		}
	}
	/// Get the `(columns, rows)` of the grid
	pub fn get_size(&self) -> (u32, u32) {
		self.size
	}
	/// Number of columns
	pub fn get_length(&self) -> u32 {
		self.size.0
	}
	/// Number of rows
	pub fn get_depth(&self) -> u32 {
		self.size.1
	}
	pub fn get_cell_size(&self) -> f32 {
		self.cell_size
	}
	/// Total number of cells
	pub fn get_cell_count(&self) -> usize {
		self.size.0 as usize * self.size.1 as usize
	}
	/// Convert a point in grid space (cell units, `(0, 0)` being the centre of
	/// the top left cell) into 2d world space. The world is centred on the
	/// origin with `y` pointing up, so rows grow towards negative `y`
	pub fn get_xy_from_grid_position(&self, position: Vec2) -> Vec2 {
		let x_origin = -(self.get_length() as f32 * self.cell_size) / 2.0;
		let y_origin = (self.get_depth() as f32 * self.cell_size) / 2.0;
		// NB: add half a cell so the point refers to the centre of the cell
		Vec2::new(
			x_origin + (position.x + 0.5) * self.cell_size,
			y_origin - (position.y + 0.5) * self.cell_size,
		)
	}
	/// From a field cell retrieve the 2d world position of its centre
	pub fn get_xy_from_field_cell(&self, field_cell: FieldCell) -> Vec2 {
		self.get_xy_from_grid_position(field_cell.as_vec2())
	}
	/// From a position in 2d world space find the [FieldCell] it sits in, [None]
	/// if the position lies outside of the grid
	pub fn get_field_cell_from_xy(&self, position: Vec2) -> Option<FieldCell> {
		let world_length = self.get_length() as f32 * self.cell_size;
		let world_depth = self.get_depth() as f32 * self.cell_size;
		// move the origin into the top left corner
		let x = position.x + world_length / 2.0;
		let y = world_depth / 2.0 - position.y;
		if x < 0.0 || y < 0.0 || x >= world_length || y >= world_depth {
			warn!(
				"Position x {}, y {} is outside of the grid, cannot calculate a FieldCell",
				position.x, position.y
			);
			return None;
		}
		let column = (x / self.cell_size).floor() as usize;
		let row = (y / self.cell_size).floor() as usize;
		Some(FieldCell::new(column, row))
	}
}
