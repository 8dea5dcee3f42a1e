//! Errors raised by the public accessors and the search
//!

use thiserror::Error;

/// Failures a caller can act upon. An unreachable target is deliberately not
/// one of them, it is represented by an empty [crate::prelude::Route]
#[derive(Debug, Error)]
pub enum PathfindingError {
	/// A cell was requested that lies outside of the grid
	#[error("Cell (column {column}, row {row}) is outside of the {length}x{depth} grid")]
	OutOfBounds {
		/// Requested column
		column: usize,
		/// Requested row
		row: usize,
		/// Number of columns in the grid
		length: usize,
		/// Number of rows in the grid
		depth: usize,
	},
	/// The search queue still held as many entries as there are cells after
	/// dropping superseded ones, this indicates a broken neighbour model
	/// rather than a bad map
	#[error("Search queue overflow, {capacity} live entries after compaction")]
	QueueOverflow {
		/// Number of cells in the grid
		capacity: usize,
	},
	/// Obstacle data read from disk does not describe a rectangular grid
	#[error("Obstacle data is malformed: {0}")]
	MalformedGrid(String),
	/// Reading a map from disk failed
	#[error(transparent)]
	Io(#[from] std::io::Error),
	/// A `ron` document could not be deserialised
	#[cfg(feature = "ron")]
	#[error(transparent)]
	Ron(#[from] ron::error::SpannedError),
	/// A `csv` document could not be read
	#[cfg(feature = "csv")]
	#[error(transparent)]
	Csv(#[from] csv::Error),
}
