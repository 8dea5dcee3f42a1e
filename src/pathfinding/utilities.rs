//! Useful structures and tools used by the fields and the search
//!

use bevy::prelude::*;

/// Upper bound of any value stored in a [crate::prelude::ClearanceField]. A
/// cell further than this from every obstacle is simply "open"
pub const CLEARANCE_CAP: u8 = 10;
/// Half-width of the square window around each blocked cell that is relaxed
/// when building a [crate::prelude::ClearanceField]
pub const CLEARANCE_WINDOW: i32 = 10;
/// Longest single hop the search may take, measured as a rounded up
/// euclidean distance
pub const MAX_JUMP: u32 = 10;
/// Wall factors are cycled through `0..WALL_FACTOR_CYCLE` by
/// [crate::prelude::Agent::cycle_wall_factor]
pub const WALL_FACTOR_CYCLE: u32 = 8;
/// Default speed, in cells per second, at which an actor walks its route
pub const DEFAULT_MOVEMENT_SPEED: f32 = 3.0;

/// Number of entries in the rounded up square root lookup table. Covers every
/// squared offset inside a [CLEARANCE_WINDOW] or [MAX_JUMP] square
const ISQRT_TABLE_SIZE: usize = 256;

/// Lookup table of `ceil(sqrt(i))` built at compile time
const ISQRT_TABLE: [u32; ISQRT_TABLE_SIZE] = build_isqrt_table();

/// Fill the rounded up square root table using integer arithmetic only
const fn build_isqrt_table() -> [u32; ISQRT_TABLE_SIZE] {
	let mut table = [0; ISQRT_TABLE_SIZE];
	let mut i = 0;
	while i < ISQRT_TABLE_SIZE {
		// smallest root whose square reaches `i`
		let mut root = 0;
		while root * root < i {
			root += 1;
		}
		table[i] = root as u32;
		i += 1;
	}
	table
}

/// Rounded up square root of `value`. Small values come from a lookup table,
/// anything larger falls back to floating point
pub fn ceil_sqrt(value: u32) -> u32 {
	if (value as usize) < ISQRT_TABLE_SIZE {
		ISQRT_TABLE[value as usize]
	} else {
		(value as f32).sqrt().ceil() as u32
	}
}

/// The function used to measure how far a cell is from an obstacle when
/// building a [crate::prelude::ClearanceField]. Changing the metric changes the
/// shape of the field (round, square or diamond shaped contours around walls)
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash, Reflect)]
pub enum DistanceMetric {
	/// Straight line distance rounded up to the next integer
	#[default]
	Euclidean,
	/// Largest of the two axis distances
	Chebyshev,
	/// Sum of the two axis distances
	Manhattan,
}

impl DistanceMetric {
	/// Measure the distance of an integer offset `(dx, dy)`
	pub fn distance(&self, dx: i32, dy: i32) -> u32 {
		let dx = dx.unsigned_abs();
		let dy = dy.unsigned_abs();
		match self {
			DistanceMetric::Euclidean => ceil_sqrt(dx * dx + dy * dy),
			DistanceMetric::Chebyshev => dx.max(dy),
			DistanceMetric::Manhattan => dx + dy,
		}
	}
	/// The metric that follows this one, wrapping around. Handy for input
	/// handling that toggles through the metrics
	pub fn next(&self) -> DistanceMetric {
		match self {
			DistanceMetric::Euclidean => DistanceMetric::Chebyshev,
			DistanceMetric::Chebyshev => DistanceMetric::Manhattan,
			DistanceMetric::Manhattan => DistanceMetric::Euclidean,
		}
	}
}
