//! Every offset a search may hop to from a node
//!

use crate::prelude::*;
use bevy::prelude::*;

/// A single hop, its offset and rounded up euclidean length
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JumpOffset {
	/// Column offset
	dx: i32,
	/// Row offset
	dy: i32,
	/// Rounded up euclidean length of the hop
	distance: u32,
}

impl JumpOffset {
	pub fn get_dx(&self) -> i32 {
		self.dx
	}
	pub fn get_dy(&self) -> i32 {
		self.dy
	}
	pub fn get_distance(&self) -> u32 {
		self.distance
	}
}

/// Every offset `(dx, dy)` whose rounded up euclidean length lies within
/// `1..=max_jump`. Built once and shared by every search.
///
/// Offsets are ordered by `dx` then `dy`, both ascending. The order only
/// matters for breaking ties between equally scored nodes
#[derive(Component, Clone, Debug)]
pub struct JumpRing(Vec<JumpOffset>);

impl Default for JumpRing {
	fn default() -> Self {
		JumpRing::new(MAX_JUMP)
	}
}

impl JumpRing {
	/// Create a ring of offsets up to `max_jump` away
	pub fn new(max_jump: u32) -> Self {
		let radius = max_jump as i32;
		let mut offsets = Vec::new();
		for dx in -radius..=radius {
			for dy in -radius..=radius {
				let distance = DistanceMetric::Euclidean.distance(dx, dy);
				if distance > 0 && distance <= max_jump {
					offsets.push(JumpOffset { dx, dy, distance });
				}
			}
		}
		JumpRing(offsets)
	}
	/// Get a reference to the offsets
	pub fn get(&self) -> &[JumpOffset] {
		&self.0
	}
	/// Longest hop in the ring
	pub fn get_max_distance(&self) -> u32 {
		self.0.iter().map(|o| o.distance).max().unwrap_or(0)
	}
}
