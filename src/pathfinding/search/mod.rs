//! Best-first search over the grid guided by a [ClearanceField].
//!
//! Instead of stepping one cell at a time the search may hop up to
//! [MAX_JUMP] cells away from the node it expands. How far it may hop from a
//! node is limited by the clearance of that node minus the size of the agent,
//! anything within that radius is guaranteed to be free of walls. Large open
//! areas are therefore crossed in a few long hops while narrow corridors fall
//! back to single steps.
//!
//! Each hop costs its length plus a wall affinity term derived from the
//! clearance of both ends of the hop:
//!
//! ```text
//! integrated = (clearance_next + clearance_current) * (hop + 1) / 2
//! score      = score_current + hop + integrated * wall_factor / 6
//! ```
//!
//! With a `wall_factor` of `0` the score is purely distance based, a larger
//! factor makes open space more expensive so agents hug the walls.
//!

pub mod jump_ring;
pub mod search_map;

use crate::prelude::*;
use bevy::prelude::*;

/// A cell reached by the search
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Reflect)]
pub struct SearchNode {
	/// Position of the node
	cell: FieldCell,
	/// The node this one was reached from, [None] for the root of a search
	from: Option<FieldCell>,
	/// Accumulated cost of reaching this node from the root
	score: u32,
}

impl SearchNode {
	/// Create a new instance of [SearchNode]
	pub fn new(cell: FieldCell, from: Option<FieldCell>, score: u32) -> Self {
		SearchNode { cell, from, score }
	}
	pub fn get_cell(&self) -> FieldCell {
		self.cell
	}
	/// The predecessor of the node
	pub fn get_from(&self) -> Option<FieldCell> {
		self.from
	}
	pub fn get_score(&self) -> u32 {
		self.score
	}
}
