//! The SearchMap is the scratch space of a search. It holds the best
//! [SearchNode] found for every cell during a run and stays readable after the
//! run so the explored area can be visualised.
//!
//! Cells may be improved many times, the wall affinity term means scores are
//! not guaranteed to grow monotonically along the frontier so a cell is
//! relaxed again whenever a strictly cheaper score turns up. The queue is
//! always drained completely, there is no early exit when the goal is
//! reached.
//!
//! Every improvement pushes a new queue entry and leaves the old one behind,
//! so with a wall factor the queue easily holds more entries than the grid has
//! cells. It is capped at `length * depth` entries: once full, superseded
//! entries are dropped before the next push. A cell has at most one live entry
//! so this always makes room, [PathfindingError::QueueOverflow] is only
//! returned if it does not.
//!

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::prelude::*;
use bevy::prelude::*;

/// An entry waiting in the search queue
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct QueueEntry {
	/// Score of the node when it was queued
	score: u32,
	/// Monotonic counter used to keep the first queued entry first among
	/// equal scores
	sequence: u64,
	/// Flat index of the node's cell
	index: usize,
}

// reversed so that the max-heap pops the lowest score, then the oldest entry
impl Ord for QueueEntry {
	fn cmp(&self, other: &Self) -> Ordering {
		other
			.score
			.cmp(&self.score)
			.then_with(|| other.sequence.cmp(&self.sequence))
	}
}

impl PartialOrd for QueueEntry {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

/// The parameters of an agent that shape a search
#[derive(Clone, Copy, Debug)]
pub struct SearchRequest {
	/// Cell the search expands from
	pub root: FieldCell,
	/// Cell whose predecessor chain becomes the route
	pub goal: FieldCell,
	/// Half-width of the agent, cells with less clearance are rejected
	pub unit_size: u8,
	/// Weight of the wall affinity term
	pub wall_factor: u32,
	/// When `false` only single orthogonal steps are taken
	pub jumping_enabled: bool,
}

/// Best [SearchNode] of every cell of the last search run
#[derive(Clone, Debug)]
pub struct SearchMap {
	/// Number of columns
	length: usize,
	/// Number of rows
	depth: usize,
	/// Best node found so far for each cell, row by row
	nodes: Vec<Option<SearchNode>>,
}

impl SearchMap {
	/// Create an empty map for a `length` x `depth` grid
	pub fn new(length: usize, depth: usize) -> Self {
		SearchMap {
			length,
			depth,
			nodes: vec![None; length * depth],
		}
	}
	/// Forget the previous run. The map is resized if the grid changed size
	pub fn reset(&mut self, length: usize, depth: usize) {
		if length != self.length || depth != self.depth {
			warn!(
				"SearchMap resized from {}x{} to {}x{}",
				self.length, self.depth, length, depth
			);
			self.length = length;
			self.depth = depth;
		}
		self.nodes.clear();
		self.nodes.resize(length * depth, None);
	}
	pub fn get_length(&self) -> usize {
		self.length
	}
	pub fn get_depth(&self) -> usize {
		self.depth
	}
	/// Flat index of a cell
	fn index(&self, field_cell: FieldCell) -> usize {
		field_cell.get_row() * self.length + field_cell.get_column()
	}
	/// The node recorded for a cell during the last run, [None] if the cell was
	/// never reached or lies outside of the map
	pub fn get_node(&self, field_cell: FieldCell) -> Option<&SearchNode> {
		if field_cell.get_column() >= self.length || field_cell.get_row() >= self.depth {
			return None;
		}
		self.nodes[self.index(field_cell)].as_ref()
	}
	/// Iterate over every reached node, row by row
	pub fn iter_explored(&self) -> impl Iterator<Item = &SearchNode> + '_ {
		self.nodes.iter().flatten()
	}
	/// Number of cells reached during the last run
	pub fn get_explored_count(&self) -> usize {
		self.iter_explored().count()
	}
	/// Highest score of the last run, useful to normalise a heatmap
	pub fn get_max_score(&self) -> Option<u32> {
		self.iter_explored().map(|n| n.get_score()).max()
	}
	/// Run a search from `request.root` across every cell reachable by an agent
	/// of the requested size, then walk the predecessors from `request.goal`
	/// back to the root.
	///
	/// The returned nodes begin with the goal and end with the root, empty if
	/// the goal could not be reached
	pub fn search(
		&mut self,
		request: &SearchRequest,
		clearance_field: &ClearanceField,
		jump_ring: &JumpRing,
	) -> Result<Vec<SearchNode>, PathfindingError> {
		let length = clearance_field.get_length();
		let depth = clearance_field.get_depth();
		self.reset(length, depth);
		let root_index = clearance_field.try_index(request.root)?;
		clearance_field.try_index(request.goal)?;
		let unit_size = request.unit_size as u32;
		if (clearance_field.get()[root_index] as u32) < unit_size {
			debug!(
				"Search root {:?} is too narrow for unit size {}",
				request.root, request.unit_size
			);
			return Ok(Vec::new());
		}

		let capacity = length * depth;
		let mut queue = BinaryHeap::new();
		let mut sequence: u64 = 0;
		self.nodes[root_index] = Some(SearchNode::new(request.root, None, 0));
		queue.push(QueueEntry {
			score: 0,
			sequence,
			index: root_index,
		});

		while let Some(entry) = queue.pop() {
			// skip entries superseded by a cheaper one, they cannot improve anything
			let node = match self.nodes[entry.index] {
				Some(node) if node.get_score() == entry.score => node,
				_ => continue,
			};

			// anything within `clearance - unit_size` is free of walls
			let cell_clearance = clearance_field.get()[entry.index] as u32;
			let max_distance = cell_clearance.saturating_sub(unit_size).max(1);

			for offset in jump_ring.get().iter() {
				let step_distance = offset.get_distance();
				if step_distance > max_distance || (!request.jumping_enabled && step_distance > 1) {
					continue;
				}
				let Some(next) = node
					.get_cell()
					.offset(offset.get_dx(), offset.get_dy(), length, depth)
				else {
					continue;
				};
				let next_index = self.index(next);
				let next_clearance = clearance_field.get()[next_index] as u32;
				// the agent would clip into a wall
				if next_clearance < unit_size {
					continue;
				}
				// trapezoid estimate of the clearance passed along the hop
				let integrated = (next_clearance + cell_clearance) * (step_distance + 1) / 2;
				let score = node
					.get_score()
					.saturating_add(step_distance)
					.saturating_add(integrated.saturating_mul(request.wall_factor) / 6);
				let improves = match self.nodes[next_index] {
					Some(existing) => score < existing.get_score(),
					None => true,
				};
				if improves {
					self.nodes[next_index] = Some(SearchNode::new(next, Some(node.get_cell()), score));
					if queue.len() >= capacity {
						self.compact_queue(&mut queue);
						if queue.len() >= capacity {
							error!(
								"Search queue overflow, {} live entries on a {}x{} grid",
								queue.len(),
								length,
								depth
							);
							return Err(PathfindingError::QueueOverflow { capacity });
						}
					}
					sequence += 1;
					queue.push(QueueEntry {
						score,
						sequence,
						index: next_index,
					});
				}
			}
		}
		Ok(self.collect_path(request.root, request.goal))
	}
	/// Drop every queue entry whose cell has since been given a cheaper score
	fn compact_queue(&self, queue: &mut BinaryHeap<QueueEntry>) {
		let before = queue.len();
		let nodes = &self.nodes;
		queue.retain(|entry| {
			matches!(nodes[entry.index], Some(node) if node.get_score() == entry.score)
		});
		debug!(
			"Dropped {} superseded search queue entries",
			before - queue.len()
		);
	}
	/// Follow the predecessors from `goal` back to `root`. The walk is bounded
	/// by the number of cells
	fn collect_path(&self, root: FieldCell, goal: FieldCell) -> Vec<SearchNode> {
		let mut path = Vec::new();
		let Some(mut node) = self.get_node(goal).copied() else {
			return path;
		};
		let limit = self.length * self.depth;
		while node.get_cell() != root && path.len() < limit {
			path.push(node);
			match node.get_from().and_then(|from| self.get_node(from)) {
				Some(previous) => node = *previous,
				None => {
					error!("Broken predecessor chain at {:?}", node.get_cell());
					break;
				}
			}
		}
		if let Some(root_node) = self.get_node(root) {
			path.push(*root_node);
		}
		path
	}
}
