//! A Route is the result of a search, the cells an actor should walk through
//! from its start to its target. Consecutive cells may be several cells apart
//! when the search jumped across open space, an actor simply walks the straight
//! line between them.
//!
//! The [TraversalCursor] walks along the polyline of a route at a given speed
//! and loops back to the start once the end has been passed.
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Ordered nodes from the start (index `0`) to the target (last). An empty
/// route means no path currently exists
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, Default, PartialEq, Reflect)]
pub struct Route(Vec<SearchNode>);

impl Route {
	/// Create a new instance of [Route]
	pub fn new(nodes: Vec<SearchNode>) -> Self {
		Route(nodes)
	}
	/// Get a reference to the nodes of the route
	pub fn get(&self) -> &[SearchNode] {
		&self.0
	}
	pub fn len(&self) -> usize {
		self.0.len()
	}
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
	/// The cells of the route in walking order
	pub fn points(&self) -> Vec<FieldCell> {
		self.0.iter().map(|n| n.get_cell()).collect()
	}
	/// Length of the polyline through every cell of the route, in cells
	pub fn total_length(&self) -> f32 {
		self.0
			.windows(2)
			.map(|pair| pair[0].get_cell().distance_to(&pair[1].get_cell()))
			.sum()
	}
	/// Remove every node
	pub fn clear(&mut self) {
		self.0.clear();
	}
	/// Replace the nodes of the route
	pub(crate) fn replace(&mut self, nodes: Vec<SearchNode>) {
		self.0 = nodes;
	}
}

/// Progress of an actor along a [Route]
#[derive(Clone, Copy, Debug, Default, PartialEq, Reflect)]
pub struct TraversalCursor {
	/// Distance travelled along the polyline, in cells
	walked_distance: f32,
}

impl TraversalCursor {
	pub fn get_walked_distance(&self) -> f32 {
		self.walked_distance
	}
	/// Move back to the start of the route
	pub fn reset(&mut self) {
		self.walked_distance = 0.0;
	}
	/// Move `elapsed * speed` cells further along `route` and return the
	/// resulting position in grid space. Passing the end of the route loops
	/// back to its first cell. A route with fewer than two cells cannot be
	/// walked and gives [None]
	pub fn advance(&mut self, route: &Route, elapsed: f32, speed: f32) -> Option<Vec2> {
		let nodes = route.get();
		if nodes.len() < 2 {
			self.reset();
			return None;
		}
		self.walked_distance += elapsed * speed;
		let mut accumulated = 0.0;
		for pair in nodes.windows(2) {
			let from = pair[0].get_cell().as_vec2();
			let to = pair[1].get_cell().as_vec2();
			let segment = from.distance(to);
			if accumulated + segment >= self.walked_distance {
				let t = if segment > 0.0 {
					(self.walked_distance - accumulated) / segment
				} else {
					0.0
				};
				return Some(from.lerp(to, t));
			}
			accumulated += segment;
		}
		self.reset();
		Some(nodes[0].get_cell().as_vec2())
	}
}

// #[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;
	/// Route through the given cells, scores are irrelevant to walking
	fn route_from(cells: &[(usize, usize)]) -> Route {
		let nodes = cells
			.iter()
			.map(|(c, r)| SearchNode::new(FieldCell::new(*c, *r), None, 0))
			.collect();
		Route::new(nodes)
	}
	#[test]
	fn total_length_of_polyline() {
		let route = route_from(&[(0, 0), (3, 4), (3, 10)]);
		let result = route.total_length();
		let actual = 11.0;
		assert_eq!(actual, result);
	}
	#[test]
	fn empty_route_has_no_length() {
		let route = Route::default();
		assert!(route.is_empty());
		assert_eq!(0.0, route.total_length());
	}
	#[test]
	fn advance_interpolates() {
		let route = route_from(&[(0, 0), (4, 0), (4, 2)]);
		let mut cursor = TraversalCursor::default();
		let result = cursor.advance(&route, 1.0, 2.0).unwrap();
		assert_eq!(Vec2::new(2.0, 0.0), result);
		let result = cursor.advance(&route, 1.0, 3.0).unwrap();
		assert_eq!(Vec2::new(4.0, 1.0), result);
		assert_eq!(5.0, cursor.get_walked_distance());
	}
	#[test]
	fn advance_wraps_to_start() {
		let route = route_from(&[(0, 0), (3, 4)]);
		let mut cursor = TraversalCursor::default();
		let result = cursor.advance(&route, 5.0, 1.0).unwrap();
		assert_eq!(Vec2::new(3.0, 4.0), result);
		let result = cursor.advance(&route, 0.1, 1.0).unwrap();
		assert_eq!(Vec2::new(0.0, 0.0), result);
		assert_eq!(0.0, cursor.get_walked_distance());
	}
	#[test]
	fn single_point_route_cannot_be_walked() {
		let route = route_from(&[(2, 2)]);
		let mut cursor = TraversalCursor::default();
		assert_eq!(None, cursor.advance(&route, 1.0, 3.0));
		assert_eq!(0.0, cursor.get_walked_distance());
	}
	#[test]
	fn route_points_in_order() {
		let route = route_from(&[(1, 2), (8, 6)]);
		let result = route.points();
		let actual = vec![FieldCell::new(1, 2), FieldCell::new(8, 6)];
		assert_eq!(actual, result);
	}
}
