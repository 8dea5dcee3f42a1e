//! An Agent is anything that needs a [Route] across the grid. It describes how
//! wide the actor is and how strongly it prefers to stay close to walls, and
//! owns the scratch [SearchMap] and [Route] of its searches.
//!
//! Routes are found by searching outwards from the target towards the start,
//! so following the predecessors from the start directly produces the route
//! in walking order.
//!
//! # Route quality
//!
//! With a `wall_factor` of `0` a route is as short as the jump ring allows.
//! Any larger factor adds a cost proportional to the clearance of the cells
//! passed, so the route minimises that biased cost instead of its length. An
//! agent with a high factor takes noticeably longer routes that run along
//! walls.
//!

use crate::prelude::*;
use bevy::prelude::*;

/// An actor looking for a route from `start` to `target`
#[derive(Component, Clone, Debug)]
pub struct Agent {
	/// Where the route begins
	start: FieldCell,
	/// Where the route ends
	target: FieldCell,
	/// Half-width of the actor, it can only stand on cells with at least this
	/// much clearance
	unit_size: u8,
	/// Preference for low clearance cells, `0` has no preference
	wall_factor: u32,
	/// Result of the last search
	route: Route,
	/// Scratch space of the searches, holds the explored cells of the last one
	search_map: SearchMap,
	/// Progress along the route
	cursor: TraversalCursor,
	/// Whether [Agent::find_path] has run at least once
	searched: bool,
}

impl Agent {
	/// Create a new instance of [Agent] with an empty route. The search scratch
	/// space is sized from the [GridDimensions]
	pub fn new(
		start: FieldCell,
		target: FieldCell,
		unit_size: u8,
		wall_factor: u32,
		dimensions: &GridDimensions,
	) -> Self {
		Agent {
			start,
			target,
			unit_size,
			wall_factor,
			route: Route::default(),
			search_map: SearchMap::new(
				dimensions.get_length() as usize,
				dimensions.get_depth() as usize,
			),
			cursor: TraversalCursor::default(),
			searched: false,
		}
	}
	pub fn get_start(&self) -> FieldCell {
		self.start
	}
	pub fn set_start(&mut self, start: FieldCell) {
		self.start = start;
	}
	pub fn get_target(&self) -> FieldCell {
		self.target
	}
	pub fn set_target(&mut self, target: FieldCell) {
		self.target = target;
	}
	pub fn get_unit_size(&self) -> u8 {
		self.unit_size
	}
	pub fn set_unit_size(&mut self, unit_size: u8) {
		self.unit_size = unit_size;
	}
	pub fn get_wall_factor(&self) -> u32 {
		self.wall_factor
	}
	pub fn set_wall_factor(&mut self, wall_factor: u32) {
		self.wall_factor = wall_factor;
	}
	/// Step the wall factor to the next value in `0..WALL_FACTOR_CYCLE`
	pub fn cycle_wall_factor(&mut self) {
		self.wall_factor = (self.wall_factor + 1) % WALL_FACTOR_CYCLE;
	}
	/// The route found by the last search
	pub fn get_route(&self) -> &Route {
		&self.route
	}
	/// The explored cells of the last search
	pub fn get_search_map(&self) -> &SearchMap {
		&self.search_map
	}
	pub fn get_cursor(&self) -> &TraversalCursor {
		&self.cursor
	}
	/// `false` until the first search, successful or not
	pub fn has_searched(&self) -> bool {
		self.searched
	}
	/// Search the `clearance_field` for a route from the start to the target,
	/// replacing the previous route.
	///
	/// An unreachable target, or one too narrow for the agent, leaves an empty
	/// route and is not an error. The route is also emptied when an error is
	/// returned
	pub fn find_path(
		&mut self,
		clearance_field: &ClearanceField,
		jump_ring: &JumpRing,
		jumping_enabled: bool,
	) -> Result<(), PathfindingError> {
		self.searched = true;
		self.route.clear();
		clearance_field.try_index(self.start)?;
		clearance_field.try_index(self.target)?;
		let request = SearchRequest {
			root: self.target,
			goal: self.start,
			unit_size: self.unit_size,
			wall_factor: self.wall_factor,
			jumping_enabled,
		};
		let nodes = self.search_map.search(&request, clearance_field, jump_ring)?;
		if nodes.is_empty() {
			debug!(
				"No route from {:?} to {:?} for unit size {}",
				self.start, self.target, self.unit_size
			);
		} else {
			debug!(
				"Route from {:?} to {:?} through {} cells, {} explored",
				self.start,
				self.target,
				nodes.len(),
				self.search_map.get_explored_count()
			);
		}
		self.route.replace(nodes);
		Ok(())
	}
	/// Walk `elapsed * speed` cells further along the route, see
	/// [TraversalCursor::advance]
	pub fn advance(&mut self, elapsed: f32, speed: f32) -> Option<Vec2> {
		self.cursor.advance(&self.route, elapsed, speed)
	}
}

// #[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;
	#[test]
	fn open_grid_single_jump() {
		let dimensions = GridDimensions::new(10, 10, 1.0);
		let grid = ObstacleGrid::new(&dimensions);
		let field = ClearanceField::from_obstacles(&grid, DistanceMetric::Euclidean);
		let ring = JumpRing::default();
		let mut agent = Agent::new(FieldCell::new(1, 2), FieldCell::new(8, 6), 1, 0, &dimensions);
		agent.find_path(&field, &ring, true).unwrap();
		let result = agent.get_route().points();
		let actual = vec![FieldCell::new(1, 2), FieldCell::new(8, 6)];
		assert_eq!(actual, result);
		assert!(agent.get_route().total_length() <= 11.0);
	}
	#[test]
	fn route_runs_start_to_target() {
		let dimensions = GridDimensions::new(10, 10, 1.0);
		let grid = ObstacleGrid::new(&dimensions);
		let field = ClearanceField::from_obstacles(&grid, DistanceMetric::Euclidean);
		let ring = JumpRing::default();
		let mut agent = Agent::new(FieldCell::new(0, 0), FieldCell::new(0, 4), 1, 0, &dimensions);
		agent.find_path(&field, &ring, false).unwrap();
		let result = agent.get_route().points();
		let actual = vec![
			FieldCell::new(0, 0),
			FieldCell::new(0, 1),
			FieldCell::new(0, 2),
			FieldCell::new(0, 3),
			FieldCell::new(0, 4),
		];
		assert_eq!(actual, result);
		// scores count down towards the target, the root of the search
		assert_eq!(4, agent.get_route().get()[0].get_score());
		assert_eq!(0, agent.get_route().get()[4].get_score());
	}
	#[test]
	fn narrow_target_gives_empty_route() {
		let dimensions = GridDimensions::new(10, 10, 1.0);
		let mut grid = ObstacleGrid::new(&dimensions);
		grid.set_obstacle(FieldCell::new(8, 7), true).unwrap();
		let field = ClearanceField::from_obstacles(&grid, DistanceMetric::Euclidean);
		let ring = JumpRing::default();
		let mut agent = Agent::new(FieldCell::new(1, 2), FieldCell::new(8, 6), 2, 0, &dimensions);
		agent.find_path(&field, &ring, true).unwrap();
		assert!(agent.get_route().is_empty());
		assert_eq!(0, agent.get_search_map().get_explored_count());
	}
	#[test]
	fn out_of_bounds_start_clears_route() {
		let dimensions = GridDimensions::new(10, 10, 1.0);
		let grid = ObstacleGrid::new(&dimensions);
		let field = ClearanceField::from_obstacles(&grid, DistanceMetric::Euclidean);
		let ring = JumpRing::default();
		let mut agent = Agent::new(FieldCell::new(1, 2), FieldCell::new(8, 6), 1, 0, &dimensions);
		assert!(!agent.has_searched());
		agent.find_path(&field, &ring, true).unwrap();
		assert!(agent.has_searched());
		assert!(!agent.get_route().is_empty());
		agent.set_start(FieldCell::new(10, 2));
		let result = agent.find_path(&field, &ring, true);
		assert!(matches!(result, Err(PathfindingError::OutOfBounds { column: 10, row: 2, .. })));
		assert!(agent.get_route().is_empty());
	}
	#[test]
	fn wall_factor_cycles() {
		let dimensions = GridDimensions::new(4, 4, 1.0);
		let mut agent = Agent::new(FieldCell::new(0, 0), FieldCell::new(3, 3), 1, 6, &dimensions);
		agent.cycle_wall_factor();
		assert_eq!(7, agent.get_wall_factor());
		agent.cycle_wall_factor();
		assert_eq!(0, agent.get_wall_factor());
	}
	#[test]
	fn wall_factor_hugs_walls() {
		let dimensions = GridDimensions::new(30, 11, 1.0);
		let mut grid = ObstacleGrid::new(&dimensions);
		for column in 0..30 {
			grid.set_obstacle(FieldCell::new(column, 0), true).unwrap();
		}
		let field = ClearanceField::from_obstacles(&grid, DistanceMetric::Euclidean);
		let ring = JumpRing::default();
		let mut agent = Agent::new(FieldCell::new(2, 10), FieldCell::new(27, 10), 1, 0, &dimensions);
		agent.find_path(&field, &ring, true).unwrap();
		// only horizontal hops keep the cost down to the distance
		assert!(agent.get_route().points().iter().all(|c| c.get_row() == 10));
		assert_eq!(25, agent.get_route().get()[0].get_score());

		agent.set_wall_factor(7);
		agent.find_path(&field, &ring, true).unwrap();
		assert!(agent.get_route().points().iter().any(|c| c.get_row() == 1));
	}
	#[test]
	fn advance_along_route() {
		let dimensions = GridDimensions::new(10, 10, 1.0);
		let grid = ObstacleGrid::new(&dimensions);
		let field = ClearanceField::from_obstacles(&grid, DistanceMetric::Euclidean);
		let ring = JumpRing::default();
		let mut agent = Agent::new(FieldCell::new(0, 0), FieldCell::new(6, 0), 1, 0, &dimensions);
		assert_eq!(None, agent.advance(1.0, 3.0));
		agent.find_path(&field, &ring, true).unwrap();
		let result = agent.advance(1.0, 3.0);
		let actual = Some(Vec2::new(3.0, 0.0));
		assert_eq!(actual, result);
		assert_eq!(3.0, agent.get_cursor().get_walked_distance());
	}
}
