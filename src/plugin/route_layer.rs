//! Logic relating to [ClearanceField] recalculation and [Agent] routes
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Request a fresh [ClearanceField] and a new route for every [Agent]
#[derive(Event, Default, Clone, Copy, Debug)]
pub struct EventRecalculate;

/// World space position of an [Agent] along its route, [None] while it has no
/// route to walk
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Reflect)]
pub struct AgentPosition(Option<Vec2>);

impl AgentPosition {
	pub fn get(&self) -> Option<Vec2> {
		self.0
	}
}

/// Process [EventRecalculate] by rebuilding the [ClearanceField] from the
/// [ObstacleGrid] and searching a new route for every [Agent]. An agent that
/// has never been searched for is routed as soon as a grid exists, even if it
/// was spawned before the grid
#[cfg(not(tarpaulin_include))]
pub fn recalculate_fields_and_routes(
	mut events: EventReader<EventRecalculate>,
	mut grid_q: Query<(
		&ObstacleGrid,
		&mut ClearanceField,
		&PathfindingSettings,
		&JumpRing,
	)>,
	mut agent_q: Query<&mut Agent>,
) {
	let recalculate = !events.is_empty();
	events.clear();
	for (grid, mut field, settings, jump_ring) in grid_q.iter_mut() {
		if recalculate {
			field.calculate(grid, settings.get_metric());
		}
		for mut agent in agent_q.iter_mut() {
			if recalculate || !agent.has_searched() {
				if let Err(e) = agent.find_path(&field, jump_ring, settings.is_jumping_enabled()) {
					error!("Route search failed: {}", e);
				}
			}
		}
	}
}

/// Walk each [Agent] along its route and update its [AgentPosition]
#[cfg(not(tarpaulin_include))]
pub fn advance_agents(
	time: Res<Time>,
	grid_q: Query<(&GridDimensions, &PathfindingSettings)>,
	mut agent_q: Query<(&mut Agent, &mut AgentPosition)>,
) {
	for (dimensions, settings) in grid_q.iter() {
		for (mut agent, mut position) in agent_q.iter_mut() {
			let grid_position = agent.advance(time.delta_secs(), settings.get_movement_speed());
			position.0 = grid_position.map(|p| dimensions.get_xy_from_grid_position(p));
		}
	}
}
