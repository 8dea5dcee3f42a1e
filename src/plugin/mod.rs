//! Defines the Bevy [Plugin] for SDF pathfinding
//!

use crate::prelude::*;
use bevy::prelude::*;

pub mod edit_layer;
pub mod route_layer;

/// Order in which the systems of the plugin run each frame
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum PathfindingSet {
	/// Apply edits to the grid and settings
	Edit,
	/// Recalculate the [ClearanceField] and the routes of agents
	Calculate,
	/// Move agents along their routes
	Traverse,
}

pub struct SdfPathfindingPlugin;

impl Plugin for SdfPathfindingPlugin {
	#[cfg(not(tarpaulin_include))]
	fn build(&self, app: &mut App) {
		app.register_type::<GridDimensions>()
			.register_type::<FieldCell>()
			.register_type::<DistanceMetric>()
			.register_type::<PathfindingSettings>()
			.register_type::<SearchNode>()
			.register_type::<Route>()
			.register_type::<TraversalCursor>()
			.register_type::<AgentPosition>()
			.add_event::<edit_layer::EventUpdateObstacle>()
			.add_event::<edit_layer::EventUpdateSettings>()
			.add_event::<route_layer::EventRecalculate>()
			.configure_sets(
				Update,
				(
					PathfindingSet::Edit,
					PathfindingSet::Calculate,
					PathfindingSet::Traverse,
				)
					.chain(),
			)
			.add_systems(
				Update,
				(
					(
						edit_layer::process_obstacle_updates,
						edit_layer::process_settings_updates,
					)
						.chain()
						.in_set(PathfindingSet::Edit),
					route_layer::recalculate_fields_and_routes.in_set(PathfindingSet::Calculate),
					route_layer::advance_agents.in_set(PathfindingSet::Traverse),
				),
			);
	}
}
