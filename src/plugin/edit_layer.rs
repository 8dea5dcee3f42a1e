//! Logic for handling changes to an [ObstacleGrid] and to the
//! [PathfindingSettings]. Every change is followed by an [EventRecalculate]
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Used to block or free a cell of the [ObstacleGrid]
#[derive(Event)]
pub struct EventUpdateObstacle {
	/// FieldCell to update
	cell: FieldCell,
	/// Whether the cell becomes a wall
	blocked: bool,
}

impl EventUpdateObstacle {
	/// Create a new instance of [EventUpdateObstacle]
	#[cfg(not(tarpaulin_include))]
	pub fn new(cell: FieldCell, blocked: bool) -> Self {
		EventUpdateObstacle { cell, blocked }
	}
	#[cfg(not(tarpaulin_include))]
	pub fn get_cell(&self) -> FieldCell {
		self.cell
	}
	#[cfg(not(tarpaulin_include))]
	pub fn is_blocked(&self) -> bool {
		self.blocked
	}
}

/// Replace the [PathfindingSettings] of the grid, e.g to toggle jumping or the
/// distance metric
#[derive(Event)]
pub struct EventUpdateSettings(PathfindingSettings);

impl EventUpdateSettings {
	/// Create a new instance of [EventUpdateSettings]
	#[cfg(not(tarpaulin_include))]
	pub fn new(settings: PathfindingSettings) -> Self {
		EventUpdateSettings(settings)
	}
	#[cfg(not(tarpaulin_include))]
	pub fn get(&self) -> PathfindingSettings {
		self.0
	}
}

/// Read [EventUpdateObstacle] and update the cells of the [ObstacleGrid]
#[cfg(not(tarpaulin_include))]
pub fn process_obstacle_updates(
	mut events: EventReader<EventUpdateObstacle>,
	mut query: Query<&mut ObstacleGrid>,
	mut event_recalculate: EventWriter<EventRecalculate>,
) {
	// coalesce edits so the field is only rebuilt once
	let mut changed = false;
	for event in events.read() {
		for mut grid in query.iter_mut() {
			match grid.set_obstacle(event.get_cell(), event.is_blocked()) {
				Ok(()) => changed = true,
				Err(e) => error!("Ignoring obstacle update: {}", e),
			}
		}
	}
	if changed {
		event_recalculate.write(EventRecalculate);
	}
}

/// Read [EventUpdateSettings] and apply the most recent one
#[cfg(not(tarpaulin_include))]
pub fn process_settings_updates(
	mut events: EventReader<EventUpdateSettings>,
	mut query: Query<&mut PathfindingSettings>,
	mut event_recalculate: EventWriter<EventRecalculate>,
) {
	if let Some(event) = events.read().last() {
		for mut settings in query.iter_mut() {
			*settings = event.get();
		}
		debug!("Pathfinding settings changed to {:?}", event.get());
		event_recalculate.write(EventRecalculate);
	}
}
