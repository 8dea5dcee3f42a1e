//! Defines the components that make up a pathfinding grid entity
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Runtime switches shared by every [Agent] of a grid
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Component, Clone, Copy, Debug, PartialEq, Reflect)]
pub struct PathfindingSettings {
	/// How the [ClearanceField] measures distances
	metric: DistanceMetric,
	/// When `false` searches only take single orthogonal steps
	jumping_enabled: bool,
	/// Speed at which agents walk their routes, in cells per second
	movement_speed: f32,
}

impl Default for PathfindingSettings {
	fn default() -> Self {
		PathfindingSettings {
			metric: DistanceMetric::default(),
			jumping_enabled: true,
			movement_speed: DEFAULT_MOVEMENT_SPEED,
		}
	}
}

impl PathfindingSettings {
	/// Create a new instance of [PathfindingSettings]
	pub fn new(metric: DistanceMetric, jumping_enabled: bool, movement_speed: f32) -> Self {
		if movement_speed < 0.0 {
			warn!(
				"Negative movement speed {} would walk routes backwards, using 0",
				movement_speed
			);
		}
		PathfindingSettings {
			metric,
			jumping_enabled,
			movement_speed: movement_speed.max(0.0),
		}
	}
	pub fn get_metric(&self) -> DistanceMetric {
		self.metric
	}
	pub fn set_metric(&mut self, metric: DistanceMetric) {
		self.metric = metric;
	}
	pub fn is_jumping_enabled(&self) -> bool {
		self.jumping_enabled
	}
	pub fn set_jumping_enabled(&mut self, jumping_enabled: bool) {
		self.jumping_enabled = jumping_enabled;
	}
	pub fn get_movement_speed(&self) -> f32 {
		self.movement_speed
	}
	pub fn set_movement_speed(&mut self, movement_speed: f32) {
		self.movement_speed = movement_speed.max(0.0);
	}
	/// From a `ron` file load [PathfindingSettings], the values are checked the
	/// same way as [PathfindingSettings::new]
	#[cfg(feature = "ron")]
	pub fn from_ron(path: &str) -> Result<Self, PathfindingError> {
		let file = std::fs::File::open(path)?;
		let loaded: PathfindingSettings = ron::de::from_reader(file)?;
		Ok(PathfindingSettings::new(
			loaded.metric,
			loaded.jumping_enabled,
			loaded.movement_speed,
		))
	}
}

/// Everything needed to calculate routes across a grid. Spawn it once, then
/// spawn actors with an [AgentBundle]
#[derive(Bundle)]
pub struct SdfPathfindingBundle {
	grid_dimensions: GridDimensions,
	obstacle_grid: ObstacleGrid,
	clearance_field: ClearanceField,
	settings: PathfindingSettings,
	jump_ring: JumpRing,
}

impl SdfPathfindingBundle {
	/// Create a new instance of [SdfPathfindingBundle] with an open grid of
	/// `length` columns and `depth` rows
	pub fn new(length: u32, depth: u32, cell_size: f32) -> Self {
		let grid_dimensions = GridDimensions::new(length, depth, cell_size);
		let obstacle_grid = ObstacleGrid::new(&grid_dimensions);
		SdfPathfindingBundle::from_obstacle_grid(
			obstacle_grid,
			cell_size,
			PathfindingSettings::default(),
		)
	}
	/// Create a new instance of [SdfPathfindingBundle] around an existing
	/// [ObstacleGrid], the [ClearanceField] is calculated straight away
	pub fn from_obstacle_grid(
		obstacle_grid: ObstacleGrid,
		cell_size: f32,
		settings: PathfindingSettings,
	) -> Self {
		let grid_dimensions = GridDimensions::new(
			obstacle_grid.get_length() as u32,
			obstacle_grid.get_depth() as u32,
			cell_size,
		);
		let clearance_field = ClearanceField::from_obstacles(&obstacle_grid, settings.get_metric());
		SdfPathfindingBundle {
			grid_dimensions,
			obstacle_grid,
			clearance_field,
			settings,
			jump_ring: JumpRing::default(),
		}
	}
	/// Create a new instance of [SdfPathfindingBundle] where the [ObstacleGrid]
	/// is read from a `ron` file
	#[cfg(feature = "ron")]
	pub fn new_from_disk(path: &str, cell_size: f32) -> Result<Self, PathfindingError> {
		let obstacle_grid = ObstacleGrid::from_ron(path)?;
		Ok(SdfPathfindingBundle::from_obstacle_grid(
			obstacle_grid,
			cell_size,
			PathfindingSettings::default(),
		))
	}
	/// Create a new instance of [SdfPathfindingBundle] where the [ObstacleGrid]
	/// is read from a `csv` file
	#[cfg(feature = "csv")]
	pub fn new_from_csv(path: &str, cell_size: f32) -> Result<Self, PathfindingError> {
		let obstacle_grid = ObstacleGrid::from_csv(path)?;
		Ok(SdfPathfindingBundle::from_obstacle_grid(
			obstacle_grid,
			cell_size,
			PathfindingSettings::default(),
		))
	}
	/// Create a new instance of [SdfPathfindingBundle] where the [ObstacleGrid]
	/// is derived from the pixels of an image, see [ObstacleGrid::from_heightmap]
	#[cfg(feature = "heightmap")]
	pub fn new_from_heightmap(
		path: &str,
		threshold: u8,
		cell_size: f32,
	) -> Result<Self, PathfindingError> {
		let obstacle_grid = ObstacleGrid::from_heightmap(path, threshold)?;
		Ok(SdfPathfindingBundle::from_obstacle_grid(
			obstacle_grid,
			cell_size,
			PathfindingSettings::default(),
		))
	}
}

/// An actor walking routes across the grid of a [SdfPathfindingBundle]
#[derive(Bundle)]
pub struct AgentBundle {
	/// Search parameters and route
	agent: Agent,
	/// Where the agent currently is
	position: AgentPosition,
}

impl AgentBundle {
	/// Create a new instance of [AgentBundle], the route is searched for on the
	/// first update where a [SdfPathfindingBundle] exists
	pub fn new(
		start: FieldCell,
		target: FieldCell,
		unit_size: u8,
		wall_factor: u32,
		dimensions: &GridDimensions,
	) -> Self {
		AgentBundle {
			agent: Agent::new(start, target, unit_size, wall_factor, dimensions),
			position: AgentPosition::default(),
		}
	}
}
