//! Drive the plugin inside a headless App, editing the grid through events and
//! reading back the routes and positions of agents
//!

use std::time::Duration;

use bevy::prelude::*;
use bevy_sdf_pathfinding_plugin::prelude::*;

/// App with the plugin, a 20x10 open grid and a single agent crossing it
fn setup() -> (App, Entity, Entity) {
	let mut app = App::new();
	app.init_resource::<Time>().add_plugins(SdfPathfindingPlugin);
	let bundle = SdfPathfindingBundle::new(20, 10, 10.0);
	let grid = app.world_mut().spawn(bundle).id();
	let dimensions = *app.world().get::<GridDimensions>(grid).unwrap();
	let actor = app
		.world_mut()
		.spawn(AgentBundle::new(
			FieldCell::new(1, 5),
			FieldCell::new(18, 5),
			1,
			0,
			&dimensions,
		))
		.id();
	(app, grid, actor)
}

/// Cells of the agent's current route
fn route_of(app: &App, actor: Entity) -> Vec<FieldCell> {
	app.world().get::<Agent>(actor).unwrap().get_route().points()
}

#[test]
fn spawned_agent_gets_a_route() {
	let (mut app, _grid, actor) = setup();
	app.update();
	let route = route_of(&app, actor);
	assert_eq!(Some(&FieldCell::new(1, 5)), route.first());
	assert_eq!(Some(&FieldCell::new(18, 5)), route.last());
	// no time has passed so the agent stands on its start cell
	let position = app.world().get::<AgentPosition>(actor).unwrap().get();
	assert_eq!(Some(Vec2::new(-85.0, -5.0)), position);
}

#[test]
fn agent_walks_at_movement_speed() {
	let (mut app, _grid, actor) = setup();
	app.update();
	app.world_mut()
		.resource_mut::<Time>()
		.advance_by(Duration::from_secs(1));
	app.update();
	let walked = app
		.world()
		.get::<Agent>(actor)
		.unwrap()
		.get_cursor()
		.get_walked_distance();
	assert_eq!(DEFAULT_MOVEMENT_SPEED, walked);
	let position = app.world().get::<AgentPosition>(actor).unwrap().get().unwrap();
	assert!((position - Vec2::new(-55.0, -5.0)).length() < 0.001);
}

#[test]
fn obstacle_events_reroute_agents() {
	let (mut app, grid, actor) = setup();
	app.update();
	for row in 0..10 {
		app.world_mut()
			.send_event(EventUpdateObstacle::new(FieldCell::new(10, row), true));
	}
	app.update();
	let field = app.world().get::<ClearanceField>(grid).unwrap();
	assert_eq!(0, field.get_clearance(FieldCell::new(10, 3)).unwrap());
	assert!(route_of(&app, actor).is_empty());
	assert_eq!(None, app.world().get::<AgentPosition>(actor).unwrap().get());

	app.world_mut()
		.send_event(EventUpdateObstacle::new(FieldCell::new(10, 5), false));
	app.update();
	let route = route_of(&app, actor);
	assert!(route.contains(&FieldCell::new(10, 5)));
	assert!(app.world().get::<AgentPosition>(actor).unwrap().get().is_some());
}

#[test]
fn out_of_bounds_obstacle_is_ignored() {
	let (mut app, grid, actor) = setup();
	app.update();
	let before = route_of(&app, actor);
	app.world_mut()
		.send_event(EventUpdateObstacle::new(FieldCell::new(20, 0), true));
	app.update();
	let blocked = app.world().get::<ObstacleGrid>(grid).unwrap().blocked_count();
	assert_eq!(0, blocked);
	assert_eq!(before, route_of(&app, actor));
}

#[test]
fn settings_events_apply_and_reroute() {
	let (mut app, grid, actor) = setup();
	app.update();
	assert_eq!(3, route_of(&app, actor).len());
	let settings = PathfindingSettings::new(DistanceMetric::Manhattan, false, 1.5);
	app.world_mut().send_event(EventUpdateSettings::new(settings));
	app.update();
	assert_eq!(&settings, app.world().get::<PathfindingSettings>(grid).unwrap());
	// single steps along the row
	assert_eq!(18, route_of(&app, actor).len());
}

#[test]
fn recalculate_event_picks_up_agent_changes() {
	let (mut app, _grid, actor) = setup();
	app.update();
	app.world_mut()
		.get_mut::<Agent>(actor)
		.unwrap()
		.set_target(FieldCell::new(1, 8));
	app.world_mut().send_event(EventRecalculate);
	app.update();
	let route = route_of(&app, actor);
	assert_eq!(vec![FieldCell::new(1, 5), FieldCell::new(1, 8)], route);
}

#[test]
fn agent_spawned_before_grid_is_routed() {
	let mut app = App::new();
	app.init_resource::<Time>().add_plugins(SdfPathfindingPlugin);
	let dimensions = GridDimensions::new(20, 10, 10.0);
	let actor = app
		.world_mut()
		.spawn(AgentBundle::new(
			FieldCell::new(1, 5),
			FieldCell::new(18, 5),
			1,
			0,
			&dimensions,
		))
		.id();
	app.update();
	assert!(!app.world().get::<Agent>(actor).unwrap().has_searched());
	app.world_mut().spawn(SdfPathfindingBundle::new(20, 10, 10.0));
	app.update();
	let route = route_of(&app, actor);
	assert_eq!(Some(&FieldCell::new(1, 5)), route.first());
	assert_eq!(Some(&FieldCell::new(18, 5)), route.last());
}
