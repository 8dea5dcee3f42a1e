//! `use bevy_sdf_pathfinding_plugin::prelude::*;` to import common structures and methods
//!

#[doc(hidden)]
pub use crate::pathfinding::{
	agent::*,
	error::*,
	fields::{clearance_field::*, obstacle_field::*, *},
	route::*,
	search::{jump_ring::*, search_map::*, *},
	utilities::*,
};

#[doc(hidden)]
pub use crate::{
	bundle::*,
	plugin::{edit_layer::*, route_layer::*, *},
};
