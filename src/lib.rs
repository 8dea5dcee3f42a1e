//! This is a plugin for Bevy game engine to calculate grid routes guided by a clearance (signed distance) field
//!

pub mod bundle;
pub mod pathfinding;
pub mod plugin;

pub mod prelude;
