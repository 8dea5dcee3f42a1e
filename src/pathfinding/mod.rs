//! Pathfinding across a grid guided by a clearance field, a discretised signed
//! distance field storing how far every cell is from the nearest wall.
//!
//! [Distance fields](https://iquilezles.org/articles/distfunctions2d/)
//!
//! [Clearance-based Pathfinding](https://harablog.wordpress.com/2009/01/29/clearance-based-pathfinding/)
//!
//! The grid is described by an [ObstacleGrid] of blocked and free cells. From
//! it a [ClearanceField] is derived, each free cell holding its distance to the
//! closest blocked cell up to [CLEARANCE_CAP]:
//!
//! ```text
//!  _____________________________
//! |3_|2_|1_|0_|1_|2_|3_|4_|5_|6_|
//! |3_|2_|1_|0_|1_|2_|3_|4_|5_|6_|
//! |3_|2_|1_|0_|1_|2_|3_|4_|5_|6_|
//! |4_|3_|2_|1_|2_|3_|4_|5_|6_|7_|
//! |4_|3_|3_|2_|3_|3_|4_|5_|6_|7_|
//! ```
//!
//! Every [Agent] then searches the clearance field for its own [Route]. The
//! field does double duty during a search:
//!
//! * an agent of unit size `u` may only stand on cells with clearance `>= u`
//! * from a cell of clearance `c` the agent may jump up to `c - u` cells in a
//!   straight line, nothing within that radius can be a wall
//!
//! so narrow agents squeeze through gaps that wide agents route around, and
//! open areas are crossed in a handful of long jumps.
//!
//! Definitions:
//!
//! * Obstacle grid - a boolean per cell, `true` being a wall
//! * Clearance field - 8-bit distance to the nearest wall, `0` on walls
//! * Distance metric - how distances in the clearance field are measured, see [DistanceMetric]
//! * Jump ring - every offset a search may hop to from a cell, see [JumpRing]
//! * Search map - the best known score and predecessor of every cell during a search, see [SearchMap]
//! * Route - the cells an agent walks through from its start to its target, see [Route]
//!

pub mod agent;
pub mod error;
pub mod fields;
pub mod route;
pub mod search;
pub mod utilities;

#[allow(unused_imports)]
use crate::prelude::*;
