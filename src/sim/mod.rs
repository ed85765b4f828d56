//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (constants are per tick)
//! - Input only through `TickInput`
//! - Stable iteration order (obstacles in level order)
//! - No rendering or browser dependencies

pub mod ball;
pub mod collision;
pub mod hole;
pub mod obstacle;
pub mod state;
pub mod tick;
pub mod vector;

pub use ball::Ball;
pub use collision::{
    CollisionResult, ball_obstacle_collision, circle_box_overlap, closest_point, resolve_obstacles,
    resolve_velocity,
};
pub use hole::Hole;
pub use obstacle::Obstacle;
pub use state::{GameEvent, GamePhase, GameState, Level};
pub use tick::{TickInput, tick};
pub use vector::VectorExt;
