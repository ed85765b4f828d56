//! Scripted putting for headless runs and demos
//!
//! Aims straight at a target and picks the impulse whose rolling distance
//! under flat damping ends just past it. Obstacles are ignored.

use glam::Vec2;

use super::input::InputEvent;
use crate::settings::PhysicsConfig;
use crate::sim::{Ball, TickInput};

/// How far past the target (in hole radii) the ball should come to rest
const OVERSHOOT: f32 = 0.5;

/// Impulse that rolls `ball` to `target`, plus `overshoot` pixels.
///
/// Under flat damping a ball launched at speed `v` covers `v / (1 - damping)`
/// before stopping; the decaying acceleration adds a little on top, which
/// just lands it slightly further.
pub fn aim_impulse(ball: &Ball, target: Vec2, overshoot: f32, config: &PhysicsConfig) -> Vec2 {
    let to_target = target - ball.pos;
    let distance = to_target.length();
    if distance == 0.0 {
        return Vec2::ZERO;
    }

    let travel_per_unit_speed = 1.0 / (1.0 - config.damping).max(f32::EPSILON);
    let speed = (distance + overshoot) / travel_per_unit_speed;
    let magnitude = speed / (config.impulse_velocity_scale + 1.0 / config.impulse_accel_divisor);

    to_target / distance * magnitude
}

/// Drag events that putt `ball` toward a hole at `target`
pub fn putt_input(
    ball: &Ball,
    target: Vec2,
    hole_radius: f32,
    config: &PhysicsConfig,
) -> TickInput {
    let impulse = aim_impulse(ball, target, hole_radius * OVERSHOOT, config);
    TickInput {
        events: vec![
            InputEvent::DragStart(ball.pos),
            InputEvent::DragMove(ball.pos - impulse),
            InputEvent::DragEnd,
        ],
    }
}
