//! The golf ball: a point-mass rigid body with impulse-style shots
//!
//! Shots add to both velocity and a short-lived acceleration that halves
//! every tick, so a putt keeps pushing for a few frames after release.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::vector::VectorExt;
use crate::settings::PhysicsConfig;

/// The player's ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub acc: Vec2,
    pub radius: f32,
    /// Position restored by [`Ball::reset`]
    pub spawn: Vec2,
    pub shots_taken: u32,
    /// Shots allowed before the ball is sent back to spawn (`None` = unlimited)
    pub max_shots: Option<u32>,
    /// At rest; only a stopped ball may be shot
    pub stopped: bool,
}

impl Ball {
    pub fn new(spawn: Vec2, radius: f32, max_shots: Option<u32>) -> Self {
        Self {
            pos: spawn,
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            radius,
            spawn,
            shots_taken: 0,
            max_shots,
            stopped: true,
        }
    }

    /// Integrate one tick of free motion
    pub fn update(&mut self, config: &PhysicsConfig) {
        let vel = self.vel + self.acc;
        let pos = self.pos + vel;
        let acc = self.acc * config.accel_decay;
        let vel = vel * config.damping_factor(vel);

        self.pos = pos;
        self.vel = vel;
        self.acc = acc;
        self.stopped = self.is_resting(config.rest_speed);
    }

    /// Keep the ball inside `[0, bounds]`, bouncing off the edges.
    ///
    /// Each axis is handled on its own: the position is clamped and the
    /// velocity/acceleration component is reversed and scaled by `bounce`.
    pub fn clamp_to_bounds(&mut self, bounds: Vec2, bounce: f32, rest_speed: f32) {
        let (px, vx, ax) = clamp_axis(
            self.pos.x,
            self.vel.x,
            self.acc.x,
            self.radius,
            bounds.x,
            bounce,
        );
        let (py, vy, ay) = clamp_axis(
            self.pos.y,
            self.vel.y,
            self.acc.y,
            self.radius,
            bounds.y,
            bounce,
        );

        self.pos = Vec2::new(px, py);
        self.vel = Vec2::new(vx, vy);
        self.acc = Vec2::new(ax, ay);
        self.stopped = self.is_resting(rest_speed);
    }

    /// Apply a shot impulse. Resets the ball once it exceeds `max_shots`.
    ///
    /// Callers must check [`Ball::stopped`] first.
    pub fn shoot(&mut self, impulse: Vec2, config: &PhysicsConfig) {
        self.acc += impulse.guarded_div_scalar(config.impulse_accel_divisor);
        self.vel += impulse * config.impulse_velocity_scale;
        self.stopped = false;
        self.shots_taken += 1;

        if self.max_shots.is_some_and(|max| self.shots_taken > max) {
            log::info!("Out of shots ({}), back to the tee", self.shots_taken - 1);
            self.reset();
        }
    }

    /// Back to the spawn point, motionless, shot count cleared
    pub fn reset(&mut self) {
        self.acc = Vec2::ZERO;
        self.vel = Vec2::ZERO;
        self.pos = self.spawn;
        self.stopped = true;
        self.shots_taken = 0;
    }

    /// Hit test for starting a drag
    #[inline]
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.pos.distance(point) <= self.radius
    }

    #[inline]
    fn is_resting(&self, rest_speed: f32) -> bool {
        self.vel.length() < rest_speed
    }
}

fn clamp_axis(
    pos: f32,
    vel: f32,
    acc: f32,
    radius: f32,
    bound: f32,
    bounce: f32,
) -> (f32, f32, f32) {
    if pos - radius < 0.0 {
        (radius, -vel * bounce, -acc * bounce)
    } else if pos + radius > bound {
        (bound - radius, -vel * bounce, -acc * bounce)
    } else {
        (pos, vel, acc)
    }
}
