//! Collision detection and response against rotated rectangles
//!
//! The ball is a circle, obstacles are oriented boxes. Detection runs in the
//! box's local frame where it is axis aligned; the contact point is the
//! closest point on the box, and the response mirrors the normal component of
//! the velocity (perfectly elastic, tangential part untouched).
//!
//! There is no positional correction: an overlapping ball is not pushed out,
//! it only has its velocity turned around. Several contacts in one tick are
//! resolved one after another against the already-updated velocity.

use glam::Vec2;

use super::ball::Ball;
use super::obstacle::Obstacle;
use super::vector::VectorExt;

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether the circle overlaps the box
    pub hit: bool,
    /// Closest point on the box to the ball center (if hit)
    pub point: Vec2,
    /// Unit normal from the box surface toward the ball center.
    /// Zero when the ball center is inside the box.
    pub normal: Vec2,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
            normal: Vec2::ZERO,
        }
    }
}

/// Circle vs axis-aligned box centered on the origin.
///
/// `local` is the circle center in the box frame, `half` the box half-extents.
pub fn circle_box_overlap(local: Vec2, half: Vec2, radius: f32) -> bool {
    let d = local.abs();

    if d.x > half.x + radius || d.y > half.y + radius {
        return false;
    }
    if d.x <= half.x || d.y <= half.y {
        return true;
    }

    // Only the corner region is left
    let corner = d - half;
    corner.length_squared() <= radius * radius
}

/// Closest point on (or in) the obstacle to `point`, in world space
pub fn closest_point(obstacle: &Obstacle, point: Vec2) -> Vec2 {
    let (ux, uy) = obstacle.axes();
    let half = obstacle.half_extents();
    let offset = point - obstacle.center();

    let px = offset.dot(ux).clamp(-half.x, half.x);
    let py = offset.dot(uy).clamp(-half.y, half.y);

    obstacle.center() + ux * px + uy * py
}

/// Check a ball against one obstacle
pub fn ball_obstacle_collision(
    ball_pos: Vec2,
    ball_radius: f32,
    obstacle: &Obstacle,
) -> CollisionResult {
    let local = obstacle.to_local(ball_pos);

    if !circle_box_overlap(local, obstacle.half_extents(), ball_radius) {
        return CollisionResult::miss();
    }

    let point = closest_point(obstacle, ball_pos);
    let normal = (ball_pos - point).normalize_guarded();

    CollisionResult {
        hit: true,
        point,
        normal,
    }
}

/// Mirror the normal component of `velocity`, keep the tangential one.
///
/// `v' = w - u` with `u = n (v·n)` and `w = v - u`. A zero normal leaves the
/// velocity unchanged.
#[inline]
pub fn resolve_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    let u = normal * velocity.dot(normal);
    let w = velocity - u;
    w - u
}

/// Resolve the ball against every obstacle, in order. Returns the number of
/// contacts.
pub fn resolve_obstacles(ball: &mut Ball, obstacles: &[Obstacle]) -> usize {
    let mut contacts = 0;

    for (i, obstacle) in obstacles.iter().enumerate() {
        let result = ball_obstacle_collision(ball.pos, ball.radius, obstacle);
        if !result.hit {
            continue;
        }

        let vel = resolve_velocity(ball.vel, result.normal);
        log::debug!(
            "Ball hit obstacle {} at ({:.1}, {:.1}): vel ({:.2}, {:.2}) -> ({:.2}, {:.2})",
            i,
            result.point.x,
            result.point.y,
            ball.vel.x,
            ball.vel.y,
            vel.x,
            vel.y
        );
        ball.vel = vel;
        contacts += 1;
    }

    contacts
}
