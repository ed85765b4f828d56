//! Oriented rectangle obstacles
//!
//! Geometry is fixed at construction, so the cached corner vertices always
//! agree with center/size/rotation.

use glam::Vec2;

use super::vector::VectorExt;

/// A solid rectangle rotated about its center
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    center: Vec2,
    width: f32,
    height: f32,
    /// Radians, clockwise on screen (y-down)
    rotation: f32,
    /// Corners in winding order, world space
    vertices: [Vec2; 4],
}

impl Obstacle {
    pub fn new(center: Vec2, width: f32, height: f32, rotation: f32) -> Self {
        let half = Vec2::new(width, height) / 2.0;
        let vertices = [
            Vec2::new(-half.x, -half.y),
            Vec2::new(half.x, -half.y),
            Vec2::new(half.x, half.y),
            Vec2::new(-half.x, half.y),
        ]
        .map(|corner| (center + corner).rotate_about(center, rotation));

        Self {
            center,
            width,
            height,
            rotation,
            vertices,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec2; 4] {
        &self.vertices
    }

    /// Half width and half height
    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width, self.height) / 2.0
    }

    /// Local unit axes `(ux, uy)` in world space
    #[inline]
    pub fn axes(&self) -> (Vec2, Vec2) {
        let (s, c) = self.rotation.sin_cos();
        (Vec2::new(c, s), Vec2::new(-s, c))
    }

    /// World point -> obstacle frame (origin at center, unrotated)
    #[inline]
    pub fn to_local(&self, point: Vec2) -> Vec2 {
        (point - self.center).rotate_about(Vec2::ZERO, -self.rotation)
    }
}
