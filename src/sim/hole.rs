//! The target hole

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A circular cup the ball must drop into
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    pub center: Vec2,
    pub radius: f32,
}

impl Hole {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Strictly inside the rim
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        self.center.distance(point) < self.radius
    }
}
