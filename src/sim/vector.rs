//! Vector helpers on top of `glam::Vec2`
//!
//! glam already covers the arithmetic (vector and scalar operands are picked
//! by operator overloading), so this only adds what the game needs beyond it:
//! divide-by-zero guards, screen-space angles and pivot rotation. Everything
//! here is by value; nothing mutates in place.

use glam::Vec2;

/// Extra vector operations used by the physics core
pub trait VectorExt: Copy {
    /// Component-wise divide. An axis whose divisor is exactly zero is left as is.
    fn guarded_div(self, rhs: Vec2) -> Vec2;

    /// Divide by a scalar. Dividing by zero returns the vector unchanged.
    fn guarded_div_scalar(self, rhs: f32) -> Vec2;

    /// Unit vector in the same direction; the zero vector maps to itself
    fn normalize_guarded(self) -> Vec2;

    /// 2D cross product (z of the 3D cross / determinant)
    fn cross(self, rhs: Vec2) -> f32;

    /// Heading in radians for y-down screen coordinates
    fn screen_angle(self) -> f32;

    /// Unsigned angle between two vectors in `[0, π]`
    fn unsigned_angle_to(self, rhs: Vec2) -> f32;

    /// Rotate this point about `pivot` by `angle` radians
    fn rotate_about(self, pivot: Vec2, angle: f32) -> Vec2;
}

impl VectorExt for Vec2 {
    #[inline]
    fn guarded_div(self, rhs: Vec2) -> Vec2 {
        Vec2::new(
            if rhs.x != 0.0 { self.x / rhs.x } else { self.x },
            if rhs.y != 0.0 { self.y / rhs.y } else { self.y },
        )
    }

    #[inline]
    fn guarded_div_scalar(self, rhs: f32) -> Vec2 {
        if rhs != 0.0 { self / rhs } else { self }
    }

    #[inline]
    fn normalize_guarded(self) -> Vec2 {
        self.guarded_div_scalar(self.length())
    }

    #[inline]
    fn cross(self, rhs: Vec2) -> f32 {
        self.x * rhs.y - self.y * rhs.x
    }

    #[inline]
    fn screen_angle(self) -> f32 {
        -(-self.y).atan2(self.x)
    }

    fn unsigned_angle_to(self, rhs: Vec2) -> f32 {
        let denom = self.length() * rhs.length();
        if denom == 0.0 {
            // No direction to measure against
            return 0.0;
        }
        (self.dot(rhs) / denom).clamp(-1.0, 1.0).acos()
    }

    fn rotate_about(self, pivot: Vec2, angle: f32) -> Vec2 {
        let (s, c) = angle.sin_cos();
        let p = self - pivot;
        Vec2::new(p.x * c - p.y * s, p.x * s + p.y * c) + pivot
    }
}
