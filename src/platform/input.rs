//! Pointer and window input
//!
//! Events are queued as they arrive and drained by the simulation tick, which
//! is the only place game state changes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A single input event, in logical canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Pointer pressed
    DragStart(Vec2),
    /// Pointer moved (pressed or not)
    DragMove(Vec2),
    /// Pointer released
    DragEnd,
    /// Window lost focus
    Blur,
    /// Window regained focus
    Focus,
    /// Replay the current level from scratch
    Restart,
}

/// In-progress slingshot drag
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerDrag {
    /// Where the drag began
    pub origin: Vec2,
    /// Latest pointer position
    pub current: Vec2,
    pub active: bool,
}

impl PointerDrag {
    pub fn begin(&mut self, at: Vec2) {
        self.origin = at;
        self.current = at;
        self.active = true;
    }

    /// Track the pointer. Moves outside an active drag are ignored.
    pub fn track(&mut self, at: Vec2) {
        if self.active {
            self.current = at;
        }
    }

    /// Stop dragging. Returns the pull-back vector (`origin - current`) for
    /// an active drag of nonzero length.
    pub fn release(&mut self) -> Option<Vec2> {
        if !self.active {
            return None;
        }
        self.active = false;

        let pull = self.origin - self.current;
        (pull != Vec2::ZERO).then_some(pull)
    }

    pub fn cancel(&mut self) {
        self.active = false;
    }

    /// Pointer offset from the drag origin (`current - origin`)
    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.current - self.origin
    }
}

/// Map a client-space pointer position into the logical canvas.
///
/// `rect_origin`/`rect_size` are the canvas's on-screen bounding box; the
/// canvas may be scaled by CSS so `logical_size` is generally different.
pub fn canvas_point(client: Vec2, rect_origin: Vec2, rect_size: Vec2, logical_size: Vec2) -> Vec2 {
    let scale = Vec2::new(
        if rect_size.x > 0.0 { logical_size.x / rect_size.x } else { 1.0 },
        if rect_size.y > 0.0 { logical_size.y / rect_size.y } else { 1.0 },
    );
    (client - rect_origin) * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_release_returns_pull_back() {
        let mut drag = PointerDrag::default();
        drag.begin(Vec2::new(800.0, 450.0));
        drag.track(Vec2::new(1300.0, 450.0));
        assert_eq!(drag.offset(), Vec2::new(500.0, 0.0));

        assert_eq!(drag.release(), Some(Vec2::new(-500.0, 0.0)));
        assert!(!drag.active);
    }

    #[test]
    fn test_click_without_move_is_not_a_shot() {
        let mut drag = PointerDrag::default();
        drag.begin(Vec2::new(10.0, 10.0));
        assert_eq!(drag.release(), None);
    }

    #[test]
    fn test_inactive_drag_ignores_moves_and_release() {
        let mut drag = PointerDrag::default();
        drag.track(Vec2::new(50.0, 50.0));
        assert_eq!(drag.current, Vec2::ZERO);
        assert_eq!(drag.release(), None);

        drag.begin(Vec2::ZERO);
        drag.track(Vec2::new(5.0, 0.0));
        drag.cancel();
        assert_eq!(drag.release(), None);
    }

    #[test]
    fn test_canvas_point_scaling() {
        // Canvas shown at half size, offset by (10, 20)
        let p = canvas_point(
            Vec2::new(410.0, 245.0),
            Vec2::new(10.0, 20.0),
            Vec2::new(800.0, 450.0),
            Vec2::new(1600.0, 900.0),
        );
        assert_eq!(p, Vec2::new(800.0, 450.0));

        // Degenerate rect falls back to 1:1
        let p = canvas_point(Vec2::new(5.0, 5.0), Vec2::ZERO, Vec2::ZERO, Vec2::new(1600.0, 900.0));
        assert_eq!(p, Vec2::new(5.0, 5.0));
    }
}
