//! Drawing
//!
//! The game only needs three primitives (filled circle, filled polygon,
//! stroked line) on a fixed-size logical surface. [`Canvas`] abstracts the
//! surface; every entity implements [`Draw`] against it.

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(target_arch = "wasm32")]
pub use web::WebCanvas;

use glam::Vec2;

use crate::sim::{Ball, GameState, Hole, Obstacle};

/// Straight RGBA, 0-1
pub type Rgba = [f32; 4];

pub const BACKGROUND: Rgba = [0.16, 0.5, 0.24, 1.0];
pub const BALL_COLOR: Rgba = [1.0, 1.0, 1.0, 1.0];
pub const OBSTACLE_COLOR: Rgba = [0.0, 0.0, 0.0, 1.0];
pub const HOLE_COLOR: Rgba = [0.0, 0.0, 0.0, 1.0];
pub const AIM_COLOR: Rgba = [1.0, 1.0, 1.0, 0.8];
pub const AIM_LINE_WIDTH: f32 = 2.0;

/// A 2D drawing surface
pub trait Canvas {
    /// Wipe the whole surface
    fn clear(&mut self, size: Vec2, color: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn fill_polygon(&mut self, points: &[Vec2], color: Rgba);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
}

/// Something that can paint itself
pub trait Draw {
    fn draw(&self, canvas: &mut dyn Canvas);
}

impl Draw for Ball {
    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill_circle(self.pos, self.radius, BALL_COLOR);
    }
}

impl Draw for Obstacle {
    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill_polygon(self.vertices(), OBSTACLE_COLOR);
    }
}

impl Draw for Hole {
    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill_circle(self.center, self.radius, HOLE_COLOR);
    }
}

/// Paint one frame: background, obstacles, hole, aim line, ball
pub fn draw_frame(state: &GameState, canvas: &mut dyn Canvas, show_aim_line: bool) {
    canvas.clear(state.config.world_size, BACKGROUND);

    for obstacle in &state.level.obstacles {
        obstacle.draw(canvas);
    }
    state.level.hole.draw(canvas);

    if show_aim_line && state.drag.active {
        let ball = &state.level.ball;
        canvas.stroke_line(ball.pos, ball.pos + state.drag.offset(), AIM_LINE_WIDTH, AIM_COLOR);
    }

    state.level.ball.draw(canvas);
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { size: Vec2, color: Rgba },
    Circle { center: Vec2, radius: f32, color: Rgba },
    Polygon { points: Vec<Vec2>, color: Rgba },
    Line { from: Vec2, to: Vec2, width: f32, color: Rgba },
}

/// Canvas that just remembers what it was asked to draw (headless runs, tests)
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands since the last clear
    pub fn frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear { .. }))
            .unwrap_or(0);
        &self.commands[start..]
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, size: Vec2, color: Rgba) {
        self.commands.push(DrawCommand::Clear { size, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Rgba) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }
}

/// CSS color string for an [`Rgba`]
pub fn css_color(color: Rgba) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({}, {}, {}, {})",
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        color[3].clamp(0.0, 1.0)
    )
}
