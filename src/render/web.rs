//! Canvas 2D backend for the browser

use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

use super::{Canvas, Rgba, css_color};

/// [`Canvas`] over an HTML canvas 2D context
pub struct WebCanvas {
    ctx: CanvasRenderingContext2d,
}

impl WebCanvas {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Canvas for WebCanvas {
    fn clear(&mut self, size: Vec2, color: Rgba) {
        let (w, h) = (size.x as f64, size.y as f64);
        self.ctx.clear_rect(0.0, 0.0, w, h);
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx.fill_rect(0.0, 0.0, w, h);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("arc failed: {:?}", e);
            return;
        }
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Rgba) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.ctx.set_stroke_style_str(&css_color(color));
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }
}
