//! Canvas 2D surface
//!
//! [`Surface`] over the browser's `CanvasRenderingContext2d`.

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::surface::Surface;
use crate::sim::Color;

/// Drawing surface backed by a canvas element's 2D context.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquire the 2D context for a canvas. Returns `None` when the context
    /// is unavailable so the mount can fail closed without starting the
    /// loop.
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ctx
            .clear_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn circle(&mut self, x: f32, y: f32, radius: f32) {
        let _ = self.ctx.arc(x as f64, y as f64, radius as f64, 0.0, TAU);
    }

    fn fill(&mut self, color: Color, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
    }

    fn stroke(&mut self, color: Color, width: f32, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.set_line_width(width as f64);
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.stroke();
    }
}
