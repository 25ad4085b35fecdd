//! Per-frame drawing
//!
//! Pointer proximity has a single visual channel: a touched body fills
//! solid, everything else draws as a translucent outline in its own color.

use super::surface::Surface;
use crate::consts::{IDLE_ALPHA, STROKE_WIDTH};
use crate::sim::{Body, Viewport};

/// Draw one body. Wrapped in save/restore so alpha and style never leak
/// into the next draw.
pub fn draw_body<S: Surface>(surface: &mut S, body: &Body, touched: bool) {
    surface.save();

    surface.begin_path();
    surface.circle(body.pos.x, body.pos.y, body.radius);

    if touched {
        surface.fill(body.color, 1.0);
    } else {
        surface.stroke(body.color, STROKE_WIDTH, IDLE_ALPHA);
    }

    surface.restore();
}

/// Clear the full viewport and draw every body with its touch flag.
pub fn render<S: Surface>(surface: &mut S, viewport: Viewport, bodies: &[Body], touched: &[bool]) {
    surface.clear(0.0, 0.0, viewport.width, viewport.height);

    for (body, &flag) in bodies.iter().zip(touched) {
        draw_body(surface, body, flag);
    }
}
