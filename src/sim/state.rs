//! Simulation state and core types
//!
//! Positions and velocities mutate every frame; radius, color and mass are
//! fixed at creation. Bodies carry no id - identity is the index in the
//! collection, which is never reordered or reallocated after spawn.

use glam::Vec2;

/// An RGB color, rendered as a CSS `rgb(r, g, b)` string on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS color string for the 2D canvas API
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// A simulated circular body
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Must be positive
    pub radius: f32,
    pub color: Color,
    /// Must be positive
    pub mass: f32,
}

/// Viewport the bodies are confined to, fixed for the session
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Last known pointer position, handed from the input side to the frame tick.
///
/// Input handlers write the cell with [`set`](Self::set); the tick consumes
/// it with [`take`](Self::take), which clears the active flag so a hover is
/// a one-frame pulse. Writer and reader share a single execution context -
/// there is no synchronization and none is needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerState {
    pos: Vec2,
    active: bool,
}

impl PointerState {
    /// Record a pointer position in surface-local coordinates.
    pub fn set(&mut self, pos: Vec2) {
        self.pos = pos;
        self.active = true;
    }

    /// Read and clear the cell. Returns the position only if a pointer
    /// event landed since the last take.
    pub fn take(&mut self) -> Option<Vec2> {
        let pos = self.active.then_some(self.pos);
        self.active = false;
        pos
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
