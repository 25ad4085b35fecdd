//! Bounce Field - a bouncing-ball canvas animation
//!
//! Core modules:
//! - `sim`: physics (spawning, elastic collisions, wall reflection)
//! - `render`: drawing-surface seam, per-frame scene, self-rescheduling loop
//! - `config`: creation-time spawn constraints
//!
//! The binary mounts the animation on a browser canvas; everything in the
//! library is platform-independent and unit-testable.

pub mod config;
pub mod render;
pub mod sim;

pub use config::SpawnConstraints;
pub use sim::{Body, Color, PointerState, Viewport};

/// Animation configuration constants
pub mod consts {
    /// Collision radius of the hover pointer (pixels)
    pub const POINTER_RADIUS: f32 = 100.0;
    /// Alpha of the outline drawn for bodies not under the pointer
    pub const IDLE_ALPHA: f32 = 0.4;
    /// Outline stroke width (pixels)
    pub const STROKE_WIDTH: f32 = 2.0;

    /// Fallback viewport when the mounted surface cannot be measured
    pub const FALLBACK_WIDTH: f32 = 600.0;
    pub const FALLBACK_HEIGHT: f32 = 400.0;
}
