//! Rendering: the drawing-surface seam and the frame loop
//!
//! Drawing goes through the [`Surface`] trait so the scene and loop logic
//! run off the browser; the wasm canvas context implements it in `canvas`.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod frame_loop;
pub mod scene;
pub mod surface;

pub use frame_loop::{FrameLoop, LoopState};
pub use surface::Surface;
