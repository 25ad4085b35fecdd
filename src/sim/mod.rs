//! Bouncing-ball simulation
//!
//! Pure state and physics - no rendering or platform dependencies. The frame
//! loop calls [`advance`] exactly once per displayed frame; bodies are
//! created once per mount by [`spawn`] and only mutated in place afterwards.

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use spawn::spawn;
pub use state::{Body, Color, PointerState, Viewport};
pub use tick::advance;
