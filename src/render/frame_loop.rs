//! Self-rescheduling frame loop
//!
//! One logical tick per display frame: physics advance, full redraw,
//! pointer cell cleared. Run/stop is an explicit state machine so teardown
//! is a transition rather than a dropped closure - the host glue checks
//! [`FrameLoop::frame`]'s return before requesting the next animation
//! frame, and a stopped loop refuses to tick.

use super::scene;
use super::surface::Surface;
use crate::sim::{advance, Body, PointerState, Viewport};

/// Loop lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Owns the body collection and pointer cell for the session and turns the
/// host's redraw signal into physics + draw.
pub struct FrameLoop<S> {
    surface: S,
    viewport: Viewport,
    bodies: Vec<Body>,
    pointer: PointerState,
    state: LoopState,
}

impl<S: Surface> FrameLoop<S> {
    pub fn new(surface: S, viewport: Viewport, bodies: Vec<Body>) -> Self {
        Self {
            surface,
            viewport,
            bodies,
            pointer: PointerState::default(),
            state: LoopState::Running,
        }
    }

    /// The pointer cell, for input handlers to write.
    pub fn pointer_mut(&mut self) -> &mut PointerState {
        &mut self.pointer
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Teardown transition. Later `frame` calls are no-ops and the host
    /// must withhold the next reschedule.
    pub fn stop(&mut self) {
        if self.state == LoopState::Running {
            self.state = LoopState::Stopped;
            log::info!("Frame loop stopped");
        }
    }

    /// Run one tick: consume the pointer cell, advance physics, redraw.
    /// Returns whether the loop still wants the next display frame.
    pub fn frame(&mut self) -> bool {
        if self.state == LoopState::Stopped {
            return false;
        }

        let pointer = self.pointer.take();
        let touched = advance(&mut self.bodies, self.viewport, pointer);
        scene::render(&mut self.surface, self.viewport, &self.bodies, &touched);

        true
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }
}
