//! Per-tick orchestration.
//!
//! [`Engine`] is the input dispatcher: it owns the [`Figure`] and the single
//! active-handle slot, and [`Engine::tick`] is the only way input reaches the
//! figure. Every tick runs the same fixed sequence, so a draw never reads
//! endpoints older than the input that preceded it:
//!
//! 1. drain pointer events (select on press, release on any pointer-up)
//! 2. apply the active handle's drag with the current pointer
//! 3. one full forward-kinematics pass
//! 4. build the draw list

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::bone::BoneId;
use crate::figure::Figure;
use crate::geom::Point;
use crate::handle::Handle;
use crate::input::{InputState, PointerEvent};
use crate::render::{self, DrawCmd};

/// Figure plus interaction state, advanced one tick at a time.
#[derive(Debug, Clone)]
pub struct Engine {
    figure: Figure,
    input: InputState,
}

impl Engine {
    #[must_use]
    pub fn new(figure: Figure) -> Self {
        Self { figure, input: InputState::Idle }
    }

    /// Advance one tick and return what to draw.
    pub fn tick(&mut self, events: &[PointerEvent], pointer: Point) -> Vec<DrawCmd> {
        for event in events {
            match *event {
                PointerEvent::Down(at) => self.on_pointer_down(at),
                PointerEvent::Up(_) => self.on_pointer_up(),
            }
        }
        self.apply_drag(pointer);
        self.figure.update();
        render::draw(&self.figure, self.input.active_handle())
    }

    /// Capture the current pose into every bone's history. Returns the new
    /// frame count.
    pub fn add_frame(&mut self) -> usize {
        self.figure.add_frame()
    }

    /// Pose a bone directly. Applied on the next tick's update pass.
    pub fn set_angle(&mut self, id: BoneId, degrees: f64) -> bool {
        self.figure.set_angle(id, degrees)
    }

    // --- Queries ---

    #[must_use]
    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    #[must_use]
    pub fn input(&self) -> InputState {
        self.input
    }

    #[must_use]
    pub fn active_handle(&self) -> Option<Handle> {
        self.input.active_handle()
    }

    #[must_use]
    pub fn into_figure(self) -> Figure {
        self.figure
    }

    // --- Internals ---

    fn on_pointer_down(&mut self, at: Point) {
        if !self.input.is_idle() {
            // The held handle keeps the slot until released.
            return;
        }
        if let Some(handle) = self.figure.check_pressed(at) {
            tracing::debug!(?handle, x = at.x, y = at.y, "handle selected");
            self.input = InputState::select(handle, at);
        }
    }

    fn on_pointer_up(&mut self) {
        if let Some(handle) = self.input.active_handle() {
            tracing::debug!(?handle, "handle released");
        }
        self.input = InputState::Idle;
    }

    fn apply_drag(&mut self, pointer: Point) {
        match &mut self.input {
            InputState::Idle => {}
            InputState::Rotating { gimbal } => {
                if self.figure.drag_gimbal(*gimbal, pointer).is_none() {
                    tracing::trace!(bone = gimbal.bone().0, "degenerate drag skipped");
                }
            }
            InputState::Translating { last_pointer, .. } => {
                self.figure.drag_root(*last_pointer, pointer);
                *last_pointer = pointer;
            }
        }
    }
}
