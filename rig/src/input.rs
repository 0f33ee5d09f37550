//! Input model: pointer events and the active-handle slot.
//!
//! The host reports discrete pointer presses and releases as
//! [`PointerEvent`]s and samples the current pointer position once per tick.
//! [`InputState`] is the single figure-wide slot holding the handle being
//! dragged, so at most one handle is ever selected.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::bone::BoneId;
use crate::geom::Point;
use crate::handle::{Gimbal, Handle, RootHandle};

/// A discrete pointer event, carrying the pointer position at the time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerEvent {
    /// Button pressed.
    Down(Point),
    /// Button released. Releases whatever handle is held, wherever it happens.
    Up(Point),
}

/// The gesture currently in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No handle selected; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A bone is being rotated by its gimbal.
    Rotating {
        /// The selected gimbal.
        gimbal: Gimbal,
    },
    /// The figure is being translated by its root handle.
    Translating {
        /// The selected root handle.
        handle: RootHandle,
        /// Pointer position at the previous tick, used to compute the delta.
        last_pointer: Point,
    },
}

impl InputState {
    /// Enter the gesture for `handle`, pressed at `pointer`.
    #[must_use]
    pub fn select(handle: Handle, pointer: Point) -> Self {
        match handle {
            Handle::Gimbal(gimbal) => Self::Rotating { gimbal },
            Handle::Root(handle) => Self::Translating { handle, last_pointer: pointer },
        }
    }

    /// The selected handle, if any.
    #[must_use]
    pub fn active_handle(&self) -> Option<Handle> {
        match *self {
            Self::Idle => None,
            Self::Rotating { gimbal } => Some(Handle::Gimbal(gimbal)),
            Self::Translating { handle, .. } => Some(Handle::Root(handle)),
        }
    }

    /// Bone owning the selected handle, if any.
    #[must_use]
    pub fn active_bone(&self) -> Option<BoneId> {
        self.active_handle().map(Handle::bone)
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
