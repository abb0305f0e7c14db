//! Input model: drag sessions and the gesture state machine.
//!
//! `InputState` is the gesture being tracked between pointer-down and
//! pointer-up. A session exists only while something is held; a pointer-down
//! that hits nothing leaves the machine idle.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geometry::{Bounds, Point};
use crate::hit::HitTarget;

/// One incremental step of a drag, between consecutive pointer events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSegment {
    pub from: Point,
    pub to: Point,
}

impl DragSegment {
    /// A zero-length segment at `pt`, the state right after pointer-down.
    #[must_use]
    pub fn at(pt: Point) -> Self {
        Self { from: pt, to: pt }
    }

    /// The next segment, continuing from where this one ended.
    #[must_use]
    pub fn advance(self, pt: Point) -> Self {
        Self { from: self.to, to: pt }
    }
}

/// Context for an active drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Canvas position of the pointer-down that started the drag.
    pub click: Point,
    /// The most recent incremental segment.
    pub drag: DragSegment,
    /// What is being dragged.
    pub target: HitTarget,
    /// Click position minus the target's top-left. Subtracted from the pointer
    /// during a move so the grabbed point stays under the cursor.
    pub click_offset: Point,
    /// Signed bounds of the held image as the pointer has dragged them, before
    /// any resize policy is applied. Only anchor drags advance this.
    pub unclamped: Bounds,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A target is held and follows the pointer.
    Dragging(DragSession),
}

impl InputState {
    /// The held target, if a drag is in progress.
    #[must_use]
    pub fn target(&self) -> Option<HitTarget> {
        match self {
            Self::Idle => None,
            Self::Dragging(session) => Some(session.target),
        }
    }
}

/// Drop effect to advertise during a drag-over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropEffect {
    Copy,
}

impl DropEffect {
    /// Value for `DataTransfer.dropEffect`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Copy => "copy",
        }
    }
}
