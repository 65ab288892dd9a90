//! The gesture state machine.
//!
//! A gesture is one continuous pointer-down → move* → pointer-up sequence.
//! Each active variant carries the anchor context recorded at pointer-down
//! so every subsequent move can compute absolute geometry from the live
//! pointer position alone. One gesture is active at a time globally;
//! beginning a new gesture replaces whatever was in flight.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::OverlayId;
use crate::geometry::{Point, Size};

/// The active gesture being tracked between pointer-down and pointer-up.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GestureState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is moving an overlay.
    Dragging {
        /// Id of the overlay being dragged.
        id: OverlayId,
        /// Pointer position minus overlay position at pointer-down; moves
        /// compute `new_position = pointer − grab_offset`.
        grab_offset: Point,
    },
    /// The user is resizing an overlay from its corner handle.
    Resizing {
        /// Id of the overlay being resized.
        id: OverlayId,
        /// Pointer position at pointer-down; moves compute the delta from
        /// here.
        anchor_pointer: Point,
        /// Overlay size at pointer-down; moves compute
        /// `new_size = anchor_size + delta`.
        anchor_size: Size,
    },
}

impl GestureState {
    /// Whether no gesture is in progress.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The overlay the active gesture is editing, if any.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Dragging { id, .. } | Self::Resizing { id, .. } => Some(id.as_str()),
        }
    }
}
