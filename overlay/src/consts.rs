//! Shared numeric constants for the overlay engine.

use crate::geometry::{Position, Size};

// ── Size floors ─────────────────────────────────────────────────

/// Minimum overlay width in pixels; resize gestures clamp to this floor.
pub const MIN_OVERLAY_WIDTH: i32 = 50;

/// Minimum overlay height in pixels; resize gestures clamp to this floor.
pub const MIN_OVERLAY_HEIGHT: i32 = 30;

// ── Default placements ──────────────────────────────────────────

/// Content of a freshly added text overlay.
pub const TEXT_DEFAULT_CONTENT: &str = "New Text Overlay";

/// Placement of a freshly added text overlay. Also the fallback for
/// snapshot records that arrive without a position.
pub const TEXT_DEFAULT_POSITION: Position = Position { x: 50, y: 50 };

/// Size of a freshly added text overlay. Also the fallback for snapshot
/// records that arrive without a size.
pub const TEXT_DEFAULT_SIZE: Size = Size { width: 180, height: 50 };

/// Placement of a freshly uploaded image overlay.
pub const IMAGE_DEFAULT_POSITION: Position = Position { x: 60, y: 60 };

/// Size of a freshly uploaded image overlay.
pub const IMAGE_DEFAULT_SIZE: Size = Size { width: 150, height: 150 };
