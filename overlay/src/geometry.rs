//! Geometry model: positions, sizes, and the clamping rules.
//!
//! Overlay geometry is integral (whole CSS pixels, matching what the remote
//! store holds); pointer events arrive as floats. [`Position::from_pointer`]
//! and [`Size::from_pointer`] are the only crossing points between the two,
//! and they are total over every float input — the saturating float-to-int
//! conversion maps NaN to 0 and infinities to the integer extremes, after
//! which the ordinary clamps apply.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MIN_OVERLAY_HEIGHT, MIN_OVERLAY_WIDTH};

/// A point in pointer (viewport) space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pixel offset of an overlay from the container origin, both axes ≥ 0
/// once clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Round a pointer-space coordinate pair to whole pixels and clamp to
    /// the container origin.
    #[must_use]
    pub fn from_pointer(x: f64, y: f64) -> Self {
        clamp_position(Self { x: round_px(x), y: round_px(y) })
    }
}

/// Pixel dimensions of an overlay, floored at the minimum usable size once
/// clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Round a pointer-space dimension pair to whole pixels and clamp to
    /// the minimum overlay size.
    #[must_use]
    pub fn from_pointer(width: f64, height: f64) -> Self {
        clamp_size(Self { width: round_px(width), height: round_px(height) })
    }
}

/// Clamp a position to the container origin: x ≥ 0, y ≥ 0.
#[must_use]
pub fn clamp_position(position: Position) -> Position {
    Position { x: position.x.max(0), y: position.y.max(0) }
}

/// Clamp a size to the minimum usable overlay footprint:
/// width ≥ [`MIN_OVERLAY_WIDTH`], height ≥ [`MIN_OVERLAY_HEIGHT`].
#[must_use]
pub fn clamp_size(size: Size) -> Size {
    Size {
        width: size.width.max(MIN_OVERLAY_WIDTH),
        height: size.height.max(MIN_OVERLAY_HEIGHT),
    }
}

// `as` saturates: NaN → 0, out-of-range → i32::MIN / i32::MAX.
#[allow(clippy::cast_possible_truncation)]
fn round_px(value: f64) -> i32 {
    value.round() as i32
}
