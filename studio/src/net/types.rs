//! Wire DTOs for the overlay backend.
//!
//! The backend stores overlays as free-form documents, so every field except
//! `_id` may be missing or loosely typed. Records are parsed into the fixed
//! [`Overlay`] entity at this boundary with explicit default-filling:
//! absent `type`/`content` become `"text"`/`""`, absent geometry becomes the
//! default text placement, unrecognized `type` values default to text rather
//! than propagating, and float coordinates are rounded and clamped the same
//! way gesture input is.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use overlay::consts::{
    IMAGE_DEFAULT_POSITION, IMAGE_DEFAULT_SIZE, TEXT_DEFAULT_CONTENT, TEXT_DEFAULT_POSITION,
    TEXT_DEFAULT_SIZE,
};
use overlay::doc::{Overlay, OverlayId, OverlayKind};
use overlay::geometry::{Position, Size};

/// An overlay record as returned by `GET /overlays`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct OverlayRecord {
    /// Server-assigned identifier.
    #[serde(rename = "_id")]
    pub id: OverlayId,
    /// Overlay kind as a raw string; absent or unrecognized means text.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Text or media reference; absent means empty.
    #[serde(default)]
    pub content: Option<String>,
    /// Stored position; may be absent or fractional.
    #[serde(default)]
    pub position: Option<RawPoint>,
    /// Stored size; may be absent or fractional.
    #[serde(default)]
    pub size: Option<RawExtent>,
}

/// A loosely-typed `{x, y}` pair as stored by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct RawPoint {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

/// A loosely-typed `{width, height}` pair as stored by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct RawExtent {
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

impl OverlayRecord {
    /// Parse this record into an engine overlay, filling defaults for
    /// anything absent. Fetched overlays are persisted by definition.
    #[must_use]
    pub fn into_overlay(self) -> Overlay {
        let kind = match self.kind.as_deref() {
            Some("image") => OverlayKind::Image,
            _ => OverlayKind::Text,
        };
        let position = self
            .position
            .map_or(TEXT_DEFAULT_POSITION, |p| Position::from_pointer(p.x, p.y));
        let size = self
            .size
            .map_or(TEXT_DEFAULT_SIZE, |s| Size::from_pointer(s.width, s.height));
        Overlay {
            id: self.id,
            kind,
            content: self.content.unwrap_or_default(),
            position,
            size,
            persisted: true,
        }
    }
}

/// Body of `POST /overlays`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateOverlayRequest {
    /// Overlay kind; the backend requires this field.
    #[serde(rename = "type")]
    pub kind: OverlayKind,
    pub content: String,
    pub position: Position,
    pub size: Size,
}

impl CreateOverlayRequest {
    /// Payload for the add-text control.
    #[must_use]
    pub fn text() -> Self {
        Self {
            kind: OverlayKind::Text,
            content: TEXT_DEFAULT_CONTENT.to_owned(),
            position: TEXT_DEFAULT_POSITION,
            size: TEXT_DEFAULT_SIZE,
        }
    }

    /// Payload for the upload-image control. `content` is the local
    /// object-URL preview, usable immediately regardless of upload state.
    #[must_use]
    pub fn image(content: String) -> Self {
        Self {
            kind: OverlayKind::Image,
            content,
            position: IMAGE_DEFAULT_POSITION,
            size: IMAGE_DEFAULT_SIZE,
        }
    }

    /// The overlay the store should hold once the backend acknowledges
    /// creation under `id`.
    #[must_use]
    pub fn into_overlay(self, id: OverlayId) -> Overlay {
        Overlay {
            id,
            kind: self.kind,
            content: self.content,
            position: self.position,
            size: self.size,
            persisted: true,
        }
    }
}

/// Body of the `POST /overlays` response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CreateOverlayResponse {
    /// The server-assigned overlay id.
    pub id: OverlayId,
}
