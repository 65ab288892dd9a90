//! Document model: overlay entities, sparse updates, and the in-memory store.
//!
//! This module defines what can sit on top of the video surface
//! (`Overlay`, `OverlayKind`), the sparse-update type used both for local
//! merges and as the PUT wire body (`PartialOverlay`), and the runtime store
//! that owns all live overlays (`OverlayStore`).
//!
//! Data flows into this layer from the network (the initial snapshot and
//! acknowledged creates) and from the interaction engine (gesture and edit
//! mutations). The view layer reads the store in insertion order, which is
//! preserved purely for deterministic render order.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};

use crate::geometry::{Position, Size};

/// Unique identifier for an overlay, assigned by the remote store on
/// creation. The client never generates one.
pub type OverlayId = String;

/// The kind of an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayKind {
    /// A literal text label; `content` holds the text itself.
    Text,
    /// An image; `content` holds a resolvable media reference (URL or
    /// object-URL).
    Image,
}

/// An overlay composited on top of the video surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    /// Server-assigned identifier; stable for the overlay's lifetime.
    pub id: OverlayId,
    /// Text or image.
    pub kind: OverlayKind,
    /// Label text for text overlays; media reference for image overlays.
    pub content: String,
    /// Pixel offset from the container origin.
    pub position: Position,
    /// Pixel dimensions.
    pub size: Size,
    /// Whether the remote store has acknowledged this overlay. An
    /// unpersisted overlay never produces remote update/delete traffic.
    pub persisted: bool,
}

/// Sparse update for an overlay. Only present fields are applied locally,
/// and only present fields are serialized onto the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialOverlay {
    /// New content, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// New position, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// New size, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
}

/// In-memory store of overlays, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlayStore {
    overlays: Vec<Overlay>,
}

impl OverlayStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an overlay. If one with the same `id` already exists it is
    /// replaced in place, keeping its render order; the store never holds
    /// two overlays with the same id.
    pub fn insert(&mut self, overlay: Overlay) {
        if let Some(existing) = self.overlays.iter_mut().find(|o| o.id == overlay.id) {
            *existing = overlay;
        } else {
            self.overlays.push(overlay);
        }
    }

    /// Remove an overlay by id, returning it if it was present.
    pub fn remove(&mut self, id: &str) -> Option<Overlay> {
        let index = self.overlays.iter().position(|o| o.id == id)?;
        Some(self.overlays.remove(index))
    }

    /// Return a reference to an overlay by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Overlay> {
        self.overlays.iter().find(|o| o.id == id)
    }

    /// Apply a sparse update to an existing overlay. Returns `false` if no
    /// overlay has this id — a recoverable no-op, not an error.
    pub fn apply_partial(&mut self, id: &str, partial: &PartialOverlay) -> bool {
        let Some(overlay) = self.overlays.iter_mut().find(|o| o.id == id) else {
            return false;
        };
        if let Some(ref content) = partial.content {
            overlay.content.clone_from(content);
        }
        if let Some(position) = partial.position {
            overlay.position = position;
        }
        if let Some(size) = partial.size {
            overlay.size = size;
        }
        true
    }

    /// Remove every overlay.
    pub fn clear(&mut self) {
        self.overlays.clear();
    }

    /// Replace all overlays with a full snapshot.
    pub fn load_snapshot(&mut self, overlays: Vec<Overlay>) {
        self.clear();
        for overlay in overlays {
            self.insert(overlay);
        }
    }

    /// Remove and return every overlay, leaving the store empty.
    pub fn take_all(&mut self) -> Vec<Overlay> {
        std::mem::take(&mut self.overlays)
    }

    /// Overlays in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Overlay> {
        self.overlays.iter()
    }

    /// Number of overlays currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    /// Returns `true` if the store contains no overlays.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }
}
