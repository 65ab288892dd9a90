//! The interaction engine: store + selection + gesture handling.
//!
//! `EngineCore` owns the overlay store, the single-selection state, and the
//! active gesture. Pointer events mutate the store optimistically on every
//! move; the commit points (pointer-up, delete, bulk clear, text edit)
//! return [`Action`]s that the host is expected to persist to the remote
//! store. The engine itself never talks to the network, which keeps every
//! interaction path synchronous and natively testable.
//!
//! Persistence contract enforced here: an overlay whose creation has not
//! been acknowledged (`persisted == false`) never yields an update or
//! delete action, so nothing downstream can address an id the remote store
//! does not know.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::doc::{Overlay, OverlayId, OverlayStore, PartialOverlay};
use crate::geometry::{Point, Position, Size};
use crate::input::GestureState;

/// A commit point the host must persist remotely.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Persist a sparse update carrying only the fields the triggering
    /// operation changed.
    OverlayUpdated {
        /// Overlay to update.
        id: OverlayId,
        /// The changed field group.
        fields: PartialOverlay,
    },
    /// Delete the overlay from the remote store.
    OverlayDeleted {
        /// Overlay to delete.
        id: OverlayId,
    },
}

/// Core interaction state for one editor session.
#[derive(Debug, Clone, Default)]
pub struct EngineCore {
    /// The overlay store; single source of truth for render.
    pub doc: OverlayStore,
    selected_id: Option<OverlayId>,
    gesture: GestureState,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Data inputs ---

    /// Hydrate the store from the initial server snapshot.
    pub fn load_snapshot(&mut self, overlays: Vec<Overlay>) {
        self.doc.load_snapshot(overlays);
    }

    /// Insert an overlay whose creation the remote store has acknowledged,
    /// and select it.
    pub fn insert_created(&mut self, overlay: Overlay) {
        self.selected_id = Some(overlay.id.clone());
        self.doc.insert(overlay);
    }

    // --- Selection ---

    /// Select an overlay. Unknown ids are ignored.
    pub fn select(&mut self, id: &str) {
        if self.doc.get(id).is_some() {
            self.selected_id = Some(id.to_owned());
        }
    }

    /// Clear the selection (e.g. a pointer-down on empty space).
    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    /// The currently selected overlay id, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// The currently selected overlay, if any.
    #[must_use]
    pub fn selected_overlay(&self) -> Option<&Overlay> {
        self.doc.get(self.selected_id.as_deref()?)
    }

    /// The active gesture.
    #[must_use]
    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    // --- Gestures ---

    /// Pointer-down on an overlay body: select it and start dragging.
    /// Replaces any gesture already in flight. Unknown ids are ignored.
    pub fn begin_drag(&mut self, id: &str, pointer: Point) {
        let Some(overlay) = self.doc.get(id) else {
            return;
        };
        let grab_offset = Point::new(
            pointer.x - f64::from(overlay.position.x),
            pointer.y - f64::from(overlay.position.y),
        );
        self.selected_id = Some(id.to_owned());
        self.gesture = GestureState::Dragging { id: id.to_owned(), grab_offset };
    }

    /// Pointer-down on an overlay's resize handle. The handle only renders
    /// on the selected overlay, so this does not change selection.
    pub fn begin_resize(&mut self, id: &str, pointer: Point) {
        let Some(overlay) = self.doc.get(id) else {
            return;
        };
        self.gesture = GestureState::Resizing {
            id: id.to_owned(),
            anchor_pointer: pointer,
            anchor_size: overlay.size,
        };
    }

    /// Pointer-move: apply the computed geometry to the store immediately.
    /// Local-only; no action is emitted until the gesture completes. If the
    /// overlay disappeared mid-gesture this is a silent no-op.
    pub fn pointer_move(&mut self, pointer: Point) {
        match &self.gesture {
            GestureState::Idle => {}
            GestureState::Dragging { id, grab_offset } => {
                let position =
                    Position::from_pointer(pointer.x - grab_offset.x, pointer.y - grab_offset.y);
                self.doc
                    .apply_partial(id, &PartialOverlay { position: Some(position), ..Default::default() });
            }
            GestureState::Resizing { id, anchor_pointer, anchor_size } => {
                let size = Size::from_pointer(
                    f64::from(anchor_size.width) + (pointer.x - anchor_pointer.x),
                    f64::from(anchor_size.height) + (pointer.y - anchor_pointer.y),
                );
                self.doc
                    .apply_partial(id, &PartialOverlay { size: Some(size), ..Default::default() });
            }
        }
    }

    /// Pointer-up: end the gesture and emit at most one update carrying the
    /// field group this gesture affected, read back from the store (not the
    /// anchor). No action if the overlay is gone or not yet persisted.
    pub fn pointer_up(&mut self) -> Option<Action> {
        match std::mem::take(&mut self.gesture) {
            GestureState::Idle => None,
            GestureState::Dragging { id, .. } => {
                let overlay = self.doc.get(&id)?;
                if !overlay.persisted {
                    return None;
                }
                let fields = PartialOverlay { position: Some(overlay.position), ..Default::default() };
                Some(Action::OverlayUpdated { id, fields })
            }
            GestureState::Resizing { id, .. } => {
                let overlay = self.doc.get(&id)?;
                if !overlay.persisted {
                    return None;
                }
                let fields = PartialOverlay { size: Some(overlay.size), ..Default::default() };
                Some(Action::OverlayUpdated { id, fields })
            }
        }
    }

    // --- Edits ---

    /// Replace an overlay's content (inline text edit). Applies locally and
    /// emits an update for persisted overlays.
    pub fn set_content(&mut self, id: &str, content: String) -> Option<Action> {
        let fields = PartialOverlay { content: Some(content), ..Default::default() };
        if !self.doc.apply_partial(id, &fields) {
            return None;
        }
        let overlay = self.doc.get(id)?;
        overlay
            .persisted
            .then(|| Action::OverlayUpdated { id: id.to_owned(), fields })
    }

    /// Remove the selected overlay and clear selection. Emits a delete only
    /// for persisted overlays.
    pub fn delete_selected(&mut self) -> Option<Action> {
        let id = self.selected_id.take()?;
        let overlay = self.doc.remove(&id)?;
        overlay.persisted.then(|| Action::OverlayDeleted { id })
    }

    /// Remove every overlay, clearing selection and any gesture in flight.
    /// Emits one delete per persisted overlay.
    pub fn clear_all(&mut self) -> Vec<Action> {
        self.selected_id = None;
        self.gesture = GestureState::Idle;
        self.doc
            .take_all()
            .into_iter()
            .filter(|overlay| overlay.persisted)
            .map(|overlay| Action::OverlayDeleted { id: overlay.id })
            .collect()
    }
}
