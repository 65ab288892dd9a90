//! Editor session state: the overlay engine plus the initial-load flag.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use overlay::engine::EngineCore;

/// Everything the editor session owns. One instance per app, held in a
/// reactive signal at the root.
#[derive(Clone, Debug)]
pub struct EditorState {
    /// The overlay state engine: store, selection, gestures.
    pub engine: EngineCore,
    /// True until the initial overlay fetch resolves (successfully or not).
    pub loading: bool,
}

impl Default for EditorState {
    fn default() -> Self {
        Self { engine: EngineCore::new(), loading: true }
    }
}
