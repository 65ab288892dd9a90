//! Shared client-side state.
//!
//! The overlay engine lives behind one `RwSignal<EditorState>` owned by the
//! app root; the stream status is a second, independent signal. Splitting
//! the two keeps stream events from re-rendering the overlay layer and vice
//! versa.

pub mod editor;
