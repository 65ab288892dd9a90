//! Root application component and shared context wiring.

use leptos::prelude::*;

use overlay::stream::StreamStatus;

use crate::pages::studio::StudioPage;
use crate::state::editor::EditorState;

/// Root application component.
///
/// Owns the editor session state and the stream session status, provided as
/// reactive contexts to every child component. Both live exactly as long as
/// the app instance — no ambient globals.
#[component]
pub fn App() -> impl IntoView {
    let editor = RwSignal::new(EditorState::default());
    let stream = RwSignal::new(StreamStatus::default());

    provide_context(editor);
    provide_context(stream);

    view! { <StudioPage/> }
}
