//! The studio page: header, stage, and controls.
//!
//! Kicks off the initial overlay fetch on mount. A failed fetch is not
//! fatal — the editor starts with an empty set and the loading state ends
//! either way.

use leptos::prelude::*;

use crate::components::controls_panel::ControlsPanel;
use crate::components::stage::Stage;
use crate::components::studio_header::StudioHeader;
use crate::state::editor::EditorState;

/// The single-page studio workspace.
#[component]
pub fn StudioPage() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();

    #[cfg(feature = "csr")]
    {
        use crate::net::{api, types::OverlayRecord};

        leptos::task::spawn_local(async move {
            let records = api::fetch_overlays().await;
            editor.update(|e| {
                match records {
                    Some(records) => {
                        let overlays = records.into_iter().map(OverlayRecord::into_overlay).collect();
                        e.engine.load_snapshot(overlays);
                    }
                    None => log::error!("overlay fetch failed; starting empty"),
                }
                e.loading = false;
            });
        });
    }

    let loading = move || editor.with(|e| e.loading);

    view! {
        <div class="studio-page">
            <StudioHeader/>
            <main class="studio-page__main">
                <Stage/>
                <ControlsPanel/>
            </main>
            <Show when=loading>
                <div class="studio-page__loading">"Loading overlays..."</div>
            </Show>
        </div>
    }
}
