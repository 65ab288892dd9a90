//! Controls panel: add, upload, delete, reset, and inline text editing.
//!
//! Creation is the one remote call the UI awaits — the overlay enters the
//! store only once the backend hands back an id, so a failed create leaves
//! nothing behind to reconcile. Deletes and edits apply locally first and
//! persist fire-and-forget.

#[cfg(test)]
#[path = "controls_panel_test.rs"]
mod controls_panel_test;

use leptos::prelude::*;

use overlay::doc::OverlayKind;
use overlay::engine::EngineCore;

use crate::net::sync;
use crate::state::editor::EditorState;

/// Message shown before the irreversible bulk delete.
pub const RESET_CONFIRM_MESSAGE: &str = "Delete all overlays? This cannot be undone.";

/// The controls column next to the stage.
#[component]
pub fn ControlsPanel() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let file_ref = NodeRef::<leptos::html::Input>::new();

    let no_selection = move || editor.with(|e| e.engine.selection().is_none());
    let no_overlays = move || editor.with(|e| e.engine.doc.is_empty());
    let text_target = move || editor.with(|e| editable_text_target(&e.engine));

    let on_add_text = move |_ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            use crate::net::{api, types::CreateOverlayRequest};

            leptos::task::spawn_local(async move {
                let payload = CreateOverlayRequest::text();
                match api::create_overlay(&payload).await {
                    Some(id) => editor.update(|e| e.engine.insert_created(payload.into_overlay(id))),
                    None => log::error!("overlay create failed"),
                }
            });
        }
    };

    let on_upload_image = move |_ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use crate::net::{api, types::CreateOverlayRequest};

            let Some(input) = file_ref.get() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            // Local preview reference, usable before the create resolves.
            let Ok(preview_url) = web_sys::Url::create_object_url_with_blob(&file) else {
                return;
            };
            leptos::task::spawn_local(async move {
                let payload = CreateOverlayRequest::image(preview_url);
                match api::create_overlay(&payload).await {
                    Some(id) => editor.update(|e| e.engine.insert_created(payload.into_overlay(id))),
                    None => log::error!("overlay create failed"),
                }
            });
        }
    };

    let on_delete_selected = move |_ev: leptos::ev::MouseEvent| {
        let mut deleted = None;
        editor.update(|e| deleted = e.engine.delete_selected());
        if let Some(action) = deleted {
            sync::push_action(action);
        }
    };

    let on_reset_all = move |_ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            let confirmed = web_sys::window()
                .map(|w| w.confirm_with_message(RESET_CONFIRM_MESSAGE).unwrap_or(false))
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let mut deletes = Vec::new();
            editor.update(|e| deletes = e.engine.clear_all());
            sync::push_actions(deletes);
        }
    };

    let on_text_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        let Some(id) = editor.with(|e| e.engine.selection().map(str::to_owned)) else {
            return;
        };
        let mut updated = None;
        editor.update(|e| updated = e.engine.set_content(&id, value));
        if let Some(action) = updated {
            sync::push_action(action);
        }
    };

    view! {
        <div class="controls-panel">
            <h3 class="controls-panel__heading">"Controls"</h3>

            <div class="controls-panel__actions">
                <button class="btn btn--add-text" on:click=on_add_text>
                    "Add Text Overlay"
                </button>

                <label class="btn btn--upload">
                    "Upload Image"
                    <input
                        type="file"
                        accept="image/*"
                        class="controls-panel__file-input"
                        node_ref=file_ref
                        on:change=on_upload_image
                    />
                </label>

                <button class="btn btn--delete" disabled=no_selection on:click=on_delete_selected>
                    "Delete Selected"
                </button>

                <button class="btn btn--reset" disabled=no_overlays on:click=on_reset_all>
                    "Reset All"
                </button>
            </div>

            <Show when=move || text_target().is_some()>
                <div class="controls-panel__editor">
                    <label class="controls-panel__editor-label">"Edit Text"</label>
                    <input
                        type="text"
                        class="controls-panel__editor-input"
                        placeholder="Enter text..."
                        prop:value=move || text_target().map(|(_, content)| content).unwrap_or_default()
                        on:input=on_text_input
                    />
                </div>
            </Show>

            <div class="controls-panel__tips">
                <h4 class="controls-panel__tips-heading">"Quick Tips"</h4>
                <ul class="controls-panel__tips-list">
                    <li>"Click to select overlay"</li>
                    <li>"Drag to reposition"</li>
                    <li>"Use handle to resize"</li>
                    <li>"Changes auto-save"</li>
                </ul>
            </div>
        </div>
    }
}

/// The selected overlay's `(id, content)` when it is editable text.
fn editable_text_target(engine: &EngineCore) -> Option<(String, String)> {
    let overlay = engine.selected_overlay()?;
    (overlay.kind == OverlayKind::Text).then(|| (overlay.id.clone(), overlay.content.clone()))
}
