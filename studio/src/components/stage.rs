//! The editing stage: video surface, overlay layer, and gesture wiring.
//!
//! GESTURE WIRING
//! ==============
//! Pointer-downs on an overlay body or resize handle start an engine
//! gesture and capture the pointer on the surface element, so move/up
//! events keep arriving even when the pointer leaves the surface mid-drag.
//! Capture release happens on pointer-up and pointer-cancel alike, which
//! keeps acquisition and release symmetric on every exit path. Engine
//! moves apply optimistically to the store; the single action emitted at
//! pointer-up is pushed to the backend fire-and-forget.

#[cfg(test)]
#[path = "stage_test.rs"]
mod stage_test;

use leptos::prelude::*;

use overlay::geometry::Point;

use crate::components::video_host::VideoHost;
use crate::net::sync;
use crate::state::editor::EditorState;

/// The stage: live video with the overlay layer on top, plus the info bar.
#[component]
pub fn Stage() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let surface_ref = NodeRef::<leptos::html::Div>::new();

    let overlay_ids = move || {
        editor.with(|e| e.engine.doc.iter().map(|o| o.id.clone()).collect::<Vec<_>>())
    };
    let count_label = move || overlay_count_label(editor.with(|e| e.engine.doc.len()));

    // Pointer-down that reaches the surface hit empty space (overlay
    // handlers stop propagation): selection clears, nothing persists.
    let on_surface_pointer_down = move |_ev: leptos::ev::PointerEvent| {
        editor.update(|e| e.engine.clear_selection());
    };

    let on_surface_pointer_move = move |ev: leptos::ev::PointerEvent| {
        if editor.with(|e| e.engine.gesture().is_idle()) {
            return;
        }
        let pointer = Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
        editor.update(|e| e.engine.pointer_move(pointer));
    };

    let on_surface_pointer_up = move |ev: leptos::ev::PointerEvent| {
        if let Some(surface) = surface_ref.get() {
            let _ = surface.release_pointer_capture(ev.pointer_id());
        }
        let mut committed = None;
        editor.update(|e| committed = e.engine.pointer_up());
        if let Some(action) = committed {
            sync::push_action(action);
        }
    };

    view! {
        <div class="stage">
            <div
                class="stage__surface"
                node_ref=surface_ref
                on:pointerdown=on_surface_pointer_down
                on:pointermove=on_surface_pointer_move
                on:pointerup=on_surface_pointer_up
                on:pointercancel=on_surface_pointer_up
            >
                <VideoHost/>
                <For
                    each=overlay_ids
                    key=|id| id.clone()
                    children=move |id: String| {
                        view! { <OverlayItem id=id surface_ref=surface_ref/> }
                    }
                />
            </div>
            <div class="stage__info-bar">
                <span>{count_label}</span>
                <span>"RTSP → HLS Stream"</span>
            </div>
        </div>
    }
}

/// One overlay on the stage. Everything it shows is read reactively from
/// the store by id, so in-flight gestures and remote snapshots render
/// without re-keying the list.
#[component]
fn OverlayItem(id: String, surface_ref: NodeRef<leptos::html::Div>) -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();

    let style = {
        let id = id.clone();
        move || {
            editor.with(|e| {
                e.engine
                    .doc
                    .get(&id)
                    .map(|o| {
                        format!(
                            "left:{}px;top:{}px;width:{}px;height:{}px;",
                            o.position.x, o.position.y, o.size.width, o.size.height
                        )
                    })
                    .unwrap_or_default()
            })
        }
    };

    let item_class = {
        let id = id.clone();
        move || {
            let selected = editor.with(|e| e.engine.selection() == Some(id.as_str()));
            if selected {
                "overlay-item overlay-item--selected"
            } else {
                "overlay-item"
            }
        }
    };

    let text_content = {
        let id = id.clone();
        move || {
            editor.with(|e| {
                e.engine
                    .doc
                    .get(&id)
                    .filter(|o| o.kind == overlay::doc::OverlayKind::Text)
                    .map(|o| o.content.clone())
            })
        }
    };

    let image_src = {
        let id = id.clone();
        move || {
            editor.with(|e| {
                e.engine
                    .doc
                    .get(&id)
                    .filter(|o| o.kind == overlay::doc::OverlayKind::Image)
                    .map(|o| o.content.clone())
            })
        }
    };

    let show_handle = {
        let id = id.clone();
        move || editor.with(|e| e.engine.selection() == Some(id.as_str()))
    };

    let on_body_pointer_down = {
        let id = id.clone();
        move |ev: leptos::ev::PointerEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            if let Some(surface) = surface_ref.get() {
                let _ = surface.set_pointer_capture(ev.pointer_id());
            }
            let pointer = Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
            editor.update(|e| e.engine.begin_drag(&id, pointer));
        }
    };

    let on_handle_pointer_down = {
        let id = id.clone();
        move |ev: leptos::ev::PointerEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            if let Some(surface) = surface_ref.get() {
                let _ = surface.set_pointer_capture(ev.pointer_id());
            }
            let pointer = Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
            editor.update(|e| e.engine.begin_resize(&id, pointer));
        }
    };

    view! {
        <div class=item_class style=style on:pointerdown=on_body_pointer_down>
            {move || text_content().map(|content| view! { <span class="overlay-item__text">{content}</span> })}
            {move || image_src().map(|src| view! { <img class="overlay-item__image" src=src draggable="false"/> })}
            <Show when=show_handle>
                <div class="overlay-item__handle" on:pointerdown=on_handle_pointer_down.clone()></div>
            </Show>
        </div>
    }
}

fn overlay_count_label(count: usize) -> String {
    format!("{count} overlay(s)")
}
