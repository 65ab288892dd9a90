//! Fire-and-forget persistence of engine actions.
//!
//! Commit points in the engine return [`Action`]s; this module pushes them
//! to the backend in the background. Updates and deletes are never awaited
//! by the interaction path — a failure is logged and local optimistic state
//! remains the user's intended truth. Calls for one overlay are not
//! sequenced, so a slow earlier update can land after a later one
//! (last-resolved-wins, accepted).

use overlay::engine::Action;

/// Persist one engine action in the background.
pub fn push_action(action: Action) {
    #[cfg(feature = "csr")]
    {
        use super::api;

        leptos::task::spawn_local(async move {
            match action {
                Action::OverlayUpdated { id, fields } => {
                    if let Err(err) = api::update_overlay(&id, &fields).await {
                        log::error!("overlay update {id}: {err}");
                    }
                }
                Action::OverlayDeleted { id } => {
                    if let Err(err) = api::delete_overlay(&id).await {
                        log::error!("overlay delete {id}: {err}");
                    }
                }
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = action;
    }
}

/// Persist a batch of engine actions, each in its own background task.
pub fn push_actions(actions: Vec<Action>) {
    for action in actions {
        push_action(action);
    }
}
