//! Page header: studio title and the live stream status pill.

#[cfg(test)]
#[path = "studio_header_test.rs"]
mod studio_header_test;

use leptos::prelude::*;

use overlay::stream::StreamStatus;

/// Header bar shown above the stage.
#[component]
pub fn StudioHeader() -> impl IntoView {
    let stream = expect_context::<RwSignal<StreamStatus>>();

    let pill_class = move || {
        format!(
            "studio-header__status studio-header__status--{}",
            status_modifier(stream.get())
        )
    };

    view! {
        <header class="studio-header">
            <h1 class="studio-header__title">"Livestream Overlay Studio"</h1>
            <div class=pill_class>
                <span class="studio-header__status-dot"></span>
                {move || status_label(stream.get())}
            </div>
        </header>
    }
}

fn status_label(status: StreamStatus) -> &'static str {
    match status {
        StreamStatus::Connecting => "CONNECTING...",
        StreamStatus::Live => "LIVE",
        StreamStatus::Error => "ERROR",
    }
}

fn status_modifier(status: StreamStatus) -> &'static str {
    match status {
        StreamStatus::Connecting => "connecting",
        StreamStatus::Live => "live",
        StreamStatus::Error => "error",
    }
}
