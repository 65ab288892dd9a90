//! The live video element and its HLS attachment lifecycle.
//!
//! RESOURCE OWNERSHIP
//! ==================
//! This component exclusively owns the media attachment (the hls.js
//! instance plus its event closures), held in a local-storage slot so the
//! non-`Send` JS handles can outlive the mount effect. The attachment is
//! acquired once the video element mounts and released exactly once on
//! unmount — `take()` on the slot makes a second teardown a safe no-op.
//! Status changes flow through the pure `StreamStatus` machine; non-fatal
//! playback errors deliberately leave it untouched.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use overlay::stream::StreamStatus;

#[cfg(feature = "csr")]
struct HlsAttachment {
    hls: crate::media::hls::Hls,
    _on_manifest: wasm_bindgen::closure::Closure<dyn FnMut(wasm_bindgen::JsValue, wasm_bindgen::JsValue)>,
    _on_error: wasm_bindgen::closure::Closure<dyn FnMut(wasm_bindgen::JsValue, wasm_bindgen::JsValue)>,
}

#[cfg(feature = "csr")]
impl HlsAttachment {
    fn destroy(self) {
        self.hls.destroy();
        // Event closures drop with self, after the instance is gone.
    }
}

/// The `<video>` element for the live stream.
///
/// On mount, attaches via hls.js when supported, or falls back to the
/// platform's native HLS path when the element reports support for the
/// playlist MIME type. If neither path is viable the stream status simply
/// stays `Connecting`.
#[component]
pub fn VideoHost() -> impl IntoView {
    let video_ref = NodeRef::<leptos::html::Video>::new();

    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::JsValue;
        use wasm_bindgen::closure::Closure;

        use overlay::stream::StreamEvent;

        use crate::consts::{HLS_MIME_TYPE, stream_url};
        use crate::media::hls::{self, Hls};

        let stream = expect_context::<RwSignal<StreamStatus>>();
        let attachment = StoredValue::new_local(None::<HlsAttachment>);
        let attach_started = StoredValue::new_local(false);

        Effect::new(move || {
            let Some(video) = video_ref.get() else {
                return;
            };
            if attach_started.get_value() {
                return;
            }
            attach_started.set_value(true);

            if Hls::is_supported() {
                let hls = Hls::new();

                let on_manifest = {
                    let video = video.clone();
                    Closure::<dyn FnMut(JsValue, JsValue)>::new(move |_event: JsValue, _data: JsValue| {
                        let _ = video.play();
                        stream.update(|s| *s = s.apply(StreamEvent::ManifestReady));
                    })
                };
                let on_error = Closure::<dyn FnMut(JsValue, JsValue)>::new(move |_event: JsValue, data: JsValue| {
                    let fatal = hls::error_is_fatal(&data);
                    if fatal {
                        log::error!("fatal stream playback error");
                    }
                    stream.update(|s| *s = s.apply(StreamEvent::PlaybackError { fatal }));
                });

                hls.on(hls::EVENT_MANIFEST_PARSED, on_manifest.as_ref().unchecked_ref());
                hls.on(hls::EVENT_ERROR, on_error.as_ref().unchecked_ref());
                hls.load_source(&stream_url());
                hls.attach_media(&video);

                attachment.set_value(Some(HlsAttachment {
                    hls,
                    _on_manifest: on_manifest,
                    _on_error: on_error,
                }));
            } else if !video.can_play_type(HLS_MIME_TYPE).is_empty() {
                // Native HLS path (Safari); no instance to own.
                video.set_src(&stream_url());
                stream.update(|s| *s = s.apply(StreamEvent::ManifestReady));
            }
            // Neither path viable: stay Connecting.
        });

        on_cleanup(move || {
            let released = attachment.try_update_value(|slot| slot.take()).flatten();
            if let Some(released) = released {
                released.destroy();
            }
        });
    }

    view! {
        <video class="stage__video" node_ref=video_ref autoplay=true muted=true controls=true></video>
    }
}
