//! Bindings to the global `Hls` constructor from the hls.js script tag.
//!
//! The studio needs three things from the protocol client: attach, a ready
//! signal, and a fatal/non-fatal error signal. Everything else (segment
//! fetching, adaptive bitrate, recovery of non-fatal errors) stays inside
//! hls.js.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// An hls.js playback instance.
    pub type Hls;

    #[wasm_bindgen(constructor)]
    pub fn new() -> Hls;

    /// Whether hls.js can run on this platform (MediaSource support).
    #[wasm_bindgen(static_method_of = Hls, js_name = isSupported)]
    pub fn is_supported() -> bool;

    #[wasm_bindgen(method, js_name = loadSource)]
    pub fn load_source(this: &Hls, url: &str);

    #[wasm_bindgen(method, js_name = attachMedia)]
    pub fn attach_media(this: &Hls, media: &web_sys::HtmlMediaElement);

    /// Subscribe to an hls.js event. Listeners receive `(event, data)`.
    #[wasm_bindgen(method)]
    pub fn on(this: &Hls, event: &str, listener: &js_sys::Function);

    /// Detach from the media element and release all resources.
    #[wasm_bindgen(method)]
    pub fn destroy(this: &Hls);
}

/// Fired once the manifest has been parsed and playback can start.
pub const EVENT_MANIFEST_PARSED: &str = "hlsManifestParsed";

/// Fired on every playback error, fatal or not.
pub const EVENT_ERROR: &str = "hlsError";

/// Read the `fatal` flag from an `hlsError` event payload. Anything
/// malformed counts as non-fatal — hls.js keeps handling those itself.
#[must_use]
pub fn error_is_fatal(data: &JsValue) -> bool {
    js_sys::Reflect::get(data, &JsValue::from_str("fatal"))
        .map(|value| value.as_bool().unwrap_or(false))
        .unwrap_or(false)
}
