//! Studio configuration constants.

#[cfg(test)]
#[path = "consts_test.rs"]
mod consts_test;

/// Base URL of the overlay backend.
pub const BACKEND_BASE: &str = "http://localhost:5000";

/// MIME type probed for native HLS playback support.
pub const HLS_MIME_TYPE: &str = "application/vnd.apple.mpegurl";

/// URL of the live HLS playlist served by the backend.
#[must_use]
pub fn stream_url() -> String {
    format!("{BACKEND_BASE}/stream/stream.m3u8")
}
