//! Stream session status machine.
//!
//! The studio shows exactly one live media session per editor instance. The
//! protocol client (Hls.js or the browser's native HLS path) reports three
//! things we care about — attached, manifest ready, playback error — and
//! this module folds them into a display status. `Error` is terminal for
//! the session: recovering requires a fresh attach, which means a remount.

#[cfg(test)]
#[path = "stream_test.rs"]
mod stream_test;

/// Connection status of the live media session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StreamStatus {
    /// Attachment in progress; also the permanent state when no playback
    /// path is available on this platform.
    #[default]
    Connecting,
    /// Manifest parsed, playback running.
    Live,
    /// A fatal playback error ended the session. Terminal.
    Error,
}

/// A signal from the protocol client driving status transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamEvent {
    /// The stream manifest parsed; playback can start.
    ManifestReady,
    /// A playback error. Only fatal errors change the session status;
    /// recoverable ones are the protocol client's business.
    PlaybackError {
        /// Whether the protocol client considers the error unrecoverable.
        fatal: bool,
    },
}

impl StreamStatus {
    /// Fold one playback event into the session status.
    #[must_use]
    pub fn apply(self, event: StreamEvent) -> Self {
        match (self, event) {
            (Self::Error, _) | (_, StreamEvent::PlaybackError { fatal: true }) => Self::Error,
            (status, StreamEvent::PlaybackError { fatal: false }) => status,
            (Self::Connecting | Self::Live, StreamEvent::ManifestReady) => Self::Live,
        }
    }

    /// Whether playback is running.
    #[must_use]
    pub fn is_live(self) -> bool {
        matches!(self, Self::Live)
    }

    /// Whether the session has ended and cannot recover without a remount.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Error)
    }
}
