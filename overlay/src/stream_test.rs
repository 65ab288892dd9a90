use super::*;

// =============================================================
// Defaults and predicates
// =============================================================

#[test]
fn default_status_is_connecting() {
    assert_eq!(StreamStatus::default(), StreamStatus::Connecting);
}

#[test]
fn predicates_match_variants() {
    assert!(!StreamStatus::Connecting.is_live());
    assert!(StreamStatus::Live.is_live());
    assert!(!StreamStatus::Error.is_live());
    assert!(!StreamStatus::Connecting.is_terminal());
    assert!(!StreamStatus::Live.is_terminal());
    assert!(StreamStatus::Error.is_terminal());
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn manifest_ready_moves_connecting_to_live() {
    let status = StreamStatus::Connecting.apply(StreamEvent::ManifestReady);
    assert_eq!(status, StreamStatus::Live);
}

#[test]
fn manifest_ready_while_live_stays_live() {
    let status = StreamStatus::Live.apply(StreamEvent::ManifestReady);
    assert_eq!(status, StreamStatus::Live);
}

#[test]
fn fatal_error_while_connecting_goes_to_error() {
    let status = StreamStatus::Connecting.apply(StreamEvent::PlaybackError { fatal: true });
    assert_eq!(status, StreamStatus::Error);
}

#[test]
fn fatal_error_while_live_goes_to_error() {
    let status = StreamStatus::Live.apply(StreamEvent::PlaybackError { fatal: true });
    assert_eq!(status, StreamStatus::Error);
}

#[test]
fn non_fatal_error_does_not_change_status() {
    let from_connecting = StreamStatus::Connecting.apply(StreamEvent::PlaybackError { fatal: false });
    assert_eq!(from_connecting, StreamStatus::Connecting);

    let from_live = StreamStatus::Live.apply(StreamEvent::PlaybackError { fatal: false });
    assert_eq!(from_live, StreamStatus::Live);
}

#[test]
fn ready_then_non_fatal_error_stays_live() {
    let status = StreamStatus::Connecting
        .apply(StreamEvent::ManifestReady)
        .apply(StreamEvent::PlaybackError { fatal: false });
    assert_eq!(status, StreamStatus::Live);
}

#[test]
fn error_is_terminal_for_every_event() {
    let events = [
        StreamEvent::ManifestReady,
        StreamEvent::PlaybackError { fatal: false },
        StreamEvent::PlaybackError { fatal: true },
    ];
    for event in events {
        assert_eq!(StreamStatus::Error.apply(event), StreamStatus::Error);
    }
}
