use super::*;
use overlay::consts::{TEXT_DEFAULT_POSITION, TEXT_DEFAULT_SIZE};
use overlay::doc::Overlay;

fn make_overlay(id: &str, kind: OverlayKind) -> Overlay {
    Overlay {
        id: id.to_owned(),
        kind,
        content: "caption".to_owned(),
        position: TEXT_DEFAULT_POSITION,
        size: TEXT_DEFAULT_SIZE,
        persisted: true,
    }
}

#[test]
fn reset_confirm_message_names_the_consequence() {
    assert_eq!(RESET_CONFIRM_MESSAGE, "Delete all overlays? This cannot be undone.");
}

#[test]
fn editable_text_target_none_without_selection() {
    let mut engine = EngineCore::new();
    engine.load_snapshot(vec![make_overlay("a", OverlayKind::Text)]);
    assert_eq!(editable_text_target(&engine), None);
}

#[test]
fn editable_text_target_returns_selected_text_overlay() {
    let mut engine = EngineCore::new();
    engine.load_snapshot(vec![make_overlay("a", OverlayKind::Text)]);
    engine.select("a");
    assert_eq!(
        editable_text_target(&engine),
        Some(("a".to_owned(), "caption".to_owned()))
    );
}

#[test]
fn editable_text_target_none_for_selected_image() {
    let mut engine = EngineCore::new();
    engine.load_snapshot(vec![make_overlay("a", OverlayKind::Image)]);
    engine.select("a");
    assert_eq!(editable_text_target(&engine), None);
}
