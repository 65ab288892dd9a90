#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// clamp_position
// =============================================================

#[test]
fn clamp_position_leaves_non_negative_untouched() {
    let p = clamp_position(Position::new(10, 20));
    assert_eq!(p, Position::new(10, 20));
}

#[test]
fn clamp_position_floors_negative_x() {
    assert_eq!(clamp_position(Position::new(-5, 20)), Position::new(0, 20));
}

#[test]
fn clamp_position_floors_negative_y() {
    assert_eq!(clamp_position(Position::new(5, -20)), Position::new(5, 0));
}

#[test]
fn clamp_position_floors_both_axes() {
    assert_eq!(clamp_position(Position::new(-1, -1)), Position::new(0, 0));
}

#[test]
fn clamp_position_zero_is_fixed_point() {
    assert_eq!(clamp_position(Position::new(0, 0)), Position::new(0, 0));
}

// =============================================================
// clamp_size
// =============================================================

#[test]
fn clamp_size_leaves_large_sizes_untouched() {
    assert_eq!(clamp_size(Size::new(300, 200)), Size::new(300, 200));
}

#[test]
fn clamp_size_floors_width() {
    assert_eq!(clamp_size(Size::new(10, 200)), Size::new(50, 200));
}

#[test]
fn clamp_size_floors_height() {
    assert_eq!(clamp_size(Size::new(300, 4)), Size::new(300, 30));
}

#[test]
fn clamp_size_floors_negative_dimensions() {
    assert_eq!(clamp_size(Size::new(-400, -1000)), Size::new(50, 30));
}

#[test]
fn clamp_size_minimum_is_fixed_point() {
    assert_eq!(clamp_size(Size::new(50, 30)), Size::new(50, 30));
}

// =============================================================
// Position::from_pointer
// =============================================================

#[test]
fn position_from_pointer_rounds_to_nearest_pixel() {
    assert_eq!(Position::from_pointer(10.4, 19.6), Position::new(10, 20));
}

#[test]
fn position_from_pointer_clamps_negative() {
    assert_eq!(Position::from_pointer(-3.7, 12.0), Position::new(0, 12));
}

#[test]
fn position_from_pointer_nan_maps_to_origin() {
    // Saturating cast sends NaN to 0; the clamp keeps it there.
    assert_eq!(Position::from_pointer(f64::NAN, f64::NAN), Position::new(0, 0));
}

#[test]
fn position_from_pointer_negative_infinity_clamps_to_origin() {
    assert_eq!(Position::from_pointer(f64::NEG_INFINITY, 5.0), Position::new(0, 5));
}

#[test]
fn position_from_pointer_positive_infinity_saturates() {
    assert_eq!(Position::from_pointer(f64::INFINITY, 5.0), Position::new(i32::MAX, 5));
}

// =============================================================
// Size::from_pointer
// =============================================================

#[test]
fn size_from_pointer_rounds_to_nearest_pixel() {
    assert_eq!(Size::from_pointer(120.5, 80.2), Size::new(121, 80));
}

#[test]
fn size_from_pointer_clamps_to_floor() {
    assert_eq!(Size::from_pointer(-200.0, -200.0), Size::new(50, 30));
}

#[test]
fn size_from_pointer_nan_maps_to_floor() {
    assert_eq!(Size::from_pointer(f64::NAN, f64::NAN), Size::new(50, 30));
}

// =============================================================
// Point
// =============================================================

#[test]
fn point_new_stores_coordinates() {
    let p = Point::new(1.5, -2.5);
    assert_eq!(p.x, 1.5);
    assert_eq!(p.y, -2.5);
}

#[test]
fn point_clone_and_copy() {
    let a = Point::new(3.0, 4.0);
    let b = a;
    assert_eq!(a, b);
}

// =============================================================
// Serde wire shapes
// =============================================================

#[test]
fn position_serializes_as_xy_object() {
    let json = serde_json::to_string(&Position::new(50, 60)).unwrap();
    assert_eq!(json, "{\"x\":50,\"y\":60}");
}

#[test]
fn size_serializes_as_width_height_object() {
    let json = serde_json::to_string(&Size::new(180, 50)).unwrap();
    assert_eq!(json, "{\"width\":180,\"height\":50}");
}

#[test]
fn position_deserializes_from_wire_object() {
    let p: Position = serde_json::from_str("{\"x\":7,\"y\":9}").unwrap();
    assert_eq!(p, Position::new(7, 9));
}
