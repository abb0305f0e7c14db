#![allow(clippy::float_cmp)]

use super::*;
use crate::geometry::far_corner;

// =============================================================
// Helpers
// =============================================================

fn anchor_px() -> Size {
    Size::new(6.0, 6.0)
}

fn make_image(x: f64, y: f64, w: f64, h: f64) -> ImageObject {
    ImageObject::new(Uuid::new_v4(), Point::new(x, y), Size::new(w, h), anchor_px())
}

fn assert_anchors_synced(image: &ImageObject) {
    for corner in Corner::ALL {
        let expected = corner.point_of(image.pos(), image.size()) - anchor_px().half();
        assert_eq!(image.anchor(corner).pos(), expected, "{corner:?} anchor is stale");
    }
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_sets_geometry() {
    let image = make_image(0.0, 0.0, 100.0, 80.0);
    assert_eq!(image.size(), Size::new(100.0, 80.0));
    assert_eq!(image.pos(), Point::new(0.0, 0.0));
    assert_eq!(image.bounds(), Bounds::new(Point::new(0.0, 0.0), Size::new(100.0, 80.0)));
}

#[test]
fn new_places_anchors_on_corners() {
    let image = make_image(0.0, 0.0, 100.0, 80.0);
    assert_eq!(image.anchor(Corner::TopLeft).pos(), Point::new(-3.0, -3.0));
    assert_eq!(image.anchor(Corner::TopRight).pos(), Point::new(97.0, -3.0));
    assert_eq!(image.anchor(Corner::BottomLeft).pos(), Point::new(-3.0, 77.0));
    assert_eq!(image.anchor(Corner::BottomRight).pos(), Point::new(97.0, 77.0));
}

#[test]
fn anchors_are_stored_in_corner_order() {
    let image = make_image(0.0, 0.0, 10.0, 10.0);
    let corners: Vec<Corner> = image.anchors().iter().map(Anchor::corner).collect();
    assert_eq!(corners, Corner::ALL.to_vec());
}

// =============================================================
// move_to
// =============================================================

#[test]
fn move_to_is_absolute() {
    let mut image = make_image(10.0, 10.0, 100.0, 80.0);
    image.move_to(Point::new(50.0, 50.0));
    assert_eq!(image.pos(), Point::new(50.0, 50.0));
    image.move_to(Point::new(50.0, 50.0));
    assert_eq!(image.pos(), Point::new(50.0, 50.0));
}

#[test]
fn move_to_keeps_size() {
    let mut image = make_image(0.0, 0.0, 100.0, 80.0);
    image.move_to(Point::new(-40.0, 300.0));
    assert_eq!(image.size(), Size::new(100.0, 80.0));
}

#[test]
fn move_to_allows_off_canvas() {
    let mut image = make_image(0.0, 0.0, 100.0, 80.0);
    image.move_to(Point::new(-500.0, -500.0));
    assert_eq!(image.pos(), Point::new(-500.0, -500.0));
    assert_anchors_synced(&image);
}

#[test]
fn move_to_resyncs_anchors() {
    let mut image = make_image(0.0, 0.0, 100.0, 80.0);
    image.move_to(Point::new(50.0, 50.0));
    assert_anchors_synced(&image);
    assert_eq!(image.anchor(Corner::TopLeft).pos(), Point::new(47.0, 47.0));
    assert_eq!(image.anchor(Corner::BottomRight).pos(), Point::new(147.0, 127.0));
}

// =============================================================
// resize_to
// =============================================================

#[test]
fn resize_bottom_right_changes_only_size() {
    let mut image = make_image(0.0, 0.0, 100.0, 80.0);
    image.resize_to(Corner::BottomRight, Point::new(100.0, 80.0), Point::new(150.0, 130.0));
    assert_eq!(image.size(), Size::new(150.0, 130.0));
    assert_eq!(image.pos(), Point::new(0.0, 0.0));
    assert_anchors_synced(&image);
}

#[test]
fn resize_bottom_right_never_moves_for_any_delta() {
    let deltas = [(-30.0, 12.0), (0.0, 0.0), (200.0, -500.0), (-1.5, -1.5)];
    for (dx, dy) in deltas {
        let mut image = make_image(20.0, 30.0, 100.0, 80.0);
        let from = Point::new(120.0, 110.0);
        image.resize_to(Corner::BottomRight, from, Point::new(from.x + dx, from.y + dy));
        assert_eq!(image.pos(), Point::new(20.0, 30.0));
    }
}

#[test]
fn resize_top_left_preserves_bottom_right_corner() {
    let mut image = make_image(0.0, 0.0, 100.0, 80.0);
    let before = far_corner(image.pos(), image.size());
    image.resize_to(Corner::TopLeft, Point::new(0.0, 0.0), Point::new(20.0, 20.0));
    assert_eq!(image.pos(), Point::new(20.0, 20.0));
    assert_eq!(image.size(), Size::new(80.0, 60.0));
    assert_eq!(far_corner(image.pos(), image.size()), before);
    assert_anchors_synced(&image);
}

#[test]
fn resize_top_left_outward_grows() {
    let mut image = make_image(50.0, 50.0, 100.0, 80.0);
    image.resize_to(Corner::TopLeft, Point::new(50.0, 50.0), Point::new(30.0, 40.0));
    assert_eq!(image.pos(), Point::new(30.0, 40.0));
    assert_eq!(image.size(), Size::new(120.0, 90.0));
}

#[test]
fn resize_top_right_keeps_x() {
    let mut image = make_image(10.0, 10.0, 100.0, 80.0);
    image.resize_to(Corner::TopRight, Point::new(110.0, 10.0), Point::new(130.0, 0.0));
    assert_eq!(image.size(), Size::new(120.0, 90.0));
    assert_eq!(image.pos(), Point::new(10.0, 0.0));
    assert_anchors_synced(&image);
}

#[test]
fn resize_bottom_left_keeps_y() {
    let mut image = make_image(10.0, 10.0, 100.0, 80.0);
    image.resize_to(Corner::BottomLeft, Point::new(10.0, 90.0), Point::new(20.0, 100.0));
    assert_eq!(image.size(), Size::new(90.0, 90.0));
    assert_eq!(image.pos(), Point::new(20.0, 10.0));
    assert_anchors_synced(&image);
}

#[test]
fn resize_incremental_segments_accumulate() {
    let mut image = make_image(0.0, 0.0, 100.0, 80.0);
    let path = [Point::new(100.0, 80.0), Point::new(110.0, 85.0), Point::new(125.0, 100.0), Point::new(150.0, 130.0)];
    for pair in path.windows(2) {
        image.resize_to(Corner::BottomRight, pair[0], pair[1]);
    }
    assert_eq!(image.size(), Size::new(150.0, 130.0));
}

#[test]
fn resize_past_opposite_corner_inverts_when_allowed() {
    let mut image = make_image(0.0, 0.0, 100.0, 80.0);
    image.resize_to(Corner::BottomRight, Point::new(100.0, 80.0), Point::new(-20.0, -10.0));
    assert_eq!(image.size(), Size::new(-20.0, -10.0));
    assert_eq!(image.pos(), Point::new(0.0, 0.0));
    assert_anchors_synced(&image);
}

// =============================================================
// set_bounds / apply_policy
// =============================================================

#[test]
fn set_bounds_resyncs_anchors() {
    let mut image = make_image(0.0, 0.0, 100.0, 80.0);
    image.set_bounds(Bounds::new(Point::new(10.0, 20.0), Size::new(30.0, 40.0)));
    assert_eq!(image.pos(), Point::new(10.0, 20.0));
    assert_eq!(image.size(), Size::new(30.0, 40.0));
    assert_anchors_synced(&image);
}

fn clamp(bounds: Bounds, corner: Corner) -> Bounds {
    apply_policy(bounds, corner, ResizePolicy::ClampToZero)
}

#[test]
fn allow_inversion_passes_bounds_through() {
    let inverted = Bounds::new(Point::new(0.0, 0.0), Size::new(-20.0, -10.0));
    assert_eq!(apply_policy(inverted, Corner::TopLeft, ResizePolicy::AllowInversion), inverted);
}

#[test]
fn clamp_bottom_right_stops_at_zero() {
    let start = Bounds::new(Point::new(0.0, 0.0), Size::new(100.0, 80.0));
    let signed = resize_bounds(start, Corner::BottomRight, Point::new(100.0, 80.0), Point::new(-20.0, -10.0));
    assert_eq!(clamp(signed, Corner::BottomRight), Bounds::new(Point::new(0.0, 0.0), Size::new(0.0, 0.0)));
}

#[test]
fn clamp_top_left_pins_to_far_edges() {
    let start = Bounds::new(Point::new(0.0, 0.0), Size::new(100.0, 80.0));
    let signed = resize_bounds(start, Corner::TopLeft, Point::new(0.0, 0.0), Point::new(150.0, 120.0));
    assert_eq!(clamp(signed, Corner::TopLeft), Bounds::new(Point::new(100.0, 80.0), Size::new(0.0, 0.0)));
}

#[test]
fn clamp_only_affects_inverted_axis() {
    let start = Bounds::new(Point::new(0.0, 0.0), Size::new(100.0, 80.0));
    let signed = resize_bounds(start, Corner::TopRight, Point::new(100.0, 0.0), Point::new(-50.0, 20.0));
    assert_eq!(clamp(signed, Corner::TopRight), Bounds::new(Point::new(0.0, 20.0), Size::new(0.0, 60.0)));
}

#[test]
fn clamp_leaves_positive_bounds_untouched() {
    let bounds = Bounds::new(Point::new(20.0, 10.0), Size::new(90.0, 90.0));
    for corner in Corner::ALL {
        assert_eq!(clamp(bounds, corner), bounds);
    }
}

#[test]
fn resize_to_matches_resize_bounds() {
    let mut image = make_image(5.0, 5.0, 100.0, 80.0);
    let expected = resize_bounds(image.bounds(), Corner::BottomLeft, Point::new(5.0, 85.0), Point::new(15.0, 95.0));
    image.resize_to(Corner::BottomLeft, Point::new(5.0, 85.0), Point::new(15.0, 95.0));
    assert_eq!(image.bounds(), expected);
}
