//! Pointer mapping from viewport coordinates to canvas-local coordinates.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use canvas::geometry::Point;
use web_sys::{HtmlCanvasElement, MouseEvent};

/// Client position minus the canvas's on-screen origin.
#[must_use]
pub fn canvas_point(client_x: i32, client_y: i32, origin_left: f64, origin_top: f64) -> Point {
    Point::new(f64::from(client_x) - origin_left, f64::from(client_y) - origin_top)
}

/// Canvas-local position of a mouse event.
#[must_use]
pub fn mouse_point(ev: &MouseEvent, canvas: &HtmlCanvasElement) -> Point {
    let rect = canvas.get_bounding_client_rect();
    canvas_point(ev.client_x(), ev.client_y(), rect.left(), rect.top())
}
