#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::ops::{Add, Sub};

/// A point in canvas-local coordinates (CSS pixels from the canvas origin).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

/// Width and height of an object.
///
/// Not clamped: resizing past the opposite corner can make either dimension
/// negative unless the editor runs with [`crate::config::ResizePolicy::ClampToZero`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Half of each dimension, as an offset.
    #[must_use]
    pub fn half(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// The point diagonally opposite `pos` in a box of `size`.
#[must_use]
pub fn far_corner(pos: Point, size: Size) -> Point {
    Point::new(pos.x + size.width, pos.y + size.height)
}

/// A box by its top-left corner and signed size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub pos: Point,
    pub size: Size,
}

impl Bounds {
    #[must_use]
    pub fn new(pos: Point, size: Size) -> Self {
        Self { pos, size }
    }
}
