//! Corner resize handles.
//!
//! An [`Anchor`] is a small square bound to one corner of its owning
//! [`crate::image::ImageObject`]. Its position is derived: whenever the owner
//! moves or resizes, the owner calls [`Anchor::update_position`] so the
//! handle's centre sits exactly on the corner point.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

use crate::geometry::{Point, Size};

/// Which corner of the owning image an anchor is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// All four corners, in the order anchors are stored on an image.
    pub const ALL: [Corner; 4] = [Self::TopLeft, Self::TopRight, Self::BottomLeft, Self::BottomRight];

    /// Whether dragging this corner moves the image's left edge.
    #[must_use]
    pub fn drags_left_edge(self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomLeft)
    }

    /// Whether dragging this corner moves the image's top edge.
    #[must_use]
    pub fn drags_top_edge(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }

    /// The corner point of a box at `pos` with `size`.
    #[must_use]
    pub fn point_of(self, pos: Point, size: Size) -> Point {
        match self {
            Self::TopLeft => pos,
            Self::TopRight => Point::new(pos.x + size.width, pos.y),
            Self::BottomLeft => Point::new(pos.x, pos.y + size.height),
            Self::BottomRight => Point::new(pos.x + size.width, pos.y + size.height),
        }
    }

    /// Index into an image's anchor array.
    #[must_use]
    pub(crate) fn index(self) -> usize {
        match self {
            Self::TopLeft => 0,
            Self::TopRight => 1,
            Self::BottomLeft => 2,
            Self::BottomRight => 3,
        }
    }
}

/// A draggable handle centred on one corner of an image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    corner: Corner,
    size: Size,
    pos: Point,
}

impl Anchor {
    /// Create an anchor for `corner`, already positioned against its owner.
    #[must_use]
    pub fn new(corner: Corner, size: Size, owner_pos: Point, owner_size: Size) -> Self {
        let mut anchor = Self { corner, size, pos: Point::default() };
        anchor.update_position(owner_pos, owner_size);
        anchor
    }

    /// Recompute this anchor's top-left from the owner's current geometry.
    pub fn update_position(&mut self, owner_pos: Point, owner_size: Size) {
        self.pos = self.corner.point_of(owner_pos, owner_size) - self.size.half();
    }

    #[must_use]
    pub fn corner(&self) -> Corner {
        self.corner
    }

    /// Top-left of the handle square.
    #[must_use]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }
}
