//! Placed images.
//!
//! An [`ImageObject`] is a decoded image dropped onto the canvas. It has a
//! mutable position and size and owns one [`Anchor`] per corner. The anchors
//! are created with the image, never replaced, and resynchronised after every
//! mutation so hit-testing and rendering never see stale handles.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

use uuid::Uuid;

use crate::anchor::{Anchor, Corner};
use crate::config::ResizePolicy;
use crate::geometry::{Bounds, Point, Size};

/// Unique identifier for a placed image.
pub type ImageId = Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct ImageObject {
    id: ImageId,
    pos: Point,
    size: Size,
    anchors: [Anchor; 4],
}

impl ImageObject {
    /// Place an image of `size` at `pos`.
    #[must_use]
    pub fn new(id: ImageId, pos: Point, size: Size, anchor_size: Size) -> Self {
        let anchors = Corner::ALL.map(|corner| Anchor::new(corner, anchor_size, pos, size));
        Self { id, pos, size, anchors }
    }

    #[must_use]
    pub fn id(&self) -> ImageId {
        self.id
    }

    /// Top-left corner on the canvas.
    #[must_use]
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Displayed size; the decoded image is stretched to fit it.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.pos, self.size)
    }

    #[must_use]
    pub fn anchors(&self) -> &[Anchor; 4] {
        &self.anchors
    }

    #[must_use]
    pub fn anchor(&self, corner: Corner) -> &Anchor {
        &self.anchors[corner.index()]
    }

    /// Move the top-left corner to `pos`. Off-canvas positions are allowed.
    pub fn move_to(&mut self, pos: Point) {
        self.pos = pos;
        self.sync_anchors();
    }

    /// Resize by dragging the anchor at `corner` along the segment `from` → `to`.
    ///
    /// Sizes are not clamped; see [`resize_bounds`].
    pub fn resize_to(&mut self, corner: Corner, from: Point, to: Point) {
        self.set_bounds(resize_bounds(self.bounds(), corner, from, to));
    }

    /// Replace position and size together.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.pos = bounds.pos;
        self.size = bounds.size;
        self.sync_anchors();
    }

    fn sync_anchors(&mut self) {
        let (pos, size) = (self.pos, self.size);
        for anchor in &mut self.anchors {
            anchor.update_position(pos, size);
        }
    }
}

/// Apply one drag segment of the anchor at `corner` to `bounds`.
///
/// The dimensions bearing the dragged corner follow the pointer delta.
/// Dragging a left or top corner also moves the box so the opposite corner
/// stays where it was. Either dimension may come out negative.
#[must_use]
pub fn resize_bounds(bounds: Bounds, corner: Corner, from: Point, to: Point) -> Bounds {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let Bounds { pos, size } = bounds;

    let (width, x) = if corner.drags_left_edge() {
        (size.width - dx, to.x)
    } else {
        (size.width + dx, pos.x)
    };
    let (height, y) = if corner.drags_top_edge() {
        (size.height - dy, to.y)
    } else {
        (size.height + dy, pos.y)
    };

    Bounds::new(Point::new(x, y), Size::new(width, height))
}

/// The box actually shown for signed `bounds` under `policy`.
///
/// With [`ResizePolicy::ClampToZero`] a negative dimension collapses to zero
/// against the edge that was not dragged. The caller keeps the signed bounds
/// so that dragging back out restores the size under the pointer.
#[must_use]
pub fn apply_policy(bounds: Bounds, corner: Corner, policy: ResizePolicy) -> Bounds {
    if policy == ResizePolicy::AllowInversion {
        return bounds;
    }
    let Bounds { mut pos, mut size } = bounds;
    if size.width < 0.0 {
        if corner.drags_left_edge() {
            pos.x += size.width;
        }
        size.width = 0.0;
    }
    if size.height < 0.0 {
        if corner.drags_top_edge() {
            pos.y += size.height;
        }
        size.height = 0.0;
    }
    Bounds::new(pos, size)
}
