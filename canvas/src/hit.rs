#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::anchor::Corner;
use crate::doc::DocStore;
use crate::geometry::{Point, Size};
use crate::image::ImageId;

/// What a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// One of an image's corner anchors; dragging it resizes the image.
    Anchor { image: ImageId, corner: Corner },
    /// An image body; dragging it moves the image.
    Image(ImageId),
}

impl HitTarget {
    /// The image this target belongs to.
    #[must_use]
    pub fn image_id(self) -> ImageId {
        match self {
            Self::Anchor { image, .. } => image,
            Self::Image(id) => id,
        }
    }
}

/// Strict-interior containment: points on the box edge do not count.
#[must_use]
pub fn contains(pt: Point, pos: Point, size: Size) -> bool {
    pt.x > pos.x && pt.x < pos.x + size.width && pt.y > pos.y && pt.y < pos.y + size.height
}

/// Find the target under `pt`.
///
/// Every anchor of every image is tested before any image body, so a handle
/// wins over a body even when the body belongs to a higher image. Within each
/// pass the topmost (latest inserted) image is tested first.
#[must_use]
pub fn hit_test(pt: Point, doc: &DocStore) -> Option<HitTarget> {
    let anchor_hit = doc.iter_topmost().find_map(|image| {
        image
            .anchors()
            .iter()
            .find(|anchor| contains(pt, anchor.pos(), anchor.size()))
            .map(|anchor| HitTarget::Anchor { image: image.id(), corner: anchor.corner() })
    });
    if anchor_hit.is_some() {
        return anchor_hit;
    }

    doc.iter_topmost()
        .find(|image| contains(pt, image.pos(), image.size()))
        .map(|image| HitTarget::Image(image.id()))
}

/// Top-left of the target's own box: the anchor square or the image.
#[must_use]
pub fn target_origin(target: HitTarget, doc: &DocStore) -> Option<Point> {
    let image = doc.get(&target.image_id())?;
    Some(match target {
        HitTarget::Anchor { corner, .. } => image.anchor(corner).pos(),
        HitTarget::Image(_) => image.pos(),
    })
}
