//! Document model: the insertion-ordered store of placed images.
//!
//! Insertion order doubles as z-order. The renderer walks [`DocStore::iter`]
//! bottom-up; hit-testing walks [`DocStore::iter_topmost`] so that later
//! drops occlude earlier ones.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use crate::image::{ImageId, ImageObject};

/// In-memory store of placed images.
#[derive(Debug, Default)]
pub struct DocStore {
    images: Vec<ImageObject>,
}

impl DocStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { images: Vec::new() }
    }

    /// Append an image on top of everything already placed.
    pub fn insert(&mut self, image: ImageObject) -> ImageId {
        let id = image.id();
        self.images.push(image);
        id
    }

    /// Return a reference to an image by id.
    #[must_use]
    pub fn get(&self, id: &ImageId) -> Option<&ImageObject> {
        self.images.iter().find(|image| image.id() == *id)
    }

    /// Return a mutable reference to an image by id.
    pub fn get_mut(&mut self, id: &ImageId) -> Option<&mut ImageObject> {
        self.images.iter_mut().find(|image| image.id() == *id)
    }

    /// Images in draw order, bottom first.
    pub fn iter(&self) -> impl Iterator<Item = &ImageObject> {
        self.images.iter()
    }

    /// Images in hit-test order, topmost first.
    pub fn iter_topmost(&self) -> impl Iterator<Item = &ImageObject> {
        self.images.iter().rev()
    }

    /// Returns `true` if nothing has been dropped yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
