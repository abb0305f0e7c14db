//! Rendering: repaints the whole scene from current document state.
//!
//! [`draw`] is a pure read of the model. It talks to a [`Surface`] rather than
//! to the browser directly; [`CanvasSurface`] is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`].
//!
//! A failing image draw does not stop the frame: its anchors and every later
//! image are still drawn, and the failures are handed back to the caller
//! ([`crate::engine::Engine::render`]) to report.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::collections::HashMap;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, ImageBitmap};

use crate::config::EditorConfig;
use crate::doc::DocStore;
use crate::geometry::{Point, Size};
use crate::image::{ImageId, ImageObject};

/// The 2D drawing operations the renderer needs.
pub trait Surface {
    type Error;

    fn clear_rect(&mut self, pos: Point, size: Size);

    /// Draw the decoded image `id` stretched to the given box.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the draw call fails.
    fn draw_image(&mut self, id: ImageId, pos: Point, size: Size) -> Result<(), Self::Error>;

    fn set_fill_style(&mut self, color: &str);

    fn fill_rect(&mut self, pos: Point, size: Size);
}

/// Draw one frame: clear the viewport, then each image and its anchors, bottom first.
///
/// Returns the images whose draw call failed, in draw order.
pub fn draw<S: Surface>(surface: &mut S, doc: &DocStore, config: &EditorConfig, viewport: Size) -> Vec<(ImageId, S::Error)> {
    surface.clear_rect(Point::default(), viewport);

    let mut failed = Vec::new();
    for image in doc.iter() {
        if let Err(err) = surface.draw_image(image.id(), image.pos(), image.size()) {
            failed.push((image.id(), err));
        }
        draw_anchors(surface, image, &config.anchor_fill);
    }
    failed
}

fn draw_anchors<S: Surface>(surface: &mut S, image: &ImageObject, fill: &str) {
    surface.set_fill_style(fill);
    for anchor in image.anchors() {
        surface.fill_rect(anchor.pos(), anchor.size());
    }
}

/// [`Surface`] backed by a browser 2D context and the decoded bitmaps.
pub struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
    bitmaps: &'a HashMap<ImageId, ImageBitmap>,
}

impl<'a> CanvasSurface<'a> {
    #[must_use]
    pub fn new(ctx: &'a CanvasRenderingContext2d, bitmaps: &'a HashMap<ImageId, ImageBitmap>) -> Self {
        Self { ctx, bitmaps }
    }
}

impl Surface for CanvasSurface<'_> {
    type Error = JsValue;

    fn clear_rect(&mut self, pos: Point, size: Size) {
        self.ctx.clear_rect(pos.x, pos.y, size.width, size.height);
    }

    fn draw_image(&mut self, id: ImageId, pos: Point, size: Size) -> Result<(), JsValue> {
        let Some(bitmap) = self.bitmaps.get(&id) else {
            return Ok(());
        };
        self.ctx
            .draw_image_with_image_bitmap_and_dw_and_dh(bitmap, pos.x, pos.y, size.width, size.height)
    }

    fn set_fill_style(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn fill_rect(&mut self, pos: Point, size: Size) {
        self.ctx.fill_rect(pos.x, pos.y, size.width, size.height);
    }
}
