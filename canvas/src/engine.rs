use std::collections::{HashMap, HashSet};

use uuid::Uuid;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageBitmap};

use crate::config::EditorConfig;
use crate::consts::{DROP_ORIGIN_X, DROP_ORIGIN_Y};
use crate::doc::DocStore;
use crate::error::EngineError;
use crate::geometry::{Point, Size};
use crate::hit::{self, HitTarget};
use crate::image::{self as image_ops, ImageId, ImageObject};
use crate::input::{DragSegment, DragSession, DropEffect, InputState};
use crate::render::{self, CanvasSurface};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A pointer-down grabbed a target.
    DragStarted(HitTarget),
    /// The held target was released.
    DragEnded,
    ImageMoved { id: ImageId, pos: Point },
    ImageResized { id: ImageId, pos: Point, size: Size },
    /// The host should read and decode the dropped file at `index`.
    LoadFile { index: usize },
    ImageAdded { id: ImageId, size: Size },
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Default)]
pub struct EngineCore {
    pub doc: DocStore,
    pub input: InputState,
    pub config: EditorConfig,
}

impl EngineCore {
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        Self { doc: DocStore::new(), input: InputState::Idle, config }
    }

    // --- Data inputs ---

    /// Place a freshly decoded image of `intrinsic` size on top of the stack.
    pub fn add_image(&mut self, intrinsic: Size) -> Action {
        let origin = Point::new(DROP_ORIGIN_X, DROP_ORIGIN_Y);
        let image = ImageObject::new(Uuid::new_v4(), origin, intrinsic, self.config.anchor_size());
        let id = self.doc.insert(image);
        log::info!("image {id} added at {}x{}", intrinsic.width, intrinsic.height);
        Action::ImageAdded { id, size: intrinsic }
    }

    // --- Drag and drop ---

    /// A file drag is hovering over the canvas.
    #[must_use]
    pub fn on_drag_over(&self) -> DropEffect {
        DropEffect::Copy
    }

    /// Files were dropped. Only the first one is loaded.
    pub fn on_drop(&mut self, file_count: usize) -> Vec<Action> {
        if file_count == 0 {
            log::warn!("drop carried no files, ignoring");
            return Vec::new();
        }
        if file_count > 1 {
            log::debug!("drop carried {file_count} files, loading the first");
        }
        vec![Action::LoadFile { index: 0 }]
    }

    // --- Pointer input ---

    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        self.input = InputState::Idle;

        let Some(target) = hit::hit_test(pt, &self.doc) else {
            log::debug!("pointer down at ({}, {}) hit nothing", pt.x, pt.y);
            return Vec::new();
        };
        let (Some(origin), Some(image)) = (hit::target_origin(target, &self.doc), self.doc.get(&target.image_id())) else {
            return Vec::new();
        };
        let unclamped = image.bounds();

        let click_offset = pt - origin;
        log::debug!("pointer down at ({}, {}) grabbed {target:?}, offset ({}, {})", pt.x, pt.y, click_offset.x, click_offset.y);
        self.input = InputState::Dragging(DragSession { click: pt, drag: DragSegment::at(pt), target, click_offset, unclamped });
        vec![Action::DragStarted(target)]
    }

    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        let InputState::Dragging(session) = &mut self.input else {
            return Vec::new();
        };
        session.drag = session.drag.advance(pt);

        let Some(image) = self.doc.get_mut(&session.target.image_id()) else {
            return Vec::new();
        };

        match session.target {
            HitTarget::Image(id) => {
                image.move_to(session.drag.to - session.click_offset);
                log::trace!("image {id} moved to ({}, {})", image.pos().x, image.pos().y);
                vec![Action::ImageMoved { id, pos: image.pos() }]
            }
            HitTarget::Anchor { image: id, corner } => {
                // The policy only shapes what is shown; the session keeps the
                // signed extent so the edge follows the pointer back out.
                session.unclamped = image_ops::resize_bounds(session.unclamped, corner, session.drag.from, session.drag.to);
                image.set_bounds(image_ops::apply_policy(session.unclamped, corner, self.config.resize_policy));
                log::trace!("image {id} resized to {}x{}", image.size().width, image.size().height);
                vec![Action::ImageResized { id, pos: image.pos(), size: image.size() }]
            }
        }
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.release("pointer up")
    }

    /// The pointer left the canvas; any held target is dropped where it is.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.release("pointer left canvas")
    }

    fn release(&mut self, reason: &str) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle => Vec::new(),
            InputState::Dragging(session) => {
                log::debug!("{reason}: released {:?}", session.target);
                vec![Action::DragEnded]
            }
        }
    }

    // --- Queries ---

    /// The currently held target, if any.
    #[must_use]
    pub fn target(&self) -> Option<HitTarget> {
        self.input.target()
    }

    /// Look up an image by ID.
    #[must_use]
    pub fn image(&self, id: &ImageId) -> Option<&ImageObject> {
        self.doc.get(id)
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas,
/// its 2D context, and the decoded bitmaps keyed by image id.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    bitmaps: HashMap<ImageId, ImageBitmap>,
    /// Images whose draw call has failed; each is reported once.
    broken: HashSet<ImageId>,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ContextUnavailable`] if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement, config: EditorConfig) -> Result<Self, EngineError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(EngineError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| EngineError::ContextUnavailable)?;
        Ok(Self { canvas, ctx, bitmaps: HashMap::new(), broken: HashSet::new(), core: EngineCore::new(config) })
    }

    // --- Delegated data inputs ---

    /// Register a decoded bitmap and place it on top of the stack.
    pub fn add_image(&mut self, bitmap: ImageBitmap) -> Action {
        let intrinsic = Size::new(f64::from(bitmap.width()), f64::from(bitmap.height()));
        let action = self.core.add_image(intrinsic);
        if let Action::ImageAdded { id, .. } = action {
            self.bitmaps.insert(id, bitmap);
        }
        action
    }

    // --- Input events ---

    #[must_use]
    pub fn on_drag_over(&self) -> DropEffect {
        self.core.on_drag_over()
    }

    pub fn on_drop(&mut self, file_count: usize) -> Vec<Action> {
        self.core.on_drop(file_count)
    }

    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        self.core.on_pointer_down(pt)
    }

    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(pt)
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.core.on_pointer_up()
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    // --- Render ---

    /// Draw the current state to the canvas. An image whose draw call throws
    /// is skipped for that frame and logged the first time it fails.
    pub fn render(&mut self) {
        let viewport = Size::new(f64::from(self.canvas.width()), f64::from(self.canvas.height()));
        let mut surface = CanvasSurface::new(&self.ctx, &self.bitmaps);
        for (id, err) in render::draw(&mut surface, &self.core.doc, &self.core.config, viewport) {
            if self.broken.insert(id) {
                log::error!("drawing image {id} failed: {}", EngineError::from(err));
            }
        }
    }
}
