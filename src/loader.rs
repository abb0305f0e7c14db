//! Dropped-file decoding.
//!
//! Decoding is asynchronous: the drop handler returns immediately and the
//! bitmap is handed to the engine from a separate task once the browser has
//! finished. Frames rendered in between simply do not show the new image yet.

use std::cell::RefCell;
use std::rc::Rc;

use canvas::engine::Engine;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{File, ImageBitmap};

use crate::error::{HostError, describe_js};

/// Read `file` and decode it into a bitmap.
///
/// # Errors
///
/// Returns [`HostError::Decode`] if the file is not a decodable image.
pub async fn decode_file(file: &File) -> Result<ImageBitmap, HostError> {
    let window = web_sys::window().ok_or(HostError::NoWindow)?;
    let promise = window.create_image_bitmap_with_blob(file)?;
    let decoded = JsFuture::from(promise)
        .await
        .map_err(|e| HostError::Decode(describe_js(&e)))?;
    decoded
        .dyn_into::<ImageBitmap>()
        .map_err(|_| HostError::Decode("result is not an ImageBitmap".into()))
}

/// Decode `file` in the background and place it on the canvas when done.
///
/// A failed decode is logged and otherwise ignored; no image is added.
pub fn load_dropped_file(engine: Rc<RefCell<Engine>>, file: File) {
    spawn_local(async move {
        let name = file.name();
        match decode_file(&file).await {
            Ok(bitmap) => {
                let action = engine.borrow_mut().add_image(bitmap);
                log::debug!("{name}: {action:?}");
            }
            Err(err) => log::error!("could not load {name}: {err}"),
        }
    });
}
