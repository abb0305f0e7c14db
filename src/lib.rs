//! # dropboard
//!
//! Browser host for the image canvas editor. Drag an image file onto the
//! page's `<canvas>`, then move it by its body or resize it by its corner
//! anchors.
//!
//! This crate wires DOM events, file decoding and the animation loop into the
//! `canvas` engine crate, which owns all editing logic.

pub mod error;
pub mod host;
pub mod loader;
pub mod pointer;
pub mod settings;

use wasm_bindgen::prelude::*;

use crate::error::HostError;

/// Wasm entry point: mount the editor on the first `<canvas>` in the page.
///
/// # Errors
///
/// Returns the failure as a JS string if the page cannot host the editor.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    run().map_err(JsValue::from)
}

fn run() -> Result<(), HostError> {
    let window = web_sys::window().ok_or(HostError::NoWindow)?;
    let document = window.document().ok_or(HostError::NoDocument)?;
    let canvas = host::find_canvas(&document)?;

    let raw = canvas.get_attribute(settings::CONFIG_ATTRIBUTE);
    let parsed = settings::config_from_attribute(raw.as_deref());
    let config = parsed.as_ref().cloned().unwrap_or_default();

    console_log::init_with_level(config.log_level.to_level()).map_err(|e| HostError::Logger(e.to_string()))?;
    if let Err(err) = parsed {
        log::error!("ignoring {}: {err}", settings::CONFIG_ATTRIBUTE);
    }

    host::mount(&window, canvas, config)?;
    log::info!("canvas editor ready");
    Ok(())
}
