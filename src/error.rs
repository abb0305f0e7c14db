//! Host error type.

use canvas::error::EngineError;
use wasm_bindgen::JsValue;

/// Errors produced while mounting the editor or loading dropped files.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// Not running in a browser window.
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    /// The page has no `<canvas>` to mount on.
    #[error("no <canvas> element found")]
    CanvasNotFound,

    /// The browser could not decode the dropped file as an image.
    #[error("image decode failed: {0}")]
    Decode(String),

    #[error("logger init failed: {0}")]
    Logger(String),

    #[error(transparent)]
    Engine(#[from] EngineError),

    /// A browser API call threw.
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for HostError {
    fn from(value: JsValue) -> Self {
        Self::Js(describe_js(&value))
    }
}

impl From<HostError> for JsValue {
    fn from(err: HostError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Best-effort text for a thrown JS value.
#[must_use]
pub fn describe_js(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
