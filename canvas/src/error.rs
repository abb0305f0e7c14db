//! Engine error type.

use wasm_bindgen::JsValue;

/// Errors produced while configuring or driving the engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The editor configuration was not valid JSON of the expected shape.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// A configuration value parsed but is out of range.
    #[error("invalid config field {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// The canvas element did not hand out a 2D rendering context.
    #[error("2d rendering context unavailable")]
    ContextUnavailable,

    /// A browser API call threw.
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for EngineError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
