//! Editor settings read from the canvas element.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use canvas::config::EditorConfig;
use canvas::error::EngineError;

/// Attribute on the `<canvas>` holding the JSON editor config.
pub const CONFIG_ATTRIBUTE: &str = "data-editor-config";

/// Parse the config attribute; a missing or blank attribute means defaults.
///
/// # Errors
///
/// Propagates [`EditorConfig::from_json`] failures.
pub fn config_from_attribute(raw: Option<&str>) -> Result<EditorConfig, EngineError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(EditorConfig::default()),
        Some(json) => EditorConfig::from_json(json),
    }
}
