//! Editor configuration, parsed from an optional JSON blob supplied by the host.
//!
//! Every field has a default, so an empty object (or no config at all) yields
//! the stock editor: 6px black anchors and unclamped resizing.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{ANCHOR_FILL, ANCHOR_SIZE_PX};
use crate::error::EngineError;
use crate::geometry::Size;

/// What happens when a resize drags an edge past the opposite one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizePolicy {
    /// Width/height may go negative; the image is drawn inverted.
    #[default]
    AllowInversion,
    /// Width/height stop at zero and the opposite edge stays fixed.
    ClampToZero,
}

/// Console verbosity for the host logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    #[default]
    Debug,
    Trace,
}

impl LogLevel {
    #[must_use]
    pub fn to_level(self) -> log::Level {
        match self {
            Self::Error => log::Level::Error,
            Self::Warn => log::Level::Warn,
            Self::Info => log::Level::Info,
            Self::Debug => log::Level::Debug,
            Self::Trace => log::Level::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Edge length of the square corner anchors, in canvas pixels.
    pub anchor_size: f64,
    /// CSS colour used to fill anchors.
    pub anchor_fill: String,
    pub resize_policy: ResizePolicy,
    pub log_level: LogLevel,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            anchor_size: ANCHOR_SIZE_PX,
            anchor_fill: ANCHOR_FILL.to_string(),
            resize_policy: ResizePolicy::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl EditorConfig {
    /// Parse and validate a JSON config. Absent fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigParse`] for malformed JSON or unknown
    /// fields, and [`EngineError::InvalidConfig`] for out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, EngineError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| EngineError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.anchor_size.is_finite() || self.anchor_size <= 0.0 {
            return Err(EngineError::InvalidConfig {
                field: "anchor_size",
                reason: format!("must be a positive number, got {}", self.anchor_size),
            });
        }
        if self.anchor_fill.trim().is_empty() {
            return Err(EngineError::InvalidConfig { field: "anchor_fill", reason: "must not be empty".into() });
        }
        Ok(())
    }

    /// Anchor handle size as a square.
    #[must_use]
    pub fn anchor_size(&self) -> Size {
        Size::new(self.anchor_size, self.anchor_size)
    }
}
