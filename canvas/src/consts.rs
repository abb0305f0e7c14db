//! Shared numeric constants for the canvas crate.

// ── Anchors ─────────────────────────────────────────────────────

/// Edge length of a corner anchor, in canvas pixels.
pub const ANCHOR_SIZE_PX: f64 = 6.0;

/// Default fill colour for corner anchors.
pub const ANCHOR_FILL: &str = "black";

// ── Placement ───────────────────────────────────────────────────

/// Where a freshly dropped image lands.
pub const DROP_ORIGIN_X: f64 = 0.0;

/// Where a freshly dropped image lands.
pub const DROP_ORIGIN_Y: f64 = 0.0;
