//! Canvas editing engine for dropped images.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! placed images, translates pointer and drop events into move/resize
//! gestures, hit-tests anchors and image bodies, and repaints the scene every
//! animation frame. The host crate is responsible only for wiring DOM events,
//! decoding dropped files, and scheduling frames.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Insertion-ordered store of placed images |
//! | [`image`] | Placed image with position, size, and corner anchors |
//! | [`anchor`] | Corner resize handles |
//! | [`geometry`] | Point and size value types |
//! | [`input`] | Drag session types and the gesture state machine |
//! | [`hit`] | Hit-testing against anchors and image bodies |
//! | [`render`] | Drawing-surface abstraction and scene rendering |
//! | [`config`] | Editor configuration |
//! | [`error`] | Engine error type |
//! | [`consts`] | Shared numeric constants (anchor size, fill colour) |

pub mod anchor;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod image;
pub mod input;
pub mod render;
