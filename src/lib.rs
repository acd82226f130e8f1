//! Interactive image annotation canvas: viewport and gesture engine.
//!
//! This crate is compiled to WebAssembly and runs in the browser on top of a
//! photograph being annotated with world points and lines. It maps pointer
//! input on a zoomable, pannable image view to image-pixel coordinates,
//! tells clicks from drags from pans, hit-tests points and line segments, and
//! drives the precision-drag mode used for sub-pixel placement. The host
//! JavaScript layer wires DOM events to the engine and forwards the resulting
//! [`engine::Action`]s to whoever owns the annotation data.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Annotation data model and per-frame scene snapshot |
//! | [`camera`] | Viewport transform and coordinate conversions |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`hit`] | Hit-testing against world points and lines |
//! | [`precision`] | Scaled-down pointer motion for precise placement |
//! | [`dnd`] | Decoding of world points dropped from outside the canvas |
//! | [`config`] | Tunable interaction thresholds |
//! | [`feed`] | Immutable per-frame snapshot consumed by the renderer |
//! | [`render`] | Overlay rendering to a 2D context |
//! | [`consts`] | Shared numeric constants (zoom limits, hit radii, etc.) |

pub mod camera;
pub mod config;
pub mod consts;
pub mod dnd;
pub mod doc;
pub mod engine;
pub mod feed;
pub mod hit;
pub mod input;
pub mod precision;
pub mod render;
