//! GPU rendering.
//!
//! Renderers own their GPU resources (pipelines, buffers) and record into
//! a `RenderTarget` supplied by the frame loop.

mod ctx;
pub mod triangle;

pub use ctx::{RenderCtx, RenderTarget};
