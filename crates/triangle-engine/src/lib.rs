//! Triangle engine crate.
//!
//! Platform and GPU runtime for the rotating triangle demo: a `winit`
//! window, a `wgpu` device bound to it, a frame clock and the triangle pass.

pub mod core;
pub mod device;
pub mod logging;
pub mod math;
pub mod render;
pub mod time;
pub mod window;
