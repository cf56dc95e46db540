//! Rotating triangle demo.
//!
//! [`options`] resolves the command line into a [`options::Config`];
//! [`app`] draws the triangle on top of `triangle-engine`.

pub mod app;
pub mod options;

use anyhow::Result;
use winit::dpi::LogicalSize;

use triangle_engine::device::GpuInit;
use triangle_engine::window::{Runtime, RuntimeConfig};

use crate::app::TriangleApp;
use crate::options::Config;

/// Window title.
pub const TITLE: &str = "Triangle";

/// Window settings derived from the resolved options.
pub fn runtime_config(config: &Config) -> RuntimeConfig {
    RuntimeConfig {
        title: TITLE.to_string(),
        initial_size: LogicalSize::new(
            f64::from(config.window_width.get()),
            f64::from(config.window_height.get()),
        ),
    }
}

/// Opens the window and renders until it is closed.
pub fn run(config: Config) -> Result<()> {
    Runtime::run(runtime_config(&config), GpuInit::default(), TriangleApp::new(config))
}
