use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use triangle_engine::core::{App, AppControl, FrameCtx};
use triangle_engine::math::triangle_mvp;
use triangle_engine::render::triangle::TriangleRenderer;

use crate::options::Config;

/// Frames between frame-time trace lines.
const STATS_INTERVAL: u64 = 600;

/// Spins the triangle once per `2π` seconds until Escape or window close.
pub struct TriangleApp {
    config: Config,
    renderer: TriangleRenderer,
}

impl TriangleApp {
    pub fn new(config: Config) -> Self {
        log::debug!(
            "grid {}x{} with {} layers (not rendered)",
            config.cells_in_x,
            config.cells_in_y,
            config.layers
        );
        Self {
            config,
            renderer: TriangleRenderer::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Escape closes the window on press, not on release.
pub fn is_close_key(key: PhysicalKey, state: ElementState) -> bool {
    state == ElementState::Pressed && key == PhysicalKey::Code(KeyCode::Escape)
}

impl App for TriangleApp {
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::KeyboardInput { event, .. } if is_close_key(event.physical_key, event.state) => {
                log::debug!("escape pressed");
                AppControl::Exit
            }
            _ => AppControl::Continue,
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let time = ctx.time;
        if time.frame_index > 0 && time.frame_index % STATS_INTERVAL == 0 {
            log::trace!("frame {}: {:.2} ms", time.frame_index, time.dt * 1000.0);
        }

        let angle = time.elapsed;
        let renderer = &mut self.renderer;

        ctx.render(wgpu::Color::BLACK, |rctx, target| {
            renderer.render(rctx, target, triangle_mvp(rctx.aspect_ratio(), angle));
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_press_closes() {
        assert!(is_close_key(PhysicalKey::Code(KeyCode::Escape), ElementState::Pressed));
    }

    #[test]
    fn escape_release_and_other_keys_do_not_close() {
        assert!(!is_close_key(PhysicalKey::Code(KeyCode::Escape), ElementState::Released));
        assert!(!is_close_key(PhysicalKey::Code(KeyCode::KeyQ), ElementState::Pressed));
    }

    #[test]
    fn app_keeps_resolved_config() {
        let app = TriangleApp::new(Config::DEFAULT);
        assert_eq!(app.config().layers.get(), 4);
    }
}
