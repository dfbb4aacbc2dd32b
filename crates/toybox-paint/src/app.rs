use winit::dpi::LogicalSize;

use toybox_engine::core::{App, AppControl, FrameCtx};
use toybox_engine::render::shapes::rect::RectRenderer;
use toybox_engine::window::RuntimeConfig;

use crate::config::PaintConfig;
use crate::export::export_png;
use crate::session::Session;

/// Engine adapter: feeds input to the session, performs saves, draws the
/// canvas.
pub struct PaintApp {
    config: PaintConfig,
    session: Session,
    rect_renderer: RectRenderer,
}

impl PaintApp {
    pub fn new(config: PaintConfig) -> Self {
        Self {
            session: Session::new(config.brush),
            config,
            rect_renderer: RectRenderer::new(),
        }
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.config.title.clone(),
            initial_size: LogicalSize::new(
                self.config.canvas_width as f64,
                self.config.canvas_height as f64,
            ),
            resizable: false,
            target_fps: Some(self.config.target_fps),
        }
    }

    fn save(&self) {
        let path = &self.config.export_path;
        let canvas = self.session.canvas();
        match export_png(canvas.points(), &self.config.export_config(), path) {
            Ok(()) => {
                log::info!("saved {} points to {}", canvas.len(), path.display());
                println!("Saved drawing to {}", path.display());
            }
            Err(e) => {
                log::warn!("export failed: {e}");
                eprintln!("Could not save drawing: {e}");
            }
        }
    }
}

impl App for PaintApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let input = ctx.input_snapshot();
        let outcome = self.session.update(&input);

        if outcome.save_requested {
            self.save();
        }
        if outcome.exit_requested {
            return AppControl::Exit;
        }

        let points = self.session.canvas().points();
        let size = self.config.point_size as f32;
        let rects = &mut self.rect_renderer;
        ctx.render(self.config.background, |rctx, target| {
            rects.render_points(rctx, target, size, points);
        })
    }

    fn on_exit(&mut self) {
        let points = self.session.canvas().len();
        log::info!("paint shutting down with {points} points on the canvas");
    }
}
