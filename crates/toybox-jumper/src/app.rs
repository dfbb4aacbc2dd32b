use winit::dpi::LogicalSize;

use toybox_engine::core::{App, AppControl, FrameCtx};
use toybox_engine::render::shapes::rect::RectRenderer;
use toybox_engine::scene::DrawList;
use toybox_engine::window::RuntimeConfig;

use crate::config::JumperConfig;
use crate::game::Game;

/// Engine adapter: samples input, steps the game, draws the frame.
pub struct JumperApp {
    game: Game,
    draw_list: DrawList,
    rect_renderer: RectRenderer,
}

impl JumperApp {
    pub fn new(config: JumperConfig) -> Self {
        Self {
            game: Game::new(config),
            draw_list: DrawList::new(),
            rect_renderer: RectRenderer::new(),
        }
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        let cfg = self.game.config();
        RuntimeConfig {
            title: cfg.title.clone(),
            initial_size: LogicalSize::new(cfg.world_width as f64, cfg.world_height as f64),
            resizable: false,
            target_fps: Some(cfg.target_fps),
        }
    }
}

impl App for JumperApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let input = ctx.input_snapshot();
        if self.game.update(&input, ctx.time.dt) == AppControl::Exit {
            return AppControl::Exit;
        }

        self.draw_list.clear();
        self.game.record(&mut self.draw_list);

        let dl = &self.draw_list;
        let rects = &mut self.rect_renderer;
        ctx.render(self.game.config().sky_color, |rctx, target| {
            rects.render(rctx, target, dl);
        })
    }

    fn on_exit(&mut self) {
        log::info!("jumper shutting down");
    }
}
