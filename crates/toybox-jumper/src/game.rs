use toybox_engine::core::AppControl;
use toybox_engine::input::{InputSource, Key};
use toybox_engine::scene::{DrawList, ZIndex};

use crate::config::JumperConfig;
use crate::physics::{Actor, Ground, MoveInput};

impl MoveInput {
    /// Reads the arrow keys and space bar.
    pub fn sample(input: &impl InputSource) -> Self {
        Self {
            left: input.key_down(Key::ArrowLeft),
            right: input.key_down(Key::ArrowRight),
            jump: input.key_down(Key::Space),
        }
    }
}

/// World state for one run of the jumper.
#[derive(Debug, Clone)]
pub struct Game {
    config: JumperConfig,
    actor: Actor,
    ground: Ground,
}

impl Game {
    pub fn new(config: JumperConfig) -> Self {
        let actor = Actor::new(config.actor_start, config.actor_size);
        let ground = Ground::new(config.ground);
        Self { config, actor, ground }
    }

    pub fn config(&self) -> &JumperConfig {
        &self.config
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn ground(&self) -> &Ground {
        &self.ground
    }

    /// Samples input and advances the actor by `dt` seconds.
    pub fn update(&mut self, input: &impl InputSource, dt: f32) -> AppControl {
        if input.key_pressed(Key::Escape) {
            return AppControl::Exit;
        }

        let move_input = MoveInput::sample(input);
        let next = self.actor.step(move_input, dt, &self.ground, &self.config.physics);

        if next.grounded != self.actor.grounded {
            log::debug!(
                "actor {} at ({:.1}, {:.1})",
                if next.grounded { "landed" } else { "jumped" },
                next.pos.x,
                next.pos.y,
            );
        }

        self.actor = next;
        AppControl::Continue
    }

    /// Records ground then actor, so the actor paints on top.
    pub fn record(&self, draw_list: &mut DrawList) {
        draw_list.push_solid_rect(ZIndex::BACKGROUND, self.ground.rect, self.config.ground_color);
        draw_list.push_solid_rect(ZIndex::CONTENT, self.actor.rect(), self.config.actor_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toybox_engine::input::{InputEvent, InputFrame, InputSnapshot, InputState, KeyState};
    use toybox_engine::scene::DrawCmd;

    const DT: f32 = 1.0 / 60.0;

    #[derive(Default)]
    struct Keys {
        state: InputState,
        frame: InputFrame,
    }

    impl Keys {
        fn press(mut self, key: Key) -> Self {
            self.state.apply_event(
                &mut self.frame,
                InputEvent::Key { key, state: KeyState::Pressed, repeat: false },
            );
            self
        }

        fn snapshot(&self) -> InputSnapshot<'_> {
            InputSnapshot::new(&self.state, &self.frame)
        }
    }

    fn settled() -> Game {
        let mut game = Game::new(JumperConfig::default());
        game.update(&Keys::default().snapshot(), DT);
        game
    }

    #[test]
    fn spawn_settles_on_ground() {
        let game = settled();
        assert!(game.actor().grounded);
        assert_eq!(game.actor().bottom(), game.ground().top());
    }

    #[test]
    fn space_jumps_from_ground() {
        let mut game = settled();
        let keys = Keys::default().press(Key::Space);
        game.update(&keys.snapshot(), DT);
        assert!(!game.actor().grounded);
        assert!(game.actor().vel.y < 0.0);
    }

    #[test]
    fn arrows_move_actor() {
        let mut game = settled();
        let x0 = game.actor().pos.x;
        let keys = Keys::default().press(Key::ArrowRight);
        game.update(&keys.snapshot(), DT);
        assert!(game.actor().pos.x > x0);
    }

    #[test]
    fn escape_exits_without_stepping() {
        let mut game = settled();
        let before = *game.actor();
        let keys = Keys::default().press(Key::Escape);
        assert_eq!(game.update(&keys.snapshot(), DT), AppControl::Exit);
        assert_eq!(*game.actor(), before);
    }

    #[test]
    fn records_ground_below_actor() {
        let game = settled();
        let mut list = DrawList::new();
        game.record(&mut list);

        let rects: Vec<_> = list
            .items()
            .iter()
            .filter_map(|item| match &item.cmd {
                DrawCmd::Rect(r) => Some(r.rect),
                DrawCmd::Points(_) => None,
            })
            .collect();
        assert_eq!(rects, vec![game.ground().rect, game.actor().rect()]);
    }
}
