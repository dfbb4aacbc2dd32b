use super::types::InputEvent;

/// Events received since the last frame, in arrival order. Cleared by the
/// runtime after every frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    pub events: Vec<InputEvent>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
