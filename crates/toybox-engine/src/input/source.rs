use super::frame::InputFrame;
use super::state::InputState;
use super::types::{InputEvent, Key, MouseButton};

/// Read-only view of one frame's input.
///
/// App update logic is written against this trait instead of the runtime so it
/// can run without a window.
pub trait InputSource {
    /// Events received since the previous frame, in arrival order.
    fn events(&self) -> &[InputEvent];

    fn key_down(&self, key: Key) -> bool;

    fn button_down(&self, button: MouseButton) -> bool;

    /// Pointer position in logical pixels, `None` while outside the window.
    fn cursor_position(&self) -> Option<(f32, f32)>;

    /// True if `key` was freshly pressed this frame. Repeats don't count.
    fn key_pressed(&self, key: Key) -> bool {
        self.events().iter().any(|ev| ev.key_pressed() == Some(key))
    }
}

/// `InputSource` backed by a window's `InputState` + `InputFrame`.
#[derive(Debug, Copy, Clone)]
pub struct InputSnapshot<'a> {
    pub state: &'a InputState,
    pub frame: &'a InputFrame,
}

impl<'a> InputSnapshot<'a> {
    pub fn new(state: &'a InputState, frame: &'a InputFrame) -> Self {
        Self { state, frame }
    }
}

impl InputSource for InputSnapshot<'_> {
    fn events(&self) -> &[InputEvent] {
        &self.frame.events
    }

    fn key_down(&self, key: Key) -> bool {
        self.state.key_down(key)
    }

    fn button_down(&self, button: MouseButton) -> bool {
        self.state.button_down(button)
    }

    fn cursor_position(&self) -> Option<(f32, f32)> {
        self.state.pointer_pos
    }
}
