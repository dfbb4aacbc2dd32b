use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{
    InputEvent,
    Key,
    KeyState,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};

/// Held keys and buttons plus the last pointer position of one window.
///
/// Every event goes through [`InputState::apply_event`], which updates the
/// held sets and appends the event to the frame log.
#[derive(Debug, Default)]
pub struct InputState {
    pub focused: bool,

    /// Logical pixels; `None` while the pointer is outside the window.
    pub pointer_pos: Option<(f32, f32)>,

    pub keys_down: HashSet<Key>,
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::Focused(focused) => {
                self.focused = *focused;
                // Releases are not delivered to unfocused windows.
                if !*focused {
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }
            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
            }
            InputEvent::PointerLeft => self.pointer_pos = None,
            InputEvent::Key { key, state: KeyState::Pressed, .. } => {
                self.keys_down.insert(*key);
            }
            InputEvent::Key { key, state: KeyState::Released, .. } => {
                self.keys_down.remove(key);
            }
            // Button events never move the pointer; their position is a copy
            // of `pointer_pos` at translation time.
            InputEvent::PointerButton(PointerButtonEvent { button, state, .. }) => {
                if *state == MouseButtonState::Pressed {
                    self.buttons_down.insert(*button);
                } else {
                    self.buttons_down.remove(button);
                }
            }
        }

        frame.events.push(ev);
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }
}
