//! winit → engine input translation.

use winit::event::{ElementState, MouseButton as WinitButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::input::{
    InputEvent, Key, KeyState, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent,
};

/// Converts one window event. `scale_factor` turns physical cursor positions
/// into logical ones; `last_pointer` positions button events, which winit
/// delivers without coordinates. An unknown pointer stays `None`.
pub(crate) fn translate_window_event(
    event: &WindowEvent,
    scale_factor: f64,
    last_pointer: Option<(f32, f32)>,
) -> Option<InputEvent> {
    let ev = match event {
        WindowEvent::Focused(focused) => InputEvent::Focused(*focused),
        WindowEvent::CursorLeft { .. } => InputEvent::PointerLeft,
        WindowEvent::CursorMoved { position, .. } => {
            let logical = position.to_logical::<f32>(scale_factor);
            InputEvent::PointerMoved(PointerMoveEvent { x: logical.x, y: logical.y })
        }
        WindowEvent::MouseInput { state, button, .. } => {
            InputEvent::PointerButton(PointerButtonEvent {
                button: map_button(*button),
                state: match state {
                    ElementState::Pressed => MouseButtonState::Pressed,
                    ElementState::Released => MouseButtonState::Released,
                },
                pos: last_pointer,
            })
        }
        WindowEvent::KeyboardInput { event, .. } => InputEvent::Key {
            key: map_key(event.physical_key),
            state: match event.state {
                ElementState::Pressed => KeyState::Pressed,
                ElementState::Released => KeyState::Released,
            },
            repeat: event.repeat,
        },
        _ => return None,
    };
    Some(ev)
}

fn map_button(button: WinitButton) -> MouseButton {
    match button {
        WinitButton::Left => MouseButton::Left,
        WinitButton::Right => MouseButton::Right,
        WinitButton::Middle => MouseButton::Middle,
        WinitButton::Back => MouseButton::Back,
        WinitButton::Forward => MouseButton::Forward,
        WinitButton::Other(id) => MouseButton::Other(id),
    }
}

const LETTERS: [(KeyCode, Key); 26] = [
    (KeyCode::KeyA, Key::A), (KeyCode::KeyB, Key::B), (KeyCode::KeyC, Key::C),
    (KeyCode::KeyD, Key::D), (KeyCode::KeyE, Key::E), (KeyCode::KeyF, Key::F),
    (KeyCode::KeyG, Key::G), (KeyCode::KeyH, Key::H), (KeyCode::KeyI, Key::I),
    (KeyCode::KeyJ, Key::J), (KeyCode::KeyK, Key::K), (KeyCode::KeyL, Key::L),
    (KeyCode::KeyM, Key::M), (KeyCode::KeyN, Key::N), (KeyCode::KeyO, Key::O),
    (KeyCode::KeyP, Key::P), (KeyCode::KeyQ, Key::Q), (KeyCode::KeyR, Key::R),
    (KeyCode::KeyS, Key::S), (KeyCode::KeyT, Key::T), (KeyCode::KeyU, Key::U),
    (KeyCode::KeyV, Key::V), (KeyCode::KeyW, Key::W), (KeyCode::KeyX, Key::X),
    (KeyCode::KeyY, Key::Y), (KeyCode::KeyZ, Key::Z),
];

/// Top-row and numpad digits map to the same key.
const DIGITS: [(KeyCode, KeyCode, Key); 10] = [
    (KeyCode::Digit0, KeyCode::Numpad0, Key::Digit0),
    (KeyCode::Digit1, KeyCode::Numpad1, Key::Digit1),
    (KeyCode::Digit2, KeyCode::Numpad2, Key::Digit2),
    (KeyCode::Digit3, KeyCode::Numpad3, Key::Digit3),
    (KeyCode::Digit4, KeyCode::Numpad4, Key::Digit4),
    (KeyCode::Digit5, KeyCode::Numpad5, Key::Digit5),
    (KeyCode::Digit6, KeyCode::Numpad6, Key::Digit6),
    (KeyCode::Digit7, KeyCode::Numpad7, Key::Digit7),
    (KeyCode::Digit8, KeyCode::Numpad8, Key::Digit8),
    (KeyCode::Digit9, KeyCode::Numpad9, Key::Digit9),
];

/// Layout-independent: keys are matched by physical position.
fn map_key(physical: PhysicalKey) -> Key {
    let PhysicalKey::Code(code) = physical else {
        return Key::Unknown(0);
    };

    match code {
        KeyCode::Escape => return Key::Escape,
        KeyCode::Enter | KeyCode::NumpadEnter => return Key::Enter,
        KeyCode::Space => return Key::Space,
        KeyCode::ArrowUp => return Key::ArrowUp,
        KeyCode::ArrowDown => return Key::ArrowDown,
        KeyCode::ArrowLeft => return Key::ArrowLeft,
        KeyCode::ArrowRight => return Key::ArrowRight,
        _ => {}
    }

    LETTERS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|&(_, key)| key)
        .or_else(|| {
            DIGITS
                .iter()
                .find(|(top, pad, _)| *top == code || *pad == code)
                .map(|&(_, _, key)| key)
        })
        .unwrap_or(Key::Unknown(code as u32))
}
