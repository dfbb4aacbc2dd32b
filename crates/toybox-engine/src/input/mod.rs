//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! `platform::winit` translates window system events into `InputEvent`s; app
//! code reads input through the [`InputSource`] capability so it can be driven
//! by hand-built state in tests.

mod frame;
mod source;
mod state;
mod types;

pub(crate) mod platform;

pub use frame::InputFrame;
pub use source::{InputSnapshot, InputSource};
pub use state::InputState;
pub use types::{
    InputEvent,
    Key,
    KeyState,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};
