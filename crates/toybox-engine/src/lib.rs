//! Shared runtime for the toybox demos.
//!
//! [`window::Runtime`] opens one window and calls a [`core::App`] once per
//! paced frame. Apps read input through [`input::InputSource`], record
//! shapes into a [`scene::DrawList`] and draw it with
//! [`render::shapes::rect::RectRenderer`].

pub mod coords;
pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod time;
pub mod window;
