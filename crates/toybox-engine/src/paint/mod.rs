//! Color model shared between the apps, the renderer and image export.

pub mod color;

pub use color::Color;
