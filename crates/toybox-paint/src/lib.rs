//! Drawing canvas.
//!
//! Hold the left mouse button to paint with the selected brush. Points are
//! stored individually and drawn as small squares; the canvas can be cleared
//! or exported to `drawing.png`.

pub mod app;
pub mod brush;
pub mod canvas;
pub mod config;
pub mod export;
pub mod palette;
pub mod session;

pub use app::PaintApp;
pub use config::PaintConfig;
