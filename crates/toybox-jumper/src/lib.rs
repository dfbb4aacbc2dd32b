//! Jumping square.
//!
//! A red square that runs left/right and jumps on a brown floor under
//! gravity. The simulation (`physics`, `game`) is independent of the window;
//! `app` plugs it into the engine runtime.

pub mod app;
pub mod config;
pub mod game;
pub mod physics;

pub use app::JumperApp;
pub use config::JumperConfig;
