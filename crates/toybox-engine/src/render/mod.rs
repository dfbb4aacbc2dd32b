//! wgpu rendering.
//!
//! Renderers read a `scene::DrawList` in logical pixels and convert to clip
//! space in their vertex shaders. Each renderer builds and owns its GPU
//! resources on first use.

mod ctx;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
