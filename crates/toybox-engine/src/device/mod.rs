//! wgpu device and window surface.
//!
//! [`Gpu`] owns the device, queue and configured surface of one window and
//! hands out [`GpuFrame`]s. Surface policy (format, alpha, error recovery)
//! lives in `surface`.

mod gpu;
mod surface;

pub use gpu::{Gpu, GpuFrame, GpuInit};
pub use surface::SurfaceErrorAction;
