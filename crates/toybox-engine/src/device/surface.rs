use wgpu::{CompositeAlphaMode, SurfaceError, TextureFormat};

/// What the frame loop should do after failing to acquire a surface texture.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// The surface was reconfigured; the next frame can render.
    Reconfigured,
    SkipFrame,
    /// Out of memory; the app should exit.
    Fatal,
}

/// First format whose sRGB-ness matches `srgb`, else the first supported one.
pub(super) fn choose_format(formats: &[TextureFormat], srgb: bool) -> Option<TextureFormat> {
    formats
        .iter()
        .copied()
        .find(|f| f.is_srgb() == srgb)
        .or_else(|| formats.first().copied())
}

/// Opaque when supported; the apps never draw translucent windows.
pub(super) fn choose_alpha_mode(modes: &[CompositeAlphaMode]) -> CompositeAlphaMode {
    if modes.contains(&CompositeAlphaMode::Opaque) {
        CompositeAlphaMode::Opaque
    } else {
        modes.first().copied().unwrap_or(CompositeAlphaMode::Auto)
    }
}

pub(super) fn classify_error(err: &SurfaceError) -> SurfaceErrorAction {
    match err {
        SurfaceError::Lost | SurfaceError::Outdated => SurfaceErrorAction::Reconfigured,
        SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        SurfaceError::Timeout | SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}
