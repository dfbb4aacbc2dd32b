use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the demos.
///
/// The runtime calls `on_frame` once per paced frame: the app samples input
/// from `ctx`, updates its state, then renders through `ctx.render`.
pub trait App {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;

    /// Called once when the window is closing.
    fn on_exit(&mut self) {}
}
