use anyhow::Result;
use winit::event::WindowEvent;

use super::ctx::FrameCtx;
use crate::render::RenderCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application driven by [`Runtime`](crate::window::Runtime).
///
/// Call order: `on_ready` once, `on_frame` every iteration, `on_shutdown`
/// once. GPU resources created in `on_ready` must be released by
/// `on_shutdown` at the latest; the GPU context is dropped right after it.
pub trait App {
    /// Window and GPU context exist. Create and upload GPU resources here.
    ///
    /// An error aborts startup.
    fn on_ready(&mut self, ctx: &RenderCtx<'_>) -> Result<()>;

    /// Called for window events the runtime does not consume itself.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;

    /// Release GPU resources.
    fn on_shutdown(&mut self) {}
}
