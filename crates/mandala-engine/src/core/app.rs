use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the layer above the runtime.
pub trait App {
    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;

    /// Called when the window's logical size changes.
    ///
    /// Surface reconfiguration is handled by the runtime; this hook exists so
    /// the app can track drawing-surface dimensions.
    fn on_resize(&mut self, width: f32, height: f32) {
        let _ = (width, height);
    }
}
