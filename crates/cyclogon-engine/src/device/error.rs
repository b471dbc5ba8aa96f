/// What the render loop should do after a surface acquisition error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; the next frame can be drawn normally.
    Reconfigured,
    /// Transient failure; drop this frame only.
    SkipFrame,
    /// Unrecoverable (out of memory); leave the render loop.
    Fatal,
}
