//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipelines, buffers) and record into a
//! `RenderTarget` handed out once per frame.
//!
//! Convention:
//! - vertex data is in world space
//! - the vertex shader applies an orthographic transform from a uniform

mod ctx;
mod line_strip;
mod shader;

pub use ctx::{RenderCtx, RenderTarget};
pub use line_strip::{LineStripRenderer, StripVertices};
pub use shader::{validated, ShaderModules, ShaderSources};
