//! Coordinate types shared by renderers.
//!
//! World space is the curve's own plane (+X right, +Y up). An
//! `OrthoProjection` maps a fixed world rectangle onto the whole viewport,
//! independent of the window's pixel size.

mod projection;
mod viewport;

pub use projection::OrthoProjection;
pub use viewport::Viewport;
