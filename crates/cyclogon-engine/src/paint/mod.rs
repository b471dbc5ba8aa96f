//! Paint model shared between the viewer and renderers.

pub mod color;

pub use color::Color;
