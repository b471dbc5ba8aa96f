//! Cyclogon engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the viewer:
//! window and render loop, wgpu device/surface, projection and the
//! line-strip renderer that draws sampled curves.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
