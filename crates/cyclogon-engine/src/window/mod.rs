//! Window + render loop.
//!
//! Owns the `winit` EventLoop and the single window, and drives the
//! application through the [`LoopPhase`] lifecycle.

mod phase;
mod runtime;

pub use phase::LoopPhase;
pub use runtime::{Runtime, RuntimeConfig};
