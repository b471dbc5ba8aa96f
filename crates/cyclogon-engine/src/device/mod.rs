//! GPU device + surface management.
//!
//! - `Gpu` creates the wgpu Instance/Adapter/Device/Queue and the window surface
//! - `GpuInit` carries the creation preferences
//! - `GpuFrame` is one acquired swapchain image plus its command encoder
//! - `MsaaTarget` is the multisampled attachment resolved into that image

mod error;
mod frame;
mod gpu;
mod init;
mod msaa;
mod surface;

pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
