/// A single acquired swapchain image.
///
/// Short-lived: hand it back through `Gpu::submit` in the same frame. Holding
/// the surface texture blocks acquisition of the next one.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
