/// Creation preferences for the GPU layer.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when the surface offers one.
    pub prefer_srgb: bool,

    /// Adapter selection hint. A single line strip needs no discrete GPU.
    pub power_preference: wgpu::PowerPreference,

    /// Swap behavior. FIFO is always supported and paces the loop to vsync.
    pub present_mode: wgpu::PresentMode,

    /// Surface alpha mode; falls back to the first supported mode if unset
    /// or unsupported.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Features requested from the device.
    pub required_features: wgpu::Features,

    /// Limits requested from the device.
    pub required_limits: wgpu::Limits,

    /// Hint for how many frames may be queued ahead of presentation.
    pub desired_maximum_frame_latency: u32,

    /// Requested MSAA sample count; 1 disables multisampling. Lowered to 1
    /// when the surface format does not support it.
    pub sample_count: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            power_preference: wgpu::PowerPreference::LowPower,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: Some(wgpu::CompositeAlphaMode::Opaque),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
            sample_count: 4,
        }
    }
}
