use winit::dpi::PhysicalSize;

/// Multisampled color attachment matching the surface size.
///
/// Passes draw into it and resolve into the acquired surface image.
pub(crate) struct MsaaTarget {
    view: wgpu::TextureView,
}

impl MsaaTarget {
    pub(crate) fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        size: PhysicalSize<u32>,
        sample_count: u32,
    ) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("cyclogon msaa color"),
            size: wgpu::Extent3d {
                width: size.width,
                height: size.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { view }
    }

    #[inline]
    pub(crate) fn view(&self) -> &wgpu::TextureView {
        &self.view
    }
}

/// Picks the sample count actually used for `requested`.
///
/// Falls back to 1 (no multisampling) when the surface format cannot be
/// multisampled at that count or cannot be resolved.
pub(crate) fn choose_sample_count(requested: u32, flags: wgpu::TextureFormatFeatureFlags) -> u32 {
    if requested <= 1 {
        return 1;
    }
    let resolvable = flags.contains(wgpu::TextureFormatFeatureFlags::MULTISAMPLE_RESOLVE);
    if resolvable && flags.sample_count_supported(requested) {
        requested
    } else {
        1
    }
}
