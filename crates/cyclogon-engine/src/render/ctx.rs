use crate::coords::Viewport;

/// Renderer-facing context: device/queue, surface format and viewport.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    /// MSAA sample count of the frame's color attachment.
    pub sample_count: u32,
    pub viewport: Viewport,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        sample_count: u32,
        viewport: Viewport,
    ) -> Self {
        Self {
            device,
            queue,
            surface_format,
            sample_count,
            viewport,
        }
    }
}

/// Where a renderer records its pass this frame.
///
/// With MSAA, `color_view` is the multisampled attachment and every pass
/// resolves it into the surface image.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
    pub resolve_target: Option<&'a wgpu::TextureView>,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(
        encoder: &'a mut wgpu::CommandEncoder,
        surface_view: &'a wgpu::TextureView,
        msaa_view: Option<&'a wgpu::TextureView>,
    ) -> Self {
        match msaa_view {
            Some(msaa) => Self {
                encoder,
                color_view: msaa,
                resolve_target: Some(surface_view),
            },
            None => Self {
                encoder,
                color_view: surface_view,
                resolve_target: None,
            },
        }
    }

    /// Color attachment for a pass over this target, stored and resolved.
    pub fn color_attachment(
        &self,
        load: wgpu::LoadOp<wgpu::Color>,
    ) -> wgpu::RenderPassColorAttachment<'a> {
        wgpu::RenderPassColorAttachment {
            view: self.color_view,
            resolve_target: self.resolve_target,
            ops: wgpu::Operations {
                load,
                store: wgpu::StoreOp::Store,
            },
            depth_slice: None,
        }
    }
}
