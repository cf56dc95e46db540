/// Renderer-facing context: device/queue, surface format and framebuffer size.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    /// Framebuffer size in physical pixels.
    pub framebuffer: (u32, u32),
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        framebuffer: (u32, u32),
    ) -> Self {
        Self {
            device,
            queue,
            surface_format,
            framebuffer,
        }
    }

    /// Framebuffer width over height.
    pub fn aspect_ratio(&self) -> f32 {
        crate::math::aspect_ratio(self.framebuffer.0, self.framebuffer.1)
    }
}

/// Target for drawing (encoder + color view).
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(encoder: &'a mut wgpu::CommandEncoder, color_view: &'a wgpu::TextureView) -> Self {
        Self { encoder, color_view }
    }
}
