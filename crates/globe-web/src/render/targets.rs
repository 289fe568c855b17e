use super::helpers;
use crate::constants::{DEPTH_FORMAT, MSAA_SAMPLES};

/// Offscreen attachments for the scene pass.
///
/// - `msaa_*` is the multisampled color target resolved into the swapchain.
/// - `depth_*` matches its sample count.
pub(crate) struct RenderTargets {
    #[allow(dead_code)]
    pub(crate) msaa_tex: wgpu::Texture,
    pub(crate) msaa_view: wgpu::TextureView,
    #[allow(dead_code)]
    pub(crate) depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
    format: wgpu::TextureFormat,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) -> Self {
        let (msaa_tex, msaa_view) = Self::color(device, format, width, height);
        let (depth_tex, depth_view) = Self::depth(device, width, height);
        Self {
            msaa_tex,
            msaa_view,
            depth_tex,
            depth_view,
            format,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        (self.msaa_tex, self.msaa_view) = Self::color(device, self.format, width, height);
        (self.depth_tex, self.depth_view) = Self::depth(device, width, height);
    }

    fn color(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) -> (wgpu::Texture, wgpu::TextureView) {
        helpers::create_color_texture_device(
            device,
            "msaa_color",
            width.max(1),
            height.max(1),
            format,
            MSAA_SAMPLES,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        )
    }

    fn depth(device: &wgpu::Device, width: u32, height: u32) -> (wgpu::Texture, wgpu::TextureView) {
        helpers::create_color_texture_device(
            device,
            "depth",
            width.max(1),
            height.max(1),
            DEPTH_FORMAT,
            MSAA_SAMPLES,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        )
    }
}
