use super::helpers::{self, LayerState};
use glam::Vec3;
use wgpu::util::DeviceExt;

const QUAD: [[f32; 2]; 6] = [
    [-0.5, -0.5],
    [0.5, -0.5],
    [0.5, 0.5],
    [-0.5, -0.5],
    [0.5, 0.5],
    [-0.5, 0.5],
];

const CORNER_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];
const CENTER_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x3];

/// Billboarded point sprites, one instance per star.
pub(crate) struct StarResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) quad_buffer: wgpu::Buffer,
    pub(crate) instance_buffer: wgpu::Buffer,
    pub(crate) count: u32,
    pub(crate) texture_bg: wgpu::BindGroup,
    #[allow(dead_code)] // keeps the bound texture alive
    texture: wgpu::Texture,
}

pub(crate) fn create_star_resources(
    device: &wgpu::Device,
    format: wgpu::TextureFormat,
    scene_bgl: &wgpu::BindGroupLayout,
    texture_bgl: &wgpu::BindGroupLayout,
    texture: (wgpu::Texture, wgpu::TextureView),
    sampler: &wgpu::Sampler,
    stars: &[Vec3],
) -> StarResources {
    let quad_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("star_quad"),
        contents: bytemuck::cast_slice(&QUAD),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let centers: Vec<[f32; 3]> = stars.iter().map(|s| s.to_array()).collect();
    // Keep a non-empty buffer so the binding is valid with zero stars.
    let contents: &[u8] = if centers.is_empty() {
        &[0u8; 12]
    } else {
        bytemuck::cast_slice(&centers)
    };
    let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("star_instances"),
        contents,
        usage: wgpu::BufferUsages::VERTEX,
    });

    let shader = helpers::shader_module(device, "stars_shader", globe_core::STARS_WGSL);
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("stars_pl"),
        bind_group_layouts: &[scene_bgl, texture_bgl],
        push_constant_ranges: &[],
    });
    let pipeline = helpers::make_layer_pipeline(
        device,
        &pl,
        &shader,
        format,
        LayerState {
            label: "stars_pipeline",
            buffers: &[
                wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<[f32; 2]>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &CORNER_ATTRS,
                },
                wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<[f32; 3]>() as u64,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &CENTER_ATTRS,
                },
            ],
            blend: Some(wgpu::BlendState::ALPHA_BLENDING),
            cull_mode: None,
            depth_write: true,
        },
    );

    let (tex, view) = texture;
    let texture_bg = helpers::texture_bind_group(device, "star_tex_bg", texture_bgl, &view, sampler);
    StarResources {
        pipeline,
        quad_buffer,
        instance_buffer,
        count: stars.len() as u32,
        texture_bg,
        texture: tex,
    }
}

impl StarResources {
    pub(crate) fn replace_texture(
        &mut self,
        device: &wgpu::Device,
        texture_bgl: &wgpu::BindGroupLayout,
        texture: (wgpu::Texture, wgpu::TextureView),
        sampler: &wgpu::Sampler,
    ) {
        let (tex, view) = texture;
        self.texture_bg =
            helpers::texture_bind_group(device, "star_tex_bg", texture_bgl, &view, sampler);
        self.texture = tex;
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, scene_bg: &wgpu::BindGroup) {
        if self.count == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, scene_bg, &[]);
        rpass.set_bind_group(1, &self.texture_bg, &[]);
        rpass.set_vertex_buffer(0, self.quad_buffer.slice(..));
        rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));
        rpass.draw(0..QUAD.len() as u32, 0..self.count);
    }
}
