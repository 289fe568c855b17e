use super::helpers::{self, LayerState};
use globe_core::mesh::{uv_sphere, MeshVertex};
use globe_core::{GLOBE_RADIUS, GLOBE_SEGMENTS};
use wgpu::util::DeviceExt;

pub(crate) const MESH_ATTRS: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

pub(crate) fn mesh_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<MeshVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &MESH_ATTRS,
    }
}

/// The textured sphere and its atmosphere shell. Both draw the same mesh,
/// the shell through its own model matrix.
pub(crate) struct GlobeResources {
    pub(crate) globe_pipeline: wgpu::RenderPipeline,
    pub(crate) atmosphere_pipeline: wgpu::RenderPipeline,
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
    pub(crate) texture_bg: wgpu::BindGroup,
    #[allow(dead_code)] // keeps the bound texture alive
    texture: wgpu::Texture,
}

pub(crate) fn create_globe_resources(
    device: &wgpu::Device,
    format: wgpu::TextureFormat,
    scene_bgl: &wgpu::BindGroupLayout,
    texture_bgl: &wgpu::BindGroupLayout,
    texture: (wgpu::Texture, wgpu::TextureView),
    sampler: &wgpu::Sampler,
) -> GlobeResources {
    let mesh = uv_sphere(GLOBE_RADIUS, GLOBE_SEGMENTS, GLOBE_SEGMENTS);
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("globe_vb"),
        contents: bytemuck::cast_slice(&mesh.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("globe_ib"),
        contents: bytemuck::cast_slice(&mesh.indices),
        usage: wgpu::BufferUsages::INDEX,
    });

    let globe_shader = helpers::shader_module(device, "globe_shader", globe_core::GLOBE_WGSL);
    let globe_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("globe_pl"),
        bind_group_layouts: &[scene_bgl, texture_bgl],
        push_constant_ranges: &[],
    });
    let globe_pipeline = helpers::make_layer_pipeline(
        device,
        &globe_pl,
        &globe_shader,
        format,
        LayerState {
            label: "globe_pipeline",
            buffers: &[mesh_layout()],
            blend: Some(wgpu::BlendState::REPLACE),
            cull_mode: Some(wgpu::Face::Back),
            depth_write: true,
        },
    );

    let atmosphere_shader =
        helpers::shader_module(device, "atmosphere_shader", globe_core::ATMOSPHERE_WGSL);
    let atmosphere_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("atmosphere_pl"),
        bind_group_layouts: &[scene_bgl],
        push_constant_ranges: &[],
    });
    let additive = wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::SrcAlpha,
            dst_factor: wgpu::BlendFactor::One,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::Zero,
            dst_factor: wgpu::BlendFactor::One,
            operation: wgpu::BlendOperation::Add,
        },
    };
    // Inside faces only, so the glow hugs the silhouette.
    let atmosphere_pipeline = helpers::make_layer_pipeline(
        device,
        &atmosphere_pl,
        &atmosphere_shader,
        format,
        LayerState {
            label: "atmosphere_pipeline",
            buffers: &[mesh_layout()],
            blend: Some(additive),
            cull_mode: Some(wgpu::Face::Front),
            depth_write: false,
        },
    );

    let (tex, view) = texture;
    let texture_bg = helpers::texture_bind_group(device, "globe_tex_bg", texture_bgl, &view, sampler);
    GlobeResources {
        globe_pipeline,
        atmosphere_pipeline,
        vertex_buffer,
        index_buffer,
        index_count: mesh.indices.len() as u32,
        texture_bg,
        texture: tex,
    }
}

impl GlobeResources {
    pub(crate) fn replace_texture(
        &mut self,
        device: &wgpu::Device,
        texture_bgl: &wgpu::BindGroupLayout,
        texture: (wgpu::Texture, wgpu::TextureView),
        sampler: &wgpu::Sampler,
    ) {
        let (tex, view) = texture;
        self.texture_bg =
            helpers::texture_bind_group(device, "globe_tex_bg", texture_bgl, &view, sampler);
        self.texture = tex;
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, scene_bg: &wgpu::BindGroup) {
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);

        rpass.set_pipeline(&self.globe_pipeline);
        rpass.set_bind_group(0, scene_bg, &[]);
        rpass.set_bind_group(1, &self.texture_bg, &[]);
        rpass.draw_indexed(0..self.index_count, 0, 0..1);

        rpass.set_pipeline(&self.atmosphere_pipeline);
        rpass.set_bind_group(0, scene_bg, &[]);
        rpass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}
