use super::globe::mesh_layout;
use super::helpers::{self, LayerState};
use globe_core::mesh::unit_box;
use globe_core::{Marker, MARKER_COLOR};
use glam::Vec3;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct MarkerInstance {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
}

const INSTANCE_ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
    3 => Float32x4,
    4 => Float32x4,
    5 => Float32x4,
    6 => Float32x4,
    7 => Float32x4
];

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Instances sorted far to near from `eye` for correct alpha blending.
pub(crate) fn pack_instances(markers: &[Marker], eye: Vec3, out: &mut Vec<MarkerInstance>) {
    let [r, g, b] = MARKER_COLOR.map(srgb_to_linear);
    let mut order: Vec<(f32, usize)> = markers
        .iter()
        .enumerate()
        .map(|(i, m)| (m.center().distance_squared(eye), i))
        .collect();
    order.sort_by(|a, b| b.0.total_cmp(&a.0));
    out.clear();
    out.extend(order.into_iter().map(|(_, i)| {
        let m = &markers[i];
        MarkerInstance {
            model: m.model_matrix().to_cols_array_2d(),
            color: [r, g, b, m.opacity],
        }
    }));
}

pub(crate) struct MarkerResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
    pub(crate) instance_buffer: wgpu::Buffer,
    pub(crate) capacity: usize,
    pub(crate) instance_count: u32,
    scratch: Vec<MarkerInstance>,
}

pub(crate) fn create_marker_resources(
    device: &wgpu::Device,
    format: wgpu::TextureFormat,
    scene_bgl: &wgpu::BindGroupLayout,
    capacity: usize,
) -> MarkerResources {
    let mesh = unit_box();
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("marker_vb"),
        contents: bytemuck::cast_slice(&mesh.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("marker_ib"),
        contents: bytemuck::cast_slice(&mesh.indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    let capacity = capacity.max(1);
    let instance_buffer = create_instance_buffer(device, capacity);

    let shader = helpers::shader_module(device, "markers_shader", globe_core::MARKERS_WGSL);
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("markers_pl"),
        bind_group_layouts: &[scene_bgl],
        push_constant_ranges: &[],
    });
    let instance_layout = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<MarkerInstance>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &INSTANCE_ATTRS,
    };
    let pipeline = helpers::make_layer_pipeline(
        device,
        &pl,
        &shader,
        format,
        LayerState {
            label: "markers_pipeline",
            buffers: &[mesh_layout(), instance_layout],
            blend: Some(wgpu::BlendState::ALPHA_BLENDING),
            cull_mode: Some(wgpu::Face::Back),
            depth_write: false,
        },
    );

    MarkerResources {
        pipeline,
        vertex_buffer,
        index_buffer,
        index_count: mesh.indices.len() as u32,
        instance_buffer,
        capacity,
        instance_count: 0,
        scratch: Vec::with_capacity(capacity),
    }
}

fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("marker_instances"),
        size: (capacity * std::mem::size_of::<MarkerInstance>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

impl MarkerResources {
    pub(crate) fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        markers: &[Marker],
        eye: Vec3,
    ) {
        if markers.len() > self.capacity {
            self.capacity = markers.len().next_power_of_two();
            self.instance_buffer = create_instance_buffer(device, self.capacity);
        }
        pack_instances(markers, eye, &mut self.scratch);
        if !self.scratch.is_empty() {
            queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&self.scratch));
        }
        self.instance_count = self.scratch.len() as u32;
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, scene_bg: &wgpu::BindGroup) {
        if self.instance_count == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, scene_bg, &[]);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));
        rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.index_count, 0, 0..self.instance_count);
    }
}
