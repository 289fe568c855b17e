use crate::constants::{CLEAR_COLOR, GLOBE_PLACEHOLDER_RGBA, STAR_PLACEHOLDER_RGBA};
use crate::texture::DecodedImage;
use globe_core::{Camera, Marker, ATMOSPHERE_COLOR, ATMOSPHERE_SCALE, GLOBE_ROTATION_Y, STAR_SIZE};
use glam::{Mat4, Vec3};
use web_sys as web;

mod globe;
mod helpers;
mod markers;
mod stars;
mod targets;

use globe::GlobeResources;
use markers::MarkerResources;
use stars::StarResources;
use targets::RenderTargets;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    globe_model: [[f32; 4]; 4],
    atmosphere_model: [[f32; 4]; 4],
    cam_right: [f32; 4], // w: star size
    cam_up: [f32; 4],
    atmosphere_color: [f32; 4],
}

impl SceneUniforms {
    fn from_camera(camera: &Camera) -> Self {
        let (right, up) = camera.billboard_axes();
        let [r, g, b] = ATMOSPHERE_COLOR;
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            view: camera.view_matrix().to_cols_array_2d(),
            globe_model: Mat4::from_rotation_y(GLOBE_ROTATION_Y).to_cols_array_2d(),
            atmosphere_model: Mat4::from_scale(Vec3::splat(ATMOSPHERE_SCALE)).to_cols_array_2d(),
            cam_right: [right.x, right.y, right.z, STAR_SIZE],
            cam_up: [up.x, up.y, up.z, 0.0],
            atmosphere_color: [r, g, b, 1.0],
        }
    }
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,

    scene_buffer: wgpu::Buffer,
    scene_bg: wgpu::BindGroup,
    texture_bgl: wgpu::BindGroupLayout,
    linear_sampler: wgpu::Sampler,

    globe: GlobeResources,
    markers: MarkerResources,
    stars: StarResources,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        stars: &[Vec3],
        marker_capacity: usize,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::new(&device, format, width, height);

        let scene_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let scene_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let scene_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &scene_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scene_buffer.as_entire_binding(),
            }],
        });

        let texture_bgl = helpers::texture_bind_group_layout(&device);
        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let globe_tex = helpers::upload_image(
            &device,
            &queue,
            "globe_placeholder",
            &DecodedImage::solid(GLOBE_PLACEHOLDER_RGBA),
        );
        let globe = globe::create_globe_resources(
            &device,
            format,
            &scene_bgl,
            &texture_bgl,
            globe_tex,
            &linear_sampler,
        );
        let markers = markers::create_marker_resources(&device, format, &scene_bgl, marker_capacity);
        let star_tex = helpers::upload_image(
            &device,
            &queue,
            "star_placeholder",
            &DecodedImage::solid(STAR_PLACEHOLDER_RGBA),
        );
        let stars = stars::create_star_resources(
            &device,
            format,
            &scene_bgl,
            &texture_bgl,
            star_tex,
            &linear_sampler,
            stars,
        );

        log::info!(
            "[gpu] ready: {}x{} {:?}, {:?}",
            width,
            height,
            format,
            adapter.get_info().backend
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            scene_buffer,
            scene_bg,
            texture_bgl,
            linear_sampler,
            globe,
            markers,
            stars,
            width,
            height,
            clear_color: CLEAR_COLOR,
        })
    }

    pub fn set_globe_texture(&mut self, img: &DecodedImage) {
        let tex = helpers::upload_image(&self.device, &self.queue, "globe_tex", img);
        self.globe
            .replace_texture(&self.device, &self.texture_bgl, tex, &self.linear_sampler);
    }

    pub fn set_star_texture(&mut self, img: &DecodedImage) {
        let tex = helpers::upload_image(&self.device, &self.queue, "star_tex", img);
        self.stars
            .replace_texture(&self.device, &self.texture_bgl, tex, &self.linear_sampler);
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
        }
    }

    /// Reapply the current configuration after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, camera: &Camera, markers: &[Marker]) -> Result<(), wgpu::SurfaceError> {
        let uniforms = SceneUniforms::from_camera(camera);
        self.queue
            .write_buffer(&self.scene_buffer, 0, bytemuck::bytes_of(&uniforms));
        self.markers
            .upload(&self.device, &self.queue, markers, camera.eye);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.msaa_view,
                    resolve_target: Some(&view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            // Opaque layers first, then the translucent markers.
            self.stars.draw(&mut rpass, &self.scene_bg);
            self.globe.draw(&mut rpass, &self.scene_bg);
            self.markers.draw(&mut rpass, &self.scene_bg);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
