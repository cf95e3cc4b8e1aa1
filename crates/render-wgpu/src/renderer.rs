use crate::context::GpuContext;
use crate::error::RenderError;
use crate::geometry::{GpuGeometry, pop_error_scope, vertex_layouts};
use crate::shaders;
use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use litcube_render::{Frame, Lighting, RenderView, Renderer, UniformBlock};
use litcube_scene::SceneState;
use wgpu::util::DeviceExt;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Host copy of `SceneUniforms` in the shader.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct GpuUniforms {
    view_proj: [[f32; 4]; 4],
    model_matrix: [[f32; 4]; 4],
    ambient: [f32; 4],
    light_color: [f32; 4],
    light_direction: [f32; 4],
    half_vector: [f32; 4],
}

impl GpuUniforms {
    fn new(view_proj: Mat4, block: &UniformBlock) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            model_matrix: block.model_matrix.to_cols_array_2d(),
            ambient: block.ambient.to_array(),
            light_color: block.light_color.extend(0.0).to_array(),
            light_direction: block.light_direction.extend(0.0).to_array(),
            half_vector: block.half_vector.extend(0.0).to_array(),
        }
    }
}

/// What happened to a requested frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Presented,
    /// The surface was not ready; nothing was drawn.
    Skipped,
}

/// wgpu-based scene renderer. Owns the window's GPU context.
pub struct WgpuRenderer {
    context: GpuContext,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    geometry: GpuGeometry,
    depth_texture: wgpu::TextureView,
    lighting: Lighting,
    view: RenderView,
}

impl WgpuRenderer {
    /// Build the pipeline and upload the geometry. Fails if any GPU object is
    /// rejected.
    pub fn new(
        context: GpuContext,
        lighting: Lighting,
        view: RenderView,
    ) -> Result<Self, RenderError> {
        let device = &context.device;

        let geometry = GpuGeometry::initialize(device)?;

        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("uniform_buffer"),
            contents: bytemuck::bytes_of(&GpuUniforms::new(
                view.view_projection(context.aspect()),
                &UniformBlock::default(),
            )),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("uniform_bind_group_layout"),
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

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("uniform_bind_group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pipeline_layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::SCENE_SHADER.into()),
        });

        let buffers = vertex_layouts();
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("scene_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &buffers,
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: context.surface_format(),
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            // The platform's two triangles face opposite ways, so nothing is culled.
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: Default::default(),
                bias: Default::default(),
            }),
            multisample: Default::default(),
            multiview: None,
            cache: None,
        });

        pop_error_scope(device, "scene pipeline")?;

        let depth_texture =
            Self::create_depth_texture(device, context.config.width, context.config.height);

        Ok(Self {
            context,
            pipeline,
            uniform_buffer,
            uniform_bind_group,
            geometry,
            depth_texture,
            lighting,
            view,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
        self.depth_texture = Self::create_depth_texture(
            &self.context.device,
            self.context.config.width,
            self.context.config.height,
        );
    }

    fn create_depth_texture(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth_texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&Default::default())
    }
}

impl Renderer for WgpuRenderer {
    type Output = FrameOutcome;
    type Error = RenderError;

    /// Clear, upload uniforms, draw the indexed geometry, submit and present.
    fn render_frame(&mut self, scene: &SceneState) -> Result<FrameOutcome, RenderError> {
        let output = match self.context.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::debug!("surface lost or outdated, reconfiguring");
                self.context.reconfigure();
                return Ok(FrameOutcome::Skipped);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => {
                tracing::warn!("surface error: {e}");
                return Ok(FrameOutcome::Skipped);
            }
        };

        let frame = Frame::build(scene, &self.lighting);
        let device = &self.context.device;
        let queue = &self.context.queue;

        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&GpuUniforms::new(
                self.view.view_projection(self.context.aspect()),
                &frame.uniforms,
            )),
        );

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("render_encoder"),
        });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("main_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            pass.set_pipeline(&self.pipeline);
            pass.set_bind_group(0, &self.uniform_bind_group, &[]);
            self.geometry.bind(&mut pass);
            let count = frame.index_count.min(self.geometry.index_count());
            pass.draw_indexed(0..count, 0, 0..1);
        }

        queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(FrameOutcome::Presented)
    }
}
