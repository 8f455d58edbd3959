use std::sync::Arc;

use anyhow::{bail, Context, Result};
use log::{debug, info, warn};
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::core::{GpuContext, WindowSurface};
use crate::frame::{FpsCounter, FrameInfo};
use crate::panel::{PanelStats, ParameterPanel};
use crate::scene::Scene;
use crate::traits::SceneRenderer;
use crate::types::{SceneUniform, Vertex};

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// wgpu renderer for the wave scene, with an optional egui parameter overlay
pub struct WaveRenderer {
    window: Arc<Window>,
    gpu: GpuContext,
    surface: WindowSurface,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    depth_texture: wgpu::Texture,
    depth_view: wgpu::TextureView,
    overlay: Option<Overlay>,
    released: bool,
}

/// egui state for the debug panel
struct Overlay {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
    panel: ParameterPanel,
    fps: FpsCounter,
}

impl WaveRenderer {
    /// Create GPU resources for `scene` on `window`. Pass a panel to show
    /// the parameter overlay.
    pub async fn new(window: Arc<Window>, scene: &Scene, panel: Option<ParameterPanel>) -> Result<Self> {
        let (gpu, surface) = GpuContext::for_window(window.clone()).await?;
        let device = gpu.device();
        let (width, height) = surface.size();

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Scene Uniform Buffer"),
            contents: bytemuck::bytes_of(&scene.uniform()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Wave Vertex Buffer"),
            contents: bytemuck::cast_slice(&scene.mesh.vertices()),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Wave Index Buffer"),
            contents: bytemuck::cast_slice(scene.mesh.indices()),
            usage: wgpu::BufferUsages::INDEX,
        });
        let index_count = u32::try_from(scene.mesh.indices().len()).context("Mesh has too many indices")?;

        let (pipeline, uniform_bind_group) =
            Self::create_render_pipeline(device, &uniform_buffer, surface.format());
        let (depth_texture, depth_view) = Self::create_depth_texture(device, width, height);

        let overlay = panel.map(|panel| Overlay::new(&window, device, surface.format(), panel));

        info!(
            "Wave renderer initialized: {}x{} {:?}, {} indices",
            width,
            height,
            surface.format(),
            index_count
        );

        Ok(Self {
            window,
            gpu,
            surface,
            pipeline,
            uniform_buffer,
            uniform_bind_group,
            vertex_buffer,
            index_buffer,
            index_count,
            depth_texture,
            depth_view,
            overlay,
            released: false,
        })
    }

    fn create_render_pipeline(
        device: &wgpu::Device,
        uniform_buffer: &wgpu::Buffer,
        surface_format: wgpu::TextureFormat,
    ) -> (wgpu::RenderPipeline, wgpu::BindGroup) {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Wave Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("wave.wgsl").into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bind_group_layout"),
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

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bind_group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Wave Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Wave Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // double-sided material
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        (pipeline, bind_group)
    }

    fn create_depth_texture(device: &wgpu::Device, width: u32, height: u32) -> (wgpu::Texture, wgpu::TextureView) {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
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

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        (texture, view)
    }

    /// Forward a window event to the overlay. Returns true if egui consumed it.
    pub fn handle_event(&mut self, event: &winit::event::WindowEvent) -> bool {
        match self.overlay.as_mut() {
            Some(overlay) => overlay.state.on_window_event(&self.window, event).consumed,
            None => false,
        }
    }
}

impl SceneRenderer for WaveRenderer {
    fn resize(&mut self, width: u32, height: u32) {
        if self.released || !self.surface.resize(self.gpu.device(), width, height) {
            return;
        }
        self.depth_texture.destroy();
        let (texture, view) = Self::create_depth_texture(self.gpu.device(), width, height);
        self.depth_texture = texture;
        self.depth_view = view;
    }

    fn render(&mut self, scene: &mut Scene, frame: &FrameInfo) -> Result<()> {
        if self.released {
            bail!("Wave renderer used after release");
        }

        let queue = self.gpu.queue();
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of::<SceneUniform>(&scene.uniform()));
        if scene.mesh.take_dirty() {
            queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&scene.mesh.vertices()));
        }

        let output = match self.surface.acquire() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                warn!("Surface lost or outdated; reconfiguring and skipping frame {}", frame.number);
                self.surface.reconfigure(self.gpu.device());
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                debug!("Surface timeout; skipping frame {}", frame.number);
                return Ok(());
            }
            Err(e) => return Err(e).context("Failed to acquire surface texture"),
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Wave Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Wave Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });
            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_bind_group(0, &self.uniform_bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            render_pass.draw_indexed(0..self.index_count, 0, 0..1);
        }

        let mut command_buffers = Vec::new();
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.fps.update(frame.delta);
            let stats = PanelStats {
                fps: overlay.fps.fps(),
                frame_time_ms: overlay.fps.frame_time_ms(),
                time: frame.time,
                vertices: scene.mesh.vertex_count(),
                resolution: self.surface.size(),
            };
            command_buffers = overlay.draw(&self.window, &self.gpu, &mut encoder, &view, self.surface.size(), &stats);
        }

        command_buffers.push(encoder.finish());
        self.gpu.queue().submit(command_buffers);
        output.present();

        Ok(())
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.vertex_buffer.destroy();
        self.index_buffer.destroy();
        self.uniform_buffer.destroy();
        self.depth_texture.destroy();
        self.overlay = None;
        self.released = true;
        debug!("Wave renderer resources released");
    }
}

impl Overlay {
    fn new(window: &Window, device: &wgpu::Device, format: wgpu::TextureFormat, panel: ParameterPanel) -> Self {
        let ctx = egui::Context::default();
        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let renderer = egui_wgpu::Renderer::new(device, format, egui_wgpu::RendererOptions::default());

        Self {
            ctx,
            state,
            renderer,
            panel,
            fps: FpsCounter::new(),
        }
    }

    /// Record the egui pass on top of the scene. Returns any extra command
    /// buffers egui needs submitted before `encoder`.
    fn draw(
        &mut self,
        window: &Window,
        gpu: &GpuContext,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        size: (u32, u32),
        stats: &PanelStats,
    ) -> Vec<wgpu::CommandBuffer> {
        let raw_input = self.state.take_egui_input(window);
        let panel = &mut self.panel;
        let full_output = self.ctx.run(raw_input, |ctx| {
            panel.show(ctx, stats);
        });

        self.state
            .handle_platform_output(window, full_output.platform_output);

        let tris = self
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        for (id, image_delta) in &full_output.textures_delta.set {
            self.renderer
                .update_texture(gpu.device(), gpu.queue(), *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [size.0, size.1],
            pixels_per_point: full_output.pixels_per_point,
        };

        let command_buffers = self.renderer.update_buffers(
            gpu.device(),
            gpu.queue(),
            encoder,
            &tris,
            &screen_descriptor,
        );

        {
            let mut render_pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: None,
                    occlusion_query_set: None,
                    timestamp_writes: None,
                })
                .forget_lifetime();

            self.renderer
                .render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.renderer.free_texture(id);
        }

        command_buffers
    }
}
