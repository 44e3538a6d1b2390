use std::borrow::Cow;
use std::sync::Arc;

use image::RgbaImage;
use log::{error, info, warn};
use wgpu;
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::engine::backend::{Dest, ImageId, RenderBackend, Rgba};
use crate::engine::graphics::texture::Texture;
use crate::engine::graphics::vertex::{self, Vertex, QUAD_INDICES};
use crate::error::{RuntimeError, StartupError};

/// 2D renderer: every draw is a textured quad placed in a fixed logical frame
/// that is stretched over the window surface.
pub struct Renderer {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub render_pipeline: wgpu::RenderPipeline,
    texture_bind_group_layout: wgpu::BindGroupLayout,
    textures: Vec<Texture>,
    // Quads queued since the last clear, in draw order.
    frame: Vec<(ImageId, [Vertex; 4])>,
    draw_color: Rgba,
    frame_width: u32,
    frame_height: u32,
    surface: wgpu::Surface<'static>,
    window: Arc<Window>,
}

impl Renderer {
    /// Sets up the surface, device and sprite pipeline for `window`.
    /// `frame_width` x `frame_height` is the logical size draws are placed in.
    pub async fn new(
        window: Arc<Window>,
        frame_width: u32,
        frame_height: u32,
        vsync: bool,
    ) -> Result<Self, StartupError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(Arc::clone(&window)).map_err(|e| {
            error!("Failed to create surface: {:?}", e);
            e
        })?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| {
                error!("Failed to request adapter");
                StartupError::NoAdapter
            })?;
        info!("Using adapter {:?}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: None,
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                },
                None,
            )
            .await
            .map_err(|e| {
                error!("Failed to request device: {:?}", e);
                e
            })?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: if vsync {
                wgpu::PresentMode::AutoVsync
            } else {
                wgpu::PresentMode::AutoNoVsync
            },
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Sprite Shader"),
            source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(include_str!("shaders/sprite.wgsl"))),
        });

        let texture_bind_group_layout = Texture::bind_group_layout(&device);

        let render_pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Render Pipeline Layout"),
            bind_group_layouts: &[&texture_bind_group_layout],
            push_constant_ranges: &[],
        });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Render Pipeline"),
            layout: Some(&render_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[Vertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
        });

        Ok(Self {
            device,
            queue,
            config,
            render_pipeline,
            texture_bind_group_layout,
            textures: Vec::new(),
            frame: Vec::new(),
            draw_color: Rgba::BLACK,
            frame_width,
            frame_height,
            surface,
            window,
        })
    }

    /// Uploads an image and returns the handle draws refer to it by.
    pub fn upload(&mut self, rgba: &RgbaImage, label: &str) -> ImageId {
        let texture = Texture::from_rgba(
            &self.device,
            &self.queue,
            &self.texture_bind_group_layout,
            rgba,
            label,
        );
        let (width, height) = texture.size();
        self.textures.push(texture);
        let id = ImageId(self.textures.len() - 1);
        info!("[renderer] Uploaded {} as image {} ({}x{})", label, id.0, width, height);
        id
    }

    /// Picks up window size changes before a frame is acquired.
    fn sync_surface_size(&mut self) {
        let size = self.window.inner_size();
        if size.width > 0
            && size.height > 0
            && (size.width != self.config.width || size.height != self.config.height)
        {
            self.config.width = size.width;
            self.config.height = size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    fn clear_color(&self) -> wgpu::Color {
        // The surface is sRGB, so the clear value is given in linear space.
        let channel = |c: u8| srgb_to_linear(c as f64 / 255.0);
        wgpu::Color {
            r: channel(self.draw_color.r),
            g: channel(self.draw_color.g),
            b: channel(self.draw_color.b),
            a: self.draw_color.a as f64 / 255.0,
        }
    }
}

impl RenderBackend for Renderer {
    fn set_draw_color(&mut self, color: Rgba) {
        self.draw_color = color;
    }

    fn clear(&mut self) {
        self.frame.clear();
    }

    fn draw(&mut self, image: ImageId, dest: Dest) -> Result<(), RuntimeError> {
        if image.0 >= self.textures.len() {
            return Err(RuntimeError::UnknownImage(image.0));
        }
        let corners = vertex::quad(dest, self.frame_width, self.frame_height);
        self.frame.push((image, corners));
        Ok(())
    }

    fn present(&mut self) -> Result<(), RuntimeError> {
        self.sync_surface_size();

        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                warn!("Surface lost or outdated, reconfiguring and skipping frame");
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                warn!("Timed out acquiring frame, skipping it");
                return Ok(());
            }
            Err(e) => {
                error!("Render error: {:?}", e);
                return Err(e.into());
            }
        };
        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

        let vertices: Vec<Vertex> = self.frame.iter().flat_map(|(_, quad)| *quad).collect();
        let buffers = (!vertices.is_empty()).then(|| {
            let vertex_buffer = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Quad Vertex Buffer"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
            let index_buffer = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Quad Index Buffer"),
                contents: bytemuck::cast_slice(QUAD_INDICES),
                usage: wgpu::BufferUsages::INDEX,
            });
            (vertex_buffer, index_buffer)
        });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color()),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if let Some((vertex_buffer, index_buffer)) = &buffers {
                render_pass.set_pipeline(&self.render_pipeline);
                render_pass.set_vertex_buffer(0, vertex_buffer.slice(..));
                render_pass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint16);
                for (i, (image, _)) in self.frame.iter().enumerate() {
                    let texture = &self.textures[image.0];
                    render_pass.set_bind_group(0, &texture.bind_group, &[]);
                    render_pass.draw_indexed(0..QUAD_INDICES.len() as u32, (i * 4) as i32, 0..1);
                }
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::srgb_to_linear;

    #[test]
    fn srgb_endpoints_are_fixed() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn srgb_midtone_darkens() {
        let mid = srgb_to_linear(0.5);
        assert!(mid > 0.2 && mid < 0.25);
    }
}
