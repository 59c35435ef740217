//! WebGPU renderer: one instanced pipeline drawing every scene object as
//! an oriented quad whose fragment mask carves out the shape (ring, knot
//! lobes, spinner slab, particle dot). Geometry stays analytic; the
//! animation shows up through each instance's model matrix.

use drift_core::{Camera, MaterialParams, NodeKind, ParticleField, Scene};
use glam::Mat4;
use web_sys as web;
use wgpu::util::DeviceExt;

use crate::constants::{
    CLEAR_COLOR, KNOT_BASE_SIZE, PARTICLE_SIZE, RING_BASE_SIZE, SPINNER_BASE_SIZE,
};

const MAX_INSTANCES: usize = 256;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
    light_dir: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    model: [[f32; 4]; 4],
    color: [f32; 4],
    shape: f32,
    _pad: [f32; 3],
}

fn shape_id(kind: NodeKind) -> f32 {
    match kind {
        NodeKind::Ring => 0.0,
        NodeKind::Knot => 1.0,
        NodeKind::Spinner => 2.0,
    }
}

fn base_size(kind: NodeKind) -> f32 {
    match kind {
        NodeKind::Ring => RING_BASE_SIZE,
        NodeKind::Knot => KNOT_BASE_SIZE,
        NodeKind::Spinner => SPINNER_BASE_SIZE,
    }
}

/// Flatten the scene and particle field into this frame's instance list.
pub fn build_instances(
    scene: &Scene,
    particles: &ParticleField,
    material: &MaterialParams,
) -> Vec<InstanceData> {
    let color = [material.color[0], material.color[1], material.color[2], 1.0];
    let mut instances = Vec::with_capacity(scene.len() + particles.positions.len());
    for node in scene.iter() {
        let model = node.transform.matrix() * Mat4::from_scale(glam::Vec3::splat(base_size(node.kind)));
        instances.push(InstanceData {
            model: model.to_cols_array_2d(),
            color,
            shape: shape_id(node.kind),
            _pad: [0.0; 3],
        });
    }
    for p in &particles.positions {
        let model = Mat4::from_translation(*p) * Mat4::from_scale(glam::Vec3::splat(PARTICLE_SIZE));
        instances.push(InstanceData {
            model: model.to_cols_array_2d(),
            color,
            shape: 3.0,
            _pad: [0.0; 3],
        });
    }
    instances.truncate(MAX_INSTANCES);
    instances
}

const SHADER_SRC: &str = r#"
struct Uniforms {
  view_proj: mat4x4<f32>,
  light_dir: vec4<f32>,
};
@group(0) @binding(0) var<uniform> u: Uniforms;

struct VsOut {
  @builtin(position) pos: vec4<f32>,
  @location(0) color: vec4<f32>,
  @location(1) local: vec2<f32>,
  @location(2) shade: f32,
  @location(3) shape: f32,
};

@vertex
fn vs_main(
  @location(0) v_pos: vec2<f32>,
  @location(1) m0: vec4<f32>,
  @location(2) m1: vec4<f32>,
  @location(3) m2: vec4<f32>,
  @location(4) m3: vec4<f32>,
  @location(5) i_color: vec4<f32>,
  @location(6) i_shape: f32,
) -> VsOut {
  let model = mat4x4<f32>(m0, m1, m2, m3);
  let world = model * vec4<f32>(v_pos, 0.0, 1.0);
  let normal = normalize((model * vec4<f32>(0.0, 0.0, 1.0, 0.0)).xyz);
  let lit = 0.35 + 0.65 * abs(dot(normal, normalize(u.light_dir.xyz)));
  var out: VsOut;
  out.pos = u.view_proj * world;
  out.color = i_color;
  out.local = v_pos;
  // particles are unlit
  out.shade = select(lit, 1.0, i_shape > 2.5);
  out.shape = i_shape;
  return out;
}

@fragment
fn fs_main(inf: VsOut) -> @location(0) vec4<f32> {
  let r = length(inf.local);
  let theta = atan2(inf.local.y, inf.local.x);
  var alpha = 0.0;
  if (inf.shape < 0.5) {
    // ring: annulus around r = 0.38
    let band = abs(r - 0.38);
    alpha = 1.0 - smoothstep(0.10, 0.12, band);
  } else if (inf.shape < 1.5) {
    // knot: annulus with three lobes
    let wobble = 0.06 * sin(3.0 * theta);
    let band = abs(r - (0.34 + wobble));
    alpha = 1.0 - smoothstep(0.11, 0.13, band);
  } else if (inf.shape < 2.5) {
    // spinner: slab tapering toward the top
    let half_width = 0.42 - 0.18 * (inf.local.y + 0.5);
    alpha = step(abs(inf.local.x), half_width) * step(abs(inf.local.y), 0.45);
  } else {
    // particle dot
    alpha = 1.0 - smoothstep(0.40, 0.5, r);
  }
  let rgb = inf.color.rgb * inf.shade;
  return vec4<f32>(rgb, alpha * inf.color.a);
}
"#;

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    quad_vb: wgpu::Buffer,
    instance_vb: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("no WebGPU adapter"))?;
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
        let format = caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene-shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SRC.into()),
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        // Unit quad, two triangles
        let quad_vertices: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let instance_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("instance_vb"),
            size: (std::mem::size_of::<InstanceData>() * MAX_INSTANCES) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bgl"),
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
            label: Some("bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let vertex_buffers = [
            // slot 0: quad positions
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                }],
            },
            // slot 1: instance data (model matrix columns, color, shape)
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<InstanceData>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 0,
                        shader_location: 1,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 16,
                        shader_location: 2,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 32,
                        shader_location: 3,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 48,
                        shader_location: 4,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 64,
                        shader_location: 5,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32,
                        offset: 80,
                        shader_location: 6,
                    },
                ],
            },
        ];

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &vertex_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            quad_vb,
            instance_vb,
            bind_group,
            width,
            height,
        })
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
        }
    }

    pub fn render(
        &mut self,
        camera: &Camera,
        instances: &[InstanceData],
        light_dir: [f32; 3],
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        let view_proj = (camera.projection_matrix() * camera.view_matrix()).to_cols_array_2d();
        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Uniforms {
                view_proj,
                light_dir: [light_dir[0], light_dir[1], light_dir[2], 0.0],
            }),
        );
        let count = instances.len().min(MAX_INSTANCES);
        self.queue
            .write_buffer(&self.instance_vb, 0, bytemuck::cast_slice(&instances[..count]));

        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("rpass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
        rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
        rpass.draw(0..6, 0..count as u32);
        drop(rpass);
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
