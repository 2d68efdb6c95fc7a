//! The wgpu scene pipeline and its uniform block.
//!
//! [`WgpuStage`] maps the stable, name-keyed uniform interface onto a packed
//! uniform block flushed into a dynamic-offset uniform buffer, one slice per
//! draw. The block layout here must stay in sync with the struct of the same
//! shape in `scene.wgsl`.

use cgmath::{Matrix4, SquareMatrix, Vector2, Vector3, Vector4};

use crate::scene::MAX_POINT_LIGHTS;
use crate::stage::{ShaderStage, uniform};

/// One point light as the shader sees it.
///
/// All vectors are padded to vec4; `position.w` carries the active flag.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointLightRaw {
    pub position: [f32; 4],
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
}

/// The packed uniform block behind the name-keyed setter interface.
///
/// Uniforms require 16 byte alignment, hence the vec4 padding on the vec3
/// values: `material_specular.w` carries the shininess exponent and the
/// `uv_scale`/flag scalars pack into one 16 byte row.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub model: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub object_color: [f32; 4],
    pub material_diffuse: [f32; 4],
    pub material_specular: [f32; 4],
    pub camera_position: [f32; 4],
    pub uv_scale: [f32; 2],
    pub use_texture: u32,
    pub use_lighting: u32,
    pub point_lights: [PointLightRaw; MAX_POINT_LIGHTS],
}

impl SceneUniforms {
    pub fn new() -> Self {
        Self {
            model: Matrix4::identity().into(),
            view: Matrix4::identity().into(),
            projection: Matrix4::identity().into(),
            object_color: [1.0, 1.0, 1.0, 1.0],
            material_diffuse: [1.0, 1.0, 1.0, 0.0],
            material_specular: [0.0, 0.0, 0.0, 1.0],
            camera_position: [0.0, 0.0, 0.0, 1.0],
            uv_scale: [1.0, 1.0],
            use_texture: 0,
            use_lighting: 0,
            point_lights: [PointLightRaw {
                position: [0.0; 4],
                ambient: [0.0; 4],
                diffuse: [0.0; 4],
                specular: [0.0; 4],
            }; MAX_POINT_LIGHTS],
        }
    }

    /// Write a mat4 uniform by name; `false` when the name is unknown.
    pub fn set_mat4(&mut self, name: &str, value: Matrix4<f32>) -> bool {
        match name {
            uniform::MODEL => self.model = value.into(),
            "view" => self.view = value.into(),
            "projection" => self.projection = value.into(),
            _ => return false,
        }
        true
    }

    pub fn set_vec4(&mut self, name: &str, value: Vector4<f32>) -> bool {
        match name {
            uniform::OBJECT_COLOR => self.object_color = value.into(),
            _ => return false,
        }
        true
    }

    pub fn set_vec3(&mut self, name: &str, value: Vector3<f32>) -> bool {
        let value = [value.x, value.y, value.z];
        match name {
            uniform::MATERIAL_DIFFUSE => self.material_diffuse[..3].copy_from_slice(&value),
            uniform::MATERIAL_SPECULAR => self.material_specular[..3].copy_from_slice(&value),
            "viewPosition" => self.camera_position[..3].copy_from_slice(&value),
            _ => {
                let Some((index, field)) = point_light_field(name) else {
                    return false;
                };
                let Some(light) = self.point_lights.get_mut(index) else {
                    return false;
                };
                match field {
                    "position" => light.position[..3].copy_from_slice(&value),
                    "ambient" => light.ambient[..3].copy_from_slice(&value),
                    "diffuse" => light.diffuse[..3].copy_from_slice(&value),
                    "specular" => light.specular[..3].copy_from_slice(&value),
                    _ => return false,
                }
            }
        }
        true
    }

    pub fn set_vec2(&mut self, name: &str, value: Vector2<f32>) -> bool {
        match name {
            uniform::UV_SCALE => self.uv_scale = value.into(),
            _ => return false,
        }
        true
    }

    pub fn set_float(&mut self, name: &str, value: f32) -> bool {
        match name {
            uniform::MATERIAL_SHININESS => self.material_specular[3] = value,
            _ => return false,
        }
        true
    }

    pub fn set_bool(&mut self, name: &str, value: bool) -> bool {
        let flag = value as u32;
        match name {
            uniform::USE_TEXTURE => self.use_texture = flag,
            uniform::USE_LIGHTING => self.use_lighting = flag,
            _ => {
                let Some((index, "bActive")) = point_light_field(name) else {
                    return false;
                };
                let Some(light) = self.point_lights.get_mut(index) else {
                    return false;
                };
                light.position[3] = flag as f32;
            }
        }
        true
    }
}

impl Default for SceneUniforms {
    fn default() -> Self {
        Self::new()
    }
}

/// Split `pointLights[N].field` into its index and field name.
fn point_light_field(name: &str) -> Option<(usize, &str)> {
    let rest = name.strip_prefix("pointLights[")?;
    let (index, field) = rest.split_once("].")?;
    Some((index.parse().ok()?, field))
}

/// The wgpu-backed shader stage.
///
/// Setter calls mutate a CPU-side [`SceneUniforms`]; [`flush`](Self::flush)
/// writes the block into the next dynamic-offset slice of the uniform buffer
/// and returns the offset to pass to `set_bind_group`. The sampler uniform
/// only selects a texture-unit slot, so it is tracked separately for the
/// host to resolve into a texture bind group.
pub struct WgpuStage {
    queue: wgpu::Queue,
    uniforms: SceneUniforms,
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    stride: u64,
    capacity: u32,
    cursor: u32,
    active_slot: Option<u32>,
}

impl WgpuStage {
    /// Create a stage with room for `max_draws` uniform slices per frame.
    pub fn new(device: &wgpu::Device, queue: wgpu::Queue, max_draws: u32) -> Self {
        let block_size = std::mem::size_of::<SceneUniforms>() as u64;
        let alignment = device.limits().min_uniform_buffer_offset_alignment as u64;
        let stride = block_size.next_multiple_of(alignment);
        let capacity = max_draws.max(1);

        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Scene Uniform Buffer"),
            size: stride * capacity as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let layout = scene_uniform_layout(device);
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(block_size),
                }),
            }],
            label: Some("scene_uniform_bind_group"),
        });

        Self {
            queue,
            uniforms: SceneUniforms::new(),
            buffer,
            bind_group,
            stride,
            capacity,
            cursor: 0,
            active_slot: None,
        }
    }

    /// Rewind the dynamic-offset cursor. Call once per frame before the
    /// first draw.
    pub fn begin_frame(&mut self) {
        self.cursor = 0;
    }

    /// Write the current uniform block into the next buffer slice and return
    /// the dynamic offset to bind it with.
    pub fn flush(&mut self) -> u32 {
        if self.cursor >= self.capacity {
            log::warn!(
                "more than {} draws this frame, reusing the last uniform slice",
                self.capacity
            );
            self.cursor = self.capacity - 1;
        }
        let offset = self.cursor as u64 * self.stride;
        self.queue
            .write_buffer(&self.buffer, offset, bytemuck::bytes_of(&self.uniforms));
        self.cursor += 1;
        offset as u32
    }

    /// The texture-unit slot selected by the last sampler write, if any.
    pub fn active_texture_slot(&self) -> Option<u32> {
        self.active_slot
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }

    pub fn uniforms(&self) -> &SceneUniforms {
        &self.uniforms
    }
}

impl ShaderStage for WgpuStage {
    fn set_mat4(&mut self, name: &str, value: Matrix4<f32>) {
        if !self.uniforms.set_mat4(name, value) {
            log::warn!("unknown mat4 uniform {name:?}");
        }
    }

    fn set_vec4(&mut self, name: &str, value: Vector4<f32>) {
        if !self.uniforms.set_vec4(name, value) {
            log::warn!("unknown vec4 uniform {name:?}");
        }
    }

    fn set_vec3(&mut self, name: &str, value: Vector3<f32>) {
        if !self.uniforms.set_vec3(name, value) {
            log::warn!("unknown vec3 uniform {name:?}");
        }
    }

    fn set_vec2(&mut self, name: &str, value: Vector2<f32>) {
        if !self.uniforms.set_vec2(name, value) {
            log::warn!("unknown vec2 uniform {name:?}");
        }
    }

    fn set_float(&mut self, name: &str, value: f32) {
        if !self.uniforms.set_float(name, value) {
            log::warn!("unknown float uniform {name:?}");
        }
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        if !self.uniforms.set_bool(name, value) {
            log::warn!("unknown bool uniform {name:?}");
        }
    }

    fn set_sampler(&mut self, name: &str, slot: u32) {
        if name == uniform::OBJECT_TEXTURE {
            self.active_slot = Some(slot);
        } else {
            log::warn!("unknown sampler uniform {name:?}");
        }
    }
}

/// Vertex layout the external mesh library must produce for scene meshes.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl SceneVertex {
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<SceneVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 6]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// Layout for the dynamic-offset uniform block at group 0.
pub fn scene_uniform_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: true,
                min_binding_size: None,
            },
            count: None,
        }],
        label: Some("scene_uniform_layout"),
    })
}

/// Layout for the per-draw texture and sampler at group 1.
pub fn scene_texture_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
        label: Some("scene_texture_layout"),
    })
}

/// Build the scene render pipeline.
pub fn mk_scene_pipeline(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    depth_format: Option<wgpu::TextureFormat>,
) -> wgpu::RenderPipeline {
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Scene Pipeline Layout"),
        bind_group_layouts: &[
            Some(&scene_uniform_layout(device)),
            Some(&scene_texture_layout(device)),
        ],
        immediate_size: 0,
    });
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Scene Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("scene.wgsl").into()),
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        cache: None,
        label: Some("Scene Pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[SceneVertex::desc()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(wgpu::BlendState {
                    alpha: wgpu::BlendComponent::REPLACE,
                    color: wgpu::BlendComponent::REPLACE,
                }),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: Some(wgpu::Face::Back),
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: depth_format.map(|format| wgpu::DepthStencilState {
            format,
            depth_write_enabled: Some(true),
            depth_compare: Some(wgpu::CompareFunction::Less),
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState {
            count: 1,
            mask: !0,
            alpha_to_coverage_enabled: false,
        },
        multiview_mask: None,
    })
}
