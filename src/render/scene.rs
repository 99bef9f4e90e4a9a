use super::helpers::DEPTH_FORMAT;
use super::mesh::{self, MeshVertex, ParticleInstance};
use crate::constants::{PARTICLE_COUNT, PARTICLE_EXTENT, SPHERE_RADIUS, SPHERE_SEGMENTS};
use wgpu::util::DeviceExt;

/// Uniform block shared by the sphere and particle pipelines (all vec4-aligned).
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) sphere_model: [[f32; 4]; 4],
    pub(crate) particle_model: [[f32; 4]; 4],
    pub(crate) camera_pos: [f32; 4],      // xyz, w = particle size
    pub(crate) camera_right: [f32; 4],    // xyz
    pub(crate) camera_up: [f32; 4],       // xyz
    pub(crate) background: [f32; 4],      // rgb, a = ambient intensity
    pub(crate) key_light_pos: [f32; 4],   // xyz, w = intensity
    pub(crate) key_light_color: [f32; 4], // rgb
    pub(crate) rim_light_pos: [f32; 4],   // xyz, w = intensity
    pub(crate) rim_light_color: [f32; 4], // rgb
    pub(crate) sphere_color: [f32; 4],    // rgb, a = emissive strength
    pub(crate) particle_color: [f32; 4],  // rgb, a = opacity
    pub(crate) fog_time: [f32; 4],        // fog near, fog far, time, _
}

pub(crate) struct SceneResources {
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) sphere_pipeline: wgpu::RenderPipeline,
    pub(crate) particle_pipeline: wgpu::RenderPipeline,
    pub(crate) sphere_vertices: wgpu::Buffer,
    pub(crate) sphere_indices: wgpu::Buffer,
    pub(crate) sphere_index_count: u32,
    pub(crate) particles: wgpu::Buffer,
    pub(crate) particle_count: u32,
}

pub(crate) fn create_scene_resources(
    device: &wgpu::Device,
    hdr_format: wgpu::TextureFormat,
    particle_seed: u64,
) -> SceneResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("scene_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("scene_bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("scene_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("scene_uniforms"),
        size: std::mem::size_of::<SceneUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("scene_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });

    let sphere_layout = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<MeshVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3],
    };
    let sphere_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("sphere_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_sphere"),
            buffers: &[sphere_layout],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            cull_mode: Some(wgpu::Face::Back),
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_sphere"),
            targets: &[Some(wgpu::ColorTargetState {
                format: hdr_format,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    let particle_layout = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<ParticleInstance>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &wgpu::vertex_attr_array![0 => Float32x4],
    };
    let additive = wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::One,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent::OVER,
    };
    let particle_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("particle_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_particle"),
            buffers: &[particle_layout],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        // Tested against the sphere, never written.
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: false,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_particle"),
            targets: &[Some(wgpu::ColorTargetState {
                format: hdr_format,
                blend: Some(additive),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    let (vertices, indices) = mesh::uv_sphere(SPHERE_RADIUS, SPHERE_SEGMENTS);
    let sphere_vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("sphere_vertices"),
        contents: bytemuck::cast_slice(&vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let sphere_indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("sphere_indices"),
        contents: bytemuck::cast_slice(&indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    let instances = mesh::particle_field(PARTICLE_COUNT, PARTICLE_EXTENT, particle_seed);
    let particles = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("particles"),
        contents: bytemuck::cast_slice(&instances),
        usage: wgpu::BufferUsages::VERTEX,
    });

    SceneResources {
        uniform_buffer,
        bind_group,
        sphere_pipeline,
        particle_pipeline,
        sphere_vertices,
        sphere_indices,
        sphere_index_count: indices.len() as u32,
        particles,
        particle_count: instances.len() as u32,
    }
}

impl SceneResources {
    pub(crate) fn draw<'p>(&'p self, rpass: &mut wgpu::RenderPass<'p>) {
        rpass.set_bind_group(0, &self.bind_group, &[]);

        rpass.set_pipeline(&self.sphere_pipeline);
        rpass.set_vertex_buffer(0, self.sphere_vertices.slice(..));
        rpass.set_index_buffer(self.sphere_indices.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.sphere_index_count, 0, 0..1);

        rpass.set_pipeline(&self.particle_pipeline);
        rpass.set_vertex_buffer(0, self.particles.slice(..));
        rpass.draw(0..6, 0..self.particle_count);
    }
}
