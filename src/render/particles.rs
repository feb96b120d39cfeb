use super::helpers::{self, DEPTH_FORMAT};
use super::targets::HDR_FORMAT;
use crate::constants::{
    LEAF_MATERIAL, ORNAMENT_MATERIAL, RIBBON_MATERIAL, SPARKLE_MATERIAL, STAR_CONE_HEIGHT,
    STAR_CONE_RADIUS, STAR_CONE_SEGMENTS, STAR_MATERIAL,
};
use crate::core::mesh::{self, MeshVertex};
use crate::core::palette;
use crate::core::particles::InstanceRaw;
use crate::core::GroupKind;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Globals {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) group: [[f32; 4]; 4],
    pub(crate) camera_pos: [f32; 4],
    pub(crate) frame: [f32; 4], // x: time, y: blend
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct MaterialUniforms {
    params: [f32; 4],
    emissive: [f32; 4],
}

/// One GPU draw per particle group: a shared low-poly mesh plus a per-instance
/// buffer sized for the group's particle count.
pub(crate) struct InstancedMesh {
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
    instance_buffer: wgpu::Buffer,
    capacity: usize,
    material: wgpu::BindGroup,
}

impl InstancedMesh {
    /// Upload this frame's instances. Anything beyond capacity is dropped.
    pub(crate) fn upload(&self, queue: &wgpu::Queue, instances: &[InstanceRaw]) -> u32 {
        let n = instances.len().min(self.capacity);
        if n > 0 {
            queue.write_buffer(
                &self.instance_buffer,
                0,
                bytemuck::cast_slice(&instances[..n]),
            );
        }
        n as u32
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, instance_count: u32) {
        if instance_count == 0 {
            return;
        }
        rpass.set_bind_group(1, &self.material, &[]);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));
        rpass.draw(0..self.vertex_count, 0..instance_count);
    }
}

pub(crate) struct SceneResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) globals_buffer: wgpu::Buffer,
    pub(crate) globals_bind_group: wgpu::BindGroup,
    material_bgl: wgpu::BindGroupLayout,
}

const MESH_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
const INSTANCE_ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
    2 => Float32x4,
    3 => Float32x4,
    4 => Float32x4,
    5 => Float32x4,
    6 => Float32x4,
];

pub(crate) fn create_scene_resources(device: &wgpu::Device) -> SceneResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("scene_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
    });
    let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("scene_globals_bgl"),
        entries: &[helpers::uniform_bgl_entry(
            0,
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        )],
    });
    let material_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("scene_material_bgl"),
        entries: &[helpers::uniform_bgl_entry(0, wgpu::ShaderStages::FRAGMENT)],
    });
    let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("scene_globals"),
        size: std::mem::size_of::<Globals>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("scene_globals_bg"),
        layout: &globals_bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: globals_buffer.as_entire_binding(),
        }],
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("scene_pl"),
        bind_group_layouts: &[&globals_bgl, &material_bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("scene_pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[
                wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<MeshVertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &MESH_ATTRS,
                },
                wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<InstanceRaw>() as u64,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &INSTANCE_ATTRS,
                },
            ],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            front_face: wgpu::FrontFace::Ccw,
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
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: HDR_FORMAT,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });
    SceneResources {
        pipeline,
        globals_buffer,
        globals_bind_group,
        material_bgl,
    }
}

fn mesh_for(kind: GroupKind) -> Vec<MeshVertex> {
    match kind {
        GroupKind::Leaves => mesh::octahedron(),
        GroupKind::Ornaments | GroupKind::Sparkles => mesh::icosahedron(),
        GroupKind::Ribbon => mesh::tetrahedron(),
        GroupKind::Star => mesh::cone(STAR_CONE_RADIUS, STAR_CONE_HEIGHT, STAR_CONE_SEGMENTS),
    }
}

fn material_for(kind: GroupKind) -> MaterialUniforms {
    let (params, emissive) = match kind {
        GroupKind::Leaves => (LEAF_MATERIAL, 0x000000),
        GroupKind::Ornaments => (ORNAMENT_MATERIAL, palette::ORNAMENT_LAVENDER),
        GroupKind::Ribbon => (RIBBON_MATERIAL, palette::RIBBON_WHITE),
        GroupKind::Star => (STAR_MATERIAL, palette::STAR_CHIFFON),
        GroupKind::Sparkles => (SPARKLE_MATERIAL, 0x000000),
    };
    let [r, g, b] = palette::hex_to_linear(emissive);
    MaterialUniforms {
        params,
        emissive: [r, g, b, 1.0],
    }
}

pub(crate) fn create_instanced_mesh(
    device: &wgpu::Device,
    scene: &SceneResources,
    kind: GroupKind,
    capacity: usize,
) -> InstancedMesh {
    let vertices = mesh_for(kind);
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("mesh_vertices"),
        contents: bytemuck::cast_slice(&vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let capacity = capacity.max(1);
    let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("mesh_instances"),
        size: (capacity * std::mem::size_of::<InstanceRaw>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let material_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("mesh_material"),
        contents: bytemuck::bytes_of(&material_for(kind)),
        usage: wgpu::BufferUsages::UNIFORM,
    });
    let material = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("mesh_material_bg"),
        layout: &scene.material_bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: material_buffer.as_entire_binding(),
        }],
    });
    InstancedMesh {
        vertex_buffer,
        vertex_count: vertices.len() as u32,
        instance_buffer,
        capacity,
        material,
    }
}
