use glam::{Mat4, Vec3};

use crate::geometry::BOX_FACES;

/// Box vertex for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub face: u32, // Material slot of the owning face
}

impl Vertex {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Uint32];

    pub fn new(position: Vec3, normal: Vec3, face: u32) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            face,
        }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Shading models understood by the cube shader
pub const SHADING_BASIC: u32 = 0;
pub const SHADING_LAMBERT: u32 = 1;

/// Per-frame uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniform {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub ambient: [f32; 4],         // Linear rgb pre-multiplied by intensity
    pub light_color: [f32; 4],     // Linear rgb pre-multiplied by intensity
    pub light_direction: [f32; 4], // Unit vector toward the light
    pub face_colors: [[f32; 4]; BOX_FACES],
    pub face_shading: [[u32; 4]; 2], // One flag per face, packed for uniform alignment
}

impl SceneUniform {
    pub fn new(view_proj: Mat4, model: Mat4) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            ambient: [0.0; 4],
            light_color: [0.0; 4],
            light_direction: [0.0, 0.0, 1.0, 0.0],
            face_colors: [[1.0; 4]; BOX_FACES],
            face_shading: [[SHADING_BASIC; 4]; 2],
        }
    }

    pub fn set_face(&mut self, face: usize, color: [f32; 3], shading: u32) {
        self.face_colors[face] = [color[0], color[1], color[2], 1.0];
        self.face_shading[face / 4][face % 4] = shading;
    }

    pub fn shading_of(&self, face: usize) -> u32 {
        self.face_shading[face / 4][face % 4]
    }
}
