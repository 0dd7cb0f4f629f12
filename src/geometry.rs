use glam::Vec3;

use crate::types::Vertex;

/// Number of faces (and material slots) on a box
pub const BOX_FACES: usize = 6;

/// Outward normal plus two in-plane axes with `u × v == normal`,
/// in the box face order +X, -X, +Y, -Y, +Z, -Z
const FACE_FRAMES: [(Vec3, Vec3, Vec3); BOX_FACES] = [
    (Vec3::X, Vec3::NEG_Z, Vec3::Y),
    (Vec3::NEG_X, Vec3::Z, Vec3::Y),
    (Vec3::Y, Vec3::X, Vec3::NEG_Z),
    (Vec3::NEG_Y, Vec3::X, Vec3::Z),
    (Vec3::Z, Vec3::X, Vec3::Y),
    (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
];

/// Index range drawn with one material
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceGroup {
    pub start: u32,
    pub count: u32,
    pub material_index: usize,
}

/// Axis-aligned box centered on the origin, one group per face
#[derive(Debug, Clone)]
pub struct BoxGeometry {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    vertices: Vec<Vertex>,
    indices: Vec<u16>,
    groups: Vec<FaceGroup>,
}

impl BoxGeometry {
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        let half = Vec3::new(width, height, depth) * 0.5;
        let mut vertices = Vec::with_capacity(BOX_FACES * 4);
        let mut indices = Vec::with_capacity(BOX_FACES * 6);
        let mut groups = Vec::with_capacity(BOX_FACES);

        for (face, (normal, u, v)) in FACE_FRAMES.iter().enumerate() {
            let base = vertices.len() as u16;
            // counter-clockwise when seen from outside
            for (su, sv) in [(-1.0f32, -1.0f32), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
                let corner = (*normal + *u * su + *v * sv) * half;
                vertices.push(Vertex::new(corner, *normal, face as u32));
            }

            groups.push(FaceGroup {
                start: indices.len() as u32,
                count: 6,
                material_index: face,
            });
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        Self {
            width,
            height,
            depth,
            vertices,
            indices,
            groups,
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    pub fn groups(&self) -> &[FaceGroup] {
        &self.groups
    }
}
