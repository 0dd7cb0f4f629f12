use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::camera::PerspectiveCamera;
use crate::config::ViewerConfig;
use crate::core::ContainerSize;
use crate::geometry::{BoxGeometry, BOX_FACES};
use crate::light::{AmbientLight, DirectionalLight};
use crate::material::Material;
use crate::math::Color;
use crate::types::SceneUniform;

/// Geometry with one material per face group
#[derive(Debug, Clone)]
pub struct Mesh {
    pub geometry: BoxGeometry,
    pub materials: [Material; BOX_FACES],
    /// Euler angles in radians, applied in XYZ order
    pub rotation: Vec3,
    pub position: Vec3,
}

impl Mesh {
    pub fn new(geometry: BoxGeometry, materials: [Material; BOX_FACES]) -> Self {
        Self {
            geometry,
            materials,
            rotation: Vec3::ZERO,
            position: Vec3::ZERO,
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_rotation_translation(rotation, self.position)
    }
}

/// Everything drawn in one frame: camera, lights and the cube
#[derive(Debug, Clone)]
pub struct Scene {
    pub background: Color,
    pub camera: PerspectiveCamera,
    pub cube: Mesh,
    pub ambient: AmbientLight,
    pub directional: DirectionalLight,
}

impl Scene {
    /// Build the demo scene for a container of the given size
    pub fn build(config: &ViewerConfig, size: ContainerSize) -> Self {
        let camera = PerspectiveCamera::new(
            config.camera.fov,
            size.aspect(),
            config.camera.near,
            config.camera.far,
        )
        .with_position(Vec3::new(0.0, 0.0, config.camera.distance));

        let cube_size = config.cube.size;
        let geometry = BoxGeometry::new(cube_size, cube_size, cube_size);
        let materials = config
            .cube
            .face_colors
            .map(|color| Material::new(config.cube.shading, color));

        let lights = &config.lights;
        Self {
            background: config.background,
            camera,
            cube: Mesh::new(geometry, materials),
            ambient: AmbientLight::new(lights.ambient_color, lights.ambient_intensity),
            directional: DirectionalLight::new(
                lights.directional_color,
                lights.directional_intensity,
                Vec3::from_array(lights.directional_position),
            ),
        }
    }

    /// Pack camera, cube transform, lights and face materials for the shader
    pub fn to_uniform(&self) -> SceneUniform {
        let mut uniform = SceneUniform::new(self.camera.view_projection(), self.cube.model_matrix());

        let [ar, ag, ab] = self.ambient.radiance();
        uniform.ambient = [ar, ag, ab, 0.0];
        let [lr, lg, lb] = self.directional.radiance();
        uniform.light_color = [lr, lg, lb, 0.0];
        let dir = self.directional.direction();
        uniform.light_direction = [dir.x, dir.y, dir.z, 0.0];

        for (face, material) in self.cube.materials.iter().enumerate() {
            uniform.set_face(face, material.color().to_linear(), material.shading_flag());
        }
        uniform
    }
}
