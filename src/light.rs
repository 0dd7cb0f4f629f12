use glam::Vec3;

use crate::math::Color;

/// Uniform light with no direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: Color,
    pub intensity: f32,
}

impl AmbientLight {
    pub fn new(color: Color, intensity: f32) -> Self {
        Self { color, intensity }
    }

    /// Linear radiance as uploaded to the shader
    pub fn radiance(&self) -> [f32; 3] {
        self.color.to_linear().map(|c| c * self.intensity)
    }
}

/// Parallel light shining from `position` toward the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub color: Color,
    pub intensity: f32,
    pub position: Vec3,
}

impl DirectionalLight {
    pub fn new(color: Color, intensity: f32, position: Vec3) -> Self {
        Self {
            color,
            intensity,
            position,
        }
    }

    /// Unit vector pointing from the lit surface toward the light
    pub fn direction(&self) -> Vec3 {
        self.position.normalize_or(Vec3::Z)
    }

    pub fn radiance(&self) -> [f32; 3] {
        self.color.to_linear().map(|c| c * self.intensity)
    }
}
