//! Surface appearance for mesh faces.

use serde::{Deserialize, Serialize};

use crate::math::Color;
use crate::types::{SHADING_BASIC, SHADING_LAMBERT};

/// How a face responds to the scene lights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Shading {
    /// Flat color, lights are ignored
    #[default]
    Basic,
    /// Diffuse shading from the ambient and directional lights
    Lambert,
}

/// Single-color material
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    MeshBasic { color: Color },
    MeshLambert { color: Color },
}

impl Material {
    pub fn new(shading: Shading, color: Color) -> Self {
        match shading {
            Shading::Basic => Material::MeshBasic { color },
            Shading::Lambert => Material::MeshLambert { color },
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Material::MeshBasic { color } | Material::MeshLambert { color } => *color,
        }
    }

    pub fn shading(&self) -> Shading {
        match self {
            Material::MeshBasic { .. } => Shading::Basic,
            Material::MeshLambert { .. } => Shading::Lambert,
        }
    }

    pub(crate) fn shading_flag(&self) -> u32 {
        match self.shading() {
            Shading::Basic => SHADING_BASIC,
            Shading::Lambert => SHADING_LAMBERT,
        }
    }
}
