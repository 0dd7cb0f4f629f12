use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::camera::{DEFAULT_DISTANCE, DEFAULT_FAR, DEFAULT_FOV, DEFAULT_NEAR};
use crate::cli::Cli;
use crate::core::{DEFAULT_CONTAINER_HEIGHT, DEFAULT_CONTAINER_ID};
use crate::error::{Error, Result};
use crate::geometry::BOX_FACES;
use crate::material::Shading;
use crate::math::Color;

pub const DEFAULT_ROTATION_STEP: f32 = 0.01;
pub const DEFAULT_CUBE_SIZE: f32 = 2.0;
pub const DEFAULT_BACKGROUND: Color = Color::from_hex(0xf0f0f0);

/// Face colors in material order: red, green, blue, yellow, magenta, cyan
pub const DEFAULT_FACE_COLORS: [Color; BOX_FACES] = [
    Color::from_hex(0xff0000),
    Color::from_hex(0x00ff00),
    Color::from_hex(0x0000ff),
    Color::from_hex(0xffff00),
    Color::from_hex(0xff00ff),
    Color::from_hex(0x00ffff),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    /// Distance along +Z
    pub distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: DEFAULT_FOV,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            distance: DEFAULT_DISTANCE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeConfig {
    pub size: f32,
    pub face_colors: [Color; BOX_FACES],
    /// Radians added to the X and Y rotation every frame
    pub rotation_step: f32,
    pub shading: Shading,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_CUBE_SIZE,
            face_colors: DEFAULT_FACE_COLORS,
            rotation_step: DEFAULT_ROTATION_STEP,
            shading: Shading::Basic,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    pub ambient_color: Color,
    pub ambient_intensity: f32,
    pub directional_color: Color,
    pub directional_intensity: f32,
    pub directional_position: [f32; 3],
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            ambient_color: Color::WHITE,
            ambient_intensity: 0.5,
            directional_color: Color::WHITE,
            directional_intensity: 0.5,
            directional_position: [1.0, 1.0, 1.0],
        }
    }
}

/// Native window that plays the container role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Identifier the window is registered under
    pub id: String,
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            id: DEFAULT_CONTAINER_ID.to_string(),
            title: "Cube Viewer".to_string(),
            width: 800,
            height: DEFAULT_CONTAINER_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Identifier of the container the viewer attaches to
    pub container: String,
    /// Height used when the container reports none
    pub default_height: u32,
    pub background: Color,
    pub antialias: bool,
    pub camera: CameraConfig,
    pub cube: CubeConfig,
    pub lights: LightConfig,
    pub window: WindowConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            container: DEFAULT_CONTAINER_ID.to_string(),
            default_height: DEFAULT_CONTAINER_HEIGHT,
            background: DEFAULT_BACKGROUND,
            antialias: true,
            camera: CameraConfig::default(),
            cube: CubeConfig::default(),
            lights: LightConfig::default(),
            window: WindowConfig::default(),
        }
    }
}

impl ViewerConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// File (if any) first, then command-line overrides
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_cli(cli);
        Ok(config)
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(container) = &cli.container {
            self.container = container.clone();
        }
        if let Some(id) = &cli.window_id {
            self.window.id = id.clone();
        }
        if let Some(width) = cli.width {
            self.window.width = width;
        }
        if let Some(height) = cli.height {
            self.window.height = height;
        }
        if let Some(shading) = cli.shading {
            self.cube.shading = shading;
        }
        if cli.no_antialias {
            self.antialias = false;
        }
    }
}
