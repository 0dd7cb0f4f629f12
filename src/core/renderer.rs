use crate::error::Result;
use crate::scene::Scene;

/// Options fixed when the renderer is created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RendererOptions {
    pub antialias: bool,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self { antialias: true }
    }
}

/// Draws a scene onto the surface attached to a container
pub trait SceneRenderer {
    /// Resize the output surface
    fn set_size(&mut self, width: u32, height: u32);

    /// Current output size
    fn size(&self) -> (u32, u32);

    /// Draw one frame through the scene's camera
    fn render(&mut self, scene: &Scene) -> Result<()>;
}
