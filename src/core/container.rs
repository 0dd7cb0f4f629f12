/// Identifier the viewer looks up when none is configured
pub const DEFAULT_CONTAINER_ID: &str = "threejs-container";

/// Height used when a container reports zero height
pub const DEFAULT_CONTAINER_HEIGHT: u32 = 500;

/// Container dimensions after the default-height rule has been applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerSize {
    pub width: u32,
    pub height: u32,
}

impl ContainerSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Apply the fallback height to raw client dimensions
    pub fn effective(width: u32, height: u32, default_height: u32) -> Self {
        let height = if height == 0 { default_height } else { height };
        Self { width, height }
    }

    /// Read a container's client box with the fallback applied
    pub fn of<C: Container + ?Sized>(container: &C, default_height: u32) -> Self {
        Self::effective(container.client_width(), container.client_height(), default_height)
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Element that hosts the rendering surface
pub trait Container {
    /// Inner width in physical pixels
    fn client_width(&self) -> u32;

    /// Inner height in physical pixels, 0 when unset
    fn client_height(&self) -> u32;

    /// Ask the host to run the animation callback on the next display refresh
    fn request_animation_frame(&self);
}

/// Looks up containers by identifier
pub trait ContainerHost {
    type Container: Container + Clone;

    fn get_element_by_id(&self, id: &str) -> Option<Self::Container>;
}
