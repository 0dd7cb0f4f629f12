use thiserror::Error;

/// Errors raised while setting up or driving the cube viewer
#[derive(Error, Debug)]
pub enum Error {
    #[error("container element `{0}` not found")]
    ContainerNotFound(String),

    #[error("failed to create rendering surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("failed to find a compatible adapter: {0}")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to create device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),

    #[error("surface reports no supported formats")]
    NoSurfaceFormat,

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("invalid color `{0}`, expected #rrggbb")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, Error>;
