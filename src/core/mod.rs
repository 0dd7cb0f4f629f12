pub mod container;
pub mod gpu_context;
pub mod mesh_renderer;
pub mod renderer;
pub mod window;

pub use container::{
    Container, ContainerHost, ContainerSize, DEFAULT_CONTAINER_HEIGHT, DEFAULT_CONTAINER_ID,
};
pub use gpu_context::GpuContext;
pub use mesh_renderer::MeshRenderer;
pub use renderer::{RendererOptions, SceneRenderer};
pub use window::{WindowContainer, WindowHost};
