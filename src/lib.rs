pub mod app;
pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod light;
pub mod material;
pub mod math;
pub mod scene;
pub mod types;
pub mod viewer;

pub use config::ViewerConfig;
pub use error::{Error, Result};
pub use viewer::CubeViewer;
