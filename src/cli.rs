// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::material::Shading;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "cube-viewer")]
#[command(about = "Rotating multi-colored cube rendered with wgpu", long_about = None)]
pub struct Cli {
    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Identifier of the container to attach to
    #[arg(long)]
    pub container: Option<String>,

    /// Identifier the window registers itself under
    #[arg(long = "window-id")]
    pub window_id: Option<String>,

    /// Initial window width in logical pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Initial window height in logical pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Disable multisample antialiasing
    #[arg(long = "no-antialias", default_value = "false")]
    pub no_antialias: bool,

    /// Face shading model
    #[arg(long, value_enum)]
    pub shading: Option<Shading>,
}
