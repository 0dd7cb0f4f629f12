use clap::Parser;

use cube_viewer::app::App;
use cube_viewer::cli::Cli;
use cube_viewer::ViewerConfig;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = ViewerConfig::from_cli(&cli)?;
    log::debug!("Config: {:?}", config);

    App::new(config).run()
}
