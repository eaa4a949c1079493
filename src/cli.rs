// cli.rs - Command-line interface configuration
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "scene-lab")]
#[command(about = "Interactive wgpu scene demo", long_about = None)]
pub struct Cli {
    /// Hide the control panel and FPS overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}
