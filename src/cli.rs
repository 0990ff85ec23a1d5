// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "ground-picker")]
#[command(about = "Headless point-and-click picking demo", long_about = None)]
pub struct Cli {
    /// Input script to replay: sweep, hold or zoom
    #[arg(long, default_value = "sweep")]
    pub scenario: String,

    /// Number of frames to run
    #[arg(long, default_value = "60")]
    pub frames: usize,

    /// Optional JSON config overriding the default tunables
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Use an orthographic camera instead of perspective
    #[arg(long, default_value = "false")]
    pub orthographic: bool,
}
