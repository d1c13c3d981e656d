//! pixelmend command-line interface

mod pipeline;

use clap::Parser;
use pipeline::RunConfig;
use std::path::PathBuf;
use tracing::error;

#[derive(Parser)]
#[command(name = "pixelmend")]
#[command(version, about = "Detect and repair hot/dead sensor pixels", long_about = None)]
struct Cli {
    /// Input image (PNG, JPEG, BMP or TGA)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Corrected output image; format chosen by extension
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Number of synthetic hot pixels to inject before detection
    #[arg(long, value_name = "N", default_value_t = 0)]
    hot: usize,

    /// Number of synthetic dead pixels to inject before detection
    #[arg(long, value_name = "N", default_value_t = 0)]
    dead: usize,

    /// Random seed for defect injection
    #[arg(long, value_name = "SEED", default_value_t = 0)]
    seed: u64,

    /// Save the defect-injected image to this path before detection
    #[arg(long, value_name = "PATH")]
    snapshot: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = RunConfig {
        input: cli.input,
        output: cli.output,
        hot_count: cli.hot,
        dead_count: cli.dead,
        seed: cli.seed,
        snapshot: cli.snapshot,
    };

    if let Err(e) = pipeline::run(&config) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
