//! Strobo CLI — Command-line interface for strobe-image compositing.
//!
//! Usage:
//!   strobo info <DIR>          Inspect a frame sequence
//!   strobo compose <DIR>       Compose a single strobe image
//!   strobo series <DIR>        Compose one strobe image per phase offset

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "strobo",
    about = "Strobe photography from frame sequences",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show information about a frame sequence directory
    Info {
        /// Directory containing the frame images
        dir: PathBuf,
    },

    /// Compose a single strobe image
    Compose {
        /// Directory containing the frame images
        dir: PathBuf,

        /// Output image path
        #[arg(short, long, default_value = "strobe.png")]
        output: PathBuf,

        /// Sampling stride (defaults to the configured stride)
        #[arg(long)]
        stride: Option<usize>,

        /// Phase offset within the stride period
        #[arg(long, default_value = "0")]
        offset: usize,

        /// Emit a 4-channel RGBA image with opaque alpha
        #[arg(long)]
        rgba: bool,
    },

    /// Compose the full strobe series for a stride
    Series {
        /// Directory containing the frame images
        dir: PathBuf,

        /// Output directory for the series
        #[arg(short, long, default_value = "strobe-series")]
        output: PathBuf,

        /// Sampling stride (defaults to the configured stride)
        #[arg(long)]
        stride: Option<usize>,

        /// Emit 4-channel RGBA images with opaque alpha
        #[arg(long)]
        rgba: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    strobo_common::logging::init_logging(&strobo_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: false,
        file: None,
    });

    match cli.command {
        Commands::Info { dir } => commands::info::run(dir),
        Commands::Compose {
            dir,
            output,
            stride,
            offset,
            rgba,
        } => commands::compose::run(dir, output, stride, offset, rgba),
        Commands::Series {
            dir,
            output,
            stride,
            rgba,
        } => commands::series::run(dir, output, stride, rgba),
    }
}
