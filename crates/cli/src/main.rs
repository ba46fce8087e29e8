mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use dupesweep_core::{DetectionMode, DetectorConfig};

/// dupesweep: find and remove visually duplicate images
#[derive(Parser)]
#[command(name = "dupesweep", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report duplicate images without touching anything
    Scan {
        /// Directory to scan
        path: PathBuf,
        /// Print the duplicate list as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        detection: DetectionArgs,
    },
    /// Find duplicates, confirm interactively and delete the confirmed ones
    Clean {
        /// Directory to clean
        path: PathBuf,
        #[command(flatten)]
        detection: DetectionArgs,
    },
}

#[derive(Args)]
struct DetectionArgs {
    /// Detection mode; auto runs histogram first and falls back to hash
    #[arg(long, value_enum, default_value = "auto")]
    mode: ModeArg,
    /// Hamming distance ceiling for hash mode (0 = bit-identical only)
    #[arg(long, default_value_t = 0)]
    max_distance: u32,
    /// Correlation floor for histogram mode
    #[arg(long, default_value_t = 0.9)]
    min_correlation: f64,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Auto,
    Histogram,
    Hash,
}

impl DetectionArgs {
    fn config(&self) -> DetectorConfig {
        DetectorConfig {
            max_hamming_distance: self.max_distance,
            min_correlation: self.min_correlation,
        }
    }

    /// `None` selects the auto fallback policy.
    fn mode(&self) -> Option<DetectionMode> {
        match self.mode {
            ModeArg::Auto => None,
            ModeArg::Histogram => Some(DetectionMode::Histogram),
            ModeArg::Hash => Some(DetectionMode::Hash),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            path,
            json,
            detection,
        } => commands::scan::run(&path, detection.mode(), &detection.config(), json),
        Commands::Clean { path, detection } => {
            commands::clean::run(&path, detection.mode(), &detection.config())
        }
    }
}
