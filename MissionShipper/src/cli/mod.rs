//! Mission Shipper CLI - builds the @cnto_missions mod from the command line

pub mod progress;
pub mod ship;

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use crate::archive::ArchiverConfig;
use crate::config::{
    DEFAULT_BUILD_PATH, DEFAULT_MISSIONS_PATH, DEFAULT_TARGET_PATH, DEFAULT_TEMPLATE_PATH,
    ShipperConfig, ShipperPaths,
};
use crate::layout::{DEFAULT_MAKEPBO, MAKEPBO_ENV};

#[derive(Parser)]
#[command(name = "mission-shipper")]
#[command(about = "Helper for generating the @cnto_missions mod", long_about = None)]
#[command(version)]
struct Cli {
    /// Source directory that contains the template files
    #[arg(long, default_value = DEFAULT_TEMPLATE_PATH)]
    template_path: PathBuf,

    /// Source directory for non-pboized missions to package
    #[arg(long, default_value = DEFAULT_MISSIONS_PATH)]
    missions_path: PathBuf,

    /// Build directory for storing the mod before pboization
    #[arg(long, default_value = DEFAULT_BUILD_PATH)]
    build_path: PathBuf,

    /// Target directory for storing the generated @cnto_missions mod
    #[arg(long, default_value = DEFAULT_TARGET_PATH)]
    target_path: PathBuf,

    /// makepbo executable (looked up on PATH unless a path is given)
    #[arg(long, env = MAKEPBO_ENV, default_value = DEFAULT_MAKEPBO)]
    makepbo: PathBuf,

    /// Log every copied file and the archiver output
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only print warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::WARN
        } else {
            Level::INFO
        }
    }

    fn into_config(self) -> ShipperConfig {
        ShipperConfig::new(
            ShipperPaths {
                template_path: self.template_path,
                missions_path: self.missions_path,
                build_path: self.build_path,
                target_path: self.target_path,
            },
            ArchiverConfig::new(self.makepbo),
        )
    }
}

/// Run the Mission Shipper CLI
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_target(false)
        .init();

    let quiet = cli.quiet;
    ship::execute(cli.into_config(), !quiet)
}
