//! GazeKit CLI — demo sessions and calibration management.
//!
//! Usage:
//!   gazekit run [OPTIONS]     Run a synthetic demo session
//!   gazekit info              Show stored calibration data
//!   gazekit clear-data        Wipe stored calibration data
//!   gazekit check             Check configuration and store health

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "gazekit",
    about = "Webcam gaze estimation with online ridge regression",
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
    /// Run a demo session against the synthetic camera and tracker
    Run {
        /// How long to run, in seconds
        #[arg(long, default_value = "10")]
        seconds: u64,

        /// Regression model: ridge, weighted_ridge, or threaded_ridge
        #[arg(long, default_value = "ridge")]
        regression: String,
    },

    /// Show stored calibration data
    Info,

    /// Wipe stored calibration data
    ClearData,

    /// Check configuration and store health
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = gazekit_common::config::GazekitConfig::load();
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    gazekit_common::logging::init_logging(&config.logging);

    match cli.command {
        Commands::Run {
            seconds,
            regression,
        } => commands::run::execute(config, seconds, &regression).await?,
        Commands::Info => commands::info::execute(config).await?,
        Commands::ClearData => commands::clear::execute(config).await?,
        Commands::Check => commands::check::execute(config)?,
    }

    Ok(())
}
