mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "medgamm", about = "Gamma correction for grayscale scans")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show image dimensions and intensity statistics
    Info(commands::info::InfoArgs),
    /// Apply gamma correction to an image
    Apply(commands::apply::ApplyArgs),
    /// Print or export the 256-bin intensity histogram
    Histogram(commands::histogram::HistogramArgs),
    /// Print the gamma lookup table
    Lut(commands::lut::LutArgs),
    /// Run an enhancement described by a TOML config
    Run(commands::pipeline::RunArgs),
    /// Print or save the default config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Apply(args) => commands::apply::run(args),
        Commands::Histogram(args) => commands::histogram::run(args),
        Commands::Lut(args) => commands::lut::run(args),
        Commands::Run(args) => commands::pipeline::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
