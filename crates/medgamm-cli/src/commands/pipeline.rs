use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use medgamm_core::compare::compare;
use medgamm_core::config::EnhanceConfig;
use medgamm_core::io::image_io::{load_image, save_image};
use tracing::info;

use crate::summary::{print_comparison_summary, print_config_summary};

#[derive(Args)]
pub struct RunArgs {
    /// Enhancement config file (TOML)
    #[arg(long)]
    pub config: PathBuf,
}

pub fn run(args: &RunArgs) -> Result<()> {
    let contents = std::fs::read_to_string(&args.config)
        .with_context(|| format!("Failed to read config {}", args.config.display()))?;
    let config: EnhanceConfig = toml::from_str(&contents).context("Invalid enhance config")?;

    print_config_summary(&config);
    info!(config = %args.config.display(), "running enhancement");

    let frame = load_image(&config.input)
        .with_context(|| format!("Failed to load {}", config.input.display()))?;
    let cmp = compare(&frame, config.gamma, config.rounding)?;

    save_image(&cmp.corrected, &config.output)
        .with_context(|| format!("Failed to save {}", config.output.display()))?;
    if let Some(ref path) = config.histogram {
        std::fs::write(path, cmp.corrected_histogram.to_csv())
            .with_context(|| format!("Failed to write histogram to {}", path.display()))?;
    }

    print_comparison_summary(&config.input, &config.output, &cmp);

    Ok(())
}
