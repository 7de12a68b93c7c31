use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use medgamm_core::compare::compare;
use medgamm_core::io::image_io::{load_image, save_image};

use super::RoundingArg;
use crate::summary::print_comparison_summary;

#[derive(Args)]
pub struct ApplyArgs {
    /// Input image file (JPEG, PNG or TIFF)
    pub file: PathBuf,

    /// Gamma value (> 0; 0.1 to 3.0 is the usual range)
    #[arg(long, default_value = "1.0")]
    pub gamma: f32,

    /// How table values are converted back to 8-bit levels
    #[arg(long, value_enum, default_value = "truncate")]
    pub rounding: RoundingArg,

    /// Also write the corrected histogram as CSV
    #[arg(long)]
    pub histogram: Option<PathBuf>,

    /// Output file path
    #[arg(short, long, default_value = "corrected.png")]
    pub output: PathBuf,
}

pub fn run(args: &ApplyArgs) -> Result<()> {
    let frame = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    let cmp = compare(&frame, args.gamma, args.rounding.into())
        .context("Gamma correction failed")?;

    save_image(&cmp.corrected, &args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;

    if let Some(ref path) = args.histogram {
        std::fs::write(path, cmp.corrected_histogram.to_csv())
            .with_context(|| format!("Failed to write histogram to {}", path.display()))?;
    }

    print_comparison_summary(&args.file, &args.output, &cmp);

    Ok(())
}
