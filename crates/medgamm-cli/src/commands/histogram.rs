use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use medgamm_core::filters::gamma::gamma_transform;
use medgamm_core::filters::histogram::Histogram;
use medgamm_core::io::image_io::load_image;

/// Width of the text bar for the fullest bin.
const BAR_WIDTH: usize = 50;

#[derive(Args)]
pub struct HistogramArgs {
    /// Input image file (JPEG, PNG or TIFF)
    pub file: PathBuf,

    /// Histogram of the gamma-corrected image instead of the original
    #[arg(long)]
    pub gamma: Option<f32>,

    /// Group this many intensities per printed row
    #[arg(long, default_value = "8")]
    pub group: usize,

    /// Write all 256 bins as CSV instead of printing
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &HistogramArgs) -> Result<()> {
    let mut frame = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    if let Some(gamma) = args.gamma {
        frame = gamma_transform(&frame, gamma)?;
    }
    let hist = Histogram::from_frame(&frame);

    if let Some(ref path) = args.output {
        std::fs::write(path, hist.to_csv())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Histogram saved to {}", path.display());
        return Ok(());
    }

    let group = args.group.clamp(1, 256);
    let grouped: Vec<(usize, u64)> = hist
        .counts()
        .chunks(group)
        .enumerate()
        .map(|(i, chunk)| (i * group, chunk.iter().sum()))
        .collect();
    let max = grouped.iter().map(|(_, c)| *c).max().unwrap_or(0).max(1);

    for (start, count) in grouped {
        let end = (start + group - 1).min(255);
        let bar = "#".repeat((count as f64 / max as f64 * BAR_WIDTH as f64).round() as usize);
        println!("{start:>3}-{end:<3} {count:>9} {bar}");
    }

    Ok(())
}
