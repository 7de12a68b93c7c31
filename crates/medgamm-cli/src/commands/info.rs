use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use medgamm_core::filters::histogram::{Histogram, ImageStats};
use medgamm_core::io::image_io::load_image;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file (JPEG, PNG or TIFF)
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let frame = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let hist = Histogram::from_frame(&frame);

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", frame.width(), frame.height());
    println!("Pixels:      {}", frame.pixel_count());

    if let Some(stats) = ImageStats::from_histogram(&hist) {
        println!("Min:         {}", stats.min);
        println!("Max:         {}", stats.max);
        println!("Mean:        {:.2}", stats.mean);
    }
    if let Some((value, count)) = hist.peak() {
        println!("Peak:        {} ({} px)", value, count);
    }

    Ok(())
}
