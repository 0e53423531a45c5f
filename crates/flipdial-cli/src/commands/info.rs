use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use flipdial_core::io::image_io::load_image;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let format = image::ImageReader::open(&args.file)
        .with_context(|| format!("Failed to open {}", args.file.display()))?
        .with_guessed_format()?
        .format();
    let img = load_image(&args.file)
        .with_context(|| format!("Failed to decode {}", args.file.display()))?;

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", img.width(), img.height());
    match format {
        Some(f) => println!("Format:      {:?}", f),
        None => println!("Format:      unknown"),
    }

    let size = std::fs::metadata(&args.file)?.len();
    println!("File size:   {:.1} KB", size as f64 / 1024.0);

    Ok(())
}
