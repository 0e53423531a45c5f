use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use flipdial_core::controller::TransformController;
use flipdial_core::sample::status_line;
use flipdial_core::transform::RotationAngle;

#[derive(Args)]
pub struct SampleArgs {
    /// Input image file
    pub file: PathBuf,

    /// Column in the displayed image
    #[arg(allow_hyphen_values = true)]
    pub x: i64,

    /// Row in the displayed image
    #[arg(allow_hyphen_values = true)]
    pub y: i64,

    /// Rotate before sampling (degrees, 0-360)
    #[arg(long, default_value = "0")]
    pub angle: u16,
}

pub fn run(args: &SampleArgs) -> Result<()> {
    let mut controller = TransformController::new();
    controller
        .open(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    if args.angle != 0 {
        controller.rotate(RotationAngle::from(args.angle));
    }

    println!("{}", status_line(controller.pointer_sample(args.x, args.y)));
    Ok(())
}
