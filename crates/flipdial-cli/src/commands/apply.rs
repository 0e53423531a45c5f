use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use flipdial_core::controller::TransformController;
use flipdial_core::io::image_io::save_image;
use flipdial_core::settings::TransformSettings;
use flipdial_core::transform::{RotationAngle, ZoomStep};
use tracing::debug;

use crate::summary::{print_apply_summary, ApplySummary};

#[derive(Clone, Copy, ValueEnum)]
pub enum ZoomArg {
    In,
    Out,
}

impl From<ZoomArg> for ZoomStep {
    fn from(arg: ZoomArg) -> Self {
        match arg {
            ZoomArg::In => ZoomStep::In,
            ZoomArg::Out => ZoomStep::Out,
        }
    }
}

#[derive(Args)]
pub struct ApplyArgs {
    /// Input image file
    pub file: PathBuf,

    /// Transform settings file (TOML); flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Mirror left-to-right
    #[arg(long)]
    pub horizontal: bool,

    /// Mirror top-to-bottom
    #[arg(long)]
    pub vertical: bool,

    /// Rotation angle in degrees (0-360)
    #[arg(long)]
    pub angle: Option<u16>,

    /// Save a zoomed copy (in = x1.25, out = x0.80) instead of the full-size result
    #[arg(long, value_enum)]
    pub zoom: Option<ZoomArg>,

    /// Output file path; the extension picks the format
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,
}

impl ApplyArgs {
    fn settings(&self) -> Result<TransformSettings> {
        let mut settings = match self.config {
            Some(ref path) => TransformSettings::load(path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?,
            None => TransformSettings::default(),
        };
        if let Some(angle) = self.angle {
            settings.angle = RotationAngle::from(angle);
        }
        settings.mirror.horizontal |= self.horizontal;
        settings.mirror.vertical |= self.vertical;
        Ok(settings)
    }
}

pub fn run(args: &ApplyArgs) -> Result<()> {
    let settings = args.settings()?;
    debug!(?settings, "Resolved transform settings");

    let mut controller = TransformController::new();
    controller
        .open(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    // The dial is set first; mirroring then flips the source and re-applies it.
    controller.rotate(settings.angle);
    if !settings.mirror.is_empty() {
        controller.mirror(settings.mirror);
    }

    let zoom = args.zoom.map(ZoomStep::from);
    let output_size = match zoom.and_then(|step| controller.zoom(step.factor())) {
        Some(view) => {
            save_image(&view.image, &args.output)
                .with_context(|| format!("Failed to save {}", args.output.display()))?;
            view.image.dimensions()
        }
        None => {
            controller
                .save(&args.output)
                .with_context(|| format!("Failed to save {}", args.output.display()))?;
            controller
                .output_image()
                .map(|img| img.dimensions())
                .unwrap_or_default()
        }
    };

    let input_size = controller
        .source()
        .map(|img| img.dimensions())
        .unwrap_or_default();

    print_apply_summary(&ApplySummary {
        input: &args.file,
        output: &args.output,
        settings: &settings,
        zoom,
        input_size,
        output_size,
    });

    Ok(())
}
