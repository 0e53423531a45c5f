use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use flipdial_core::settings::TransformSettings;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write settings to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save the default TransformSettings as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let settings = TransformSettings::default();

    if let Some(ref path) = args.output {
        settings
            .save(path)
            .with_context(|| format!("Failed to write settings to {}", path.display()))?;
        println!("Default settings saved to {}", path.display());
    } else {
        print!("{}", settings.to_toml_string()?);
    }

    Ok(())
}
