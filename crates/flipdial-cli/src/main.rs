mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "flipdial", about = "Mirror, rotate, zoom and save images")]
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
    /// Show image dimensions and format
    Info(commands::info::InfoArgs),
    /// Mirror, rotate and optionally zoom an image, then save it
    Apply(commands::apply::ApplyArgs),
    /// Print the status line for the pixel at x,y
    Sample(commands::sample::SampleArgs),
    /// Print or save default transform settings as TOML
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
        Commands::Sample(args) => commands::sample::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
