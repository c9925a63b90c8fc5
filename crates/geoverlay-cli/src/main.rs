mod commands;
mod summary;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "geoverlay", about = "Telemetry overlay for georeferenced rasters")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show raster size and georeference
    Info(commands::info::InfoArgs),
    /// List the point features of a GeoJSON file
    Features(commands::features::FeaturesArgs),
    /// Convert between world, pixel and screen coordinates
    Project(commands::project::ProjectArgs),
    /// Find the feature under a screen position
    Pick(commands::pick::PickArgs),
    /// Render the feature overlay on top of a raster
    Render(commands::render::RenderArgs),
    /// Print or save the default configuration
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

    let config = commands::config::load(cli.config.as_deref())?;

    match &cli.command {
        Commands::Info(args) => commands::info::run(args, &config),
        Commands::Features(args) => commands::features::run(args, &config),
        Commands::Project(args) => commands::project::run(args, &config),
        Commands::Pick(args) => commands::pick::run(args, &config),
        Commands::Render(args) => commands::render::run(args, &config),
        Commands::Config(args) => commands::config::run(args),
    }
}
