use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use geoverlay_core::overlay::HitTestResult;
use geoverlay_core::session::MapSession;

use super::config::CliConfig;
use super::ViewArgs;

#[derive(Args)]
pub struct PickArgs {
    /// Raster file providing the georeference
    pub raster: PathBuf,

    /// GeoJSON feature collection
    pub features: PathBuf,

    /// Screen X of the click
    #[arg(long, allow_hyphen_values = true)]
    pub x: f64,

    /// Screen Y of the click
    #[arg(long, allow_hyphen_values = true)]
    pub y: f64,

    #[command(flatten)]
    pub view: ViewArgs,
}

pub fn run(args: &PickArgs, config: &CliConfig) -> Result<()> {
    let raster_path = config.resolve(&args.raster);
    let features_path = config.resolve(&args.features);

    let mut session = MapSession::new();
    session
        .load_raster_file(&raster_path)
        .with_context(|| format!("Failed to load {}", raster_path.display()))?;
    session
        .load_features_file(&features_path)
        .with_context(|| format!("Failed to load {}", features_path.display()))?;
    args.view.apply(&mut session);

    match session.click(args.x, args.y) {
        HitTestResult::Match { index, feature } => {
            println!("Feature #{index}");
            println!("{}", feature.details());
        }
        HitTestResult::NoMatch => {
            println!("No feature at {:.1}, {:.1}", args.x, args.y);
        }
    }

    Ok(())
}
