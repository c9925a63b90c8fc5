use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use geoverlay_core::session::MapSession;

use super::config::CliConfig;
use super::ViewArgs;

#[derive(Args)]
pub struct ProjectArgs {
    /// Raster file providing the georeference
    pub file: PathBuf,

    /// Longitude to project (requires --lat)
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Latitude to project (requires --lon)
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Screen X to unproject (requires --y)
    #[arg(long, requires = "y", conflicts_with = "lon", allow_hyphen_values = true)]
    pub x: Option<f64>,

    /// Screen Y to unproject (requires --x)
    #[arg(long, requires = "x", allow_hyphen_values = true)]
    pub y: Option<f64>,

    #[command(flatten)]
    pub view: ViewArgs,
}

pub fn run(args: &ProjectArgs, config: &CliConfig) -> Result<()> {
    let path = config.resolve(&args.file);
    let mut session = MapSession::new();
    session
        .load_raster_file(&path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    args.view.apply(&mut session);

    let Some(vt) = session.viewport_transform() else {
        anyhow::bail!("No georeference available");
    };

    match (args.lon, args.lat, args.x, args.y) {
        (Some(lon), Some(lat), _, _) => {
            let (px, py) = vt.geo().world_to_pixel(lon, lat);
            let (sx, sy) = vt.world_to_screen(lon, lat);
            println!("World:   {lon:.6}, {lat:.6} (lon, lat)");
            println!("Pixel:   {px}, {py}");
            println!("Screen:  {sx:.1}, {sy:.1}");
        }
        (_, _, Some(x), Some(y)) => {
            let (px, py) = vt.screen_to_pixel(x, y);
            let (lon, lat) = vt.screen_to_world(x, y);
            println!("Screen:  {x:.1}, {y:.1}");
            println!("Pixel:   {px:.2}, {py:.2}");
            println!("World:   {lon:.6}, {lat:.6} (lon, lat)");
        }
        _ => anyhow::bail!("Provide either --lon/--lat or --x/--y"),
    }

    Ok(())
}
