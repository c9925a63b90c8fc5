use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use geoverlay_core::geo::AffineGeoTransform;
use geoverlay_core::io::raster::load_raster;

use super::config::CliConfig;

#[derive(Args)]
pub struct InfoArgs {
    /// Raster file (GeoTIFF, TIFF, PNG, ...)
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs, config: &CliConfig) -> Result<()> {
    let path = config.resolve(&args.file);
    let source =
        load_raster(&path).with_context(|| format!("Failed to load {}", path.display()))?;
    let transform = AffineGeoTransform::from_tags(source.georeference.as_ref())?;

    println!("File:          {}", path.display());
    println!("Dimensions:    {}x{}", source.width(), source.height());
    println!(
        "Georeference:  {}",
        if source.georeference.is_some() {
            "GeoTIFF tags"
        } else {
            "fallback (no tags)"
        }
    );

    let (lon, lat) = transform.origin();
    println!("Origin:        {:.6}, {:.6} (lon, lat)", lon, lat);

    let [a, b, c, d, e, f] = transform.coefficients();
    println!("Coefficients:  a={a} b={b} c={c} d={d} e={e} f={f}");

    let bounds = transform.bounds(source.width(), source.height());
    println!(
        "Longitude:     {:.6} .. {:.6}",
        bounds.min_lon, bounds.max_lon
    );
    println!(
        "Latitude:      {:.6} .. {:.6}",
        bounds.min_lat, bounds.max_lat
    );

    Ok(())
}
