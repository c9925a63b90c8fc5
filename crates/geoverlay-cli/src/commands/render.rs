use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use geoverlay_core::session::MapSession;

use super::config::CliConfig;
use super::ViewArgs;

#[derive(Args)]
pub struct RenderArgs {
    /// Raster file (GeoTIFF, TIFF, PNG, ...)
    pub raster: PathBuf,

    /// GeoJSON feature collection
    pub features: PathBuf,

    #[command(flatten)]
    pub view: ViewArgs,

    /// Output width in pixels (defaults to the raster width)
    #[arg(long, requires = "height")]
    pub width: Option<u32>,

    /// Output height in pixels (defaults to the raster height)
    #[arg(long, requires = "width")]
    pub height: Option<u32>,

    /// Output file path
    #[arg(short, long, default_value = "overlay.png")]
    pub output: PathBuf,
}

/// Largest composed bitmap accepted, in bytes of RGBA8 data.
const MAX_CANVAS_BYTES: u64 = 1 << 30;

fn canvas_size(width: Option<u32>, height: Option<u32>) -> Result<Option<(u32, u32)>> {
    let (Some(w), Some(h)) = (width, height) else {
        return Ok(None);
    };
    if w == 0 || h == 0 {
        anyhow::bail!("Output dimensions must be > 0");
    }
    let bytes = w as u64 * h as u64 * 4;
    if bytes > MAX_CANVAS_BYTES {
        anyhow::bail!(
            "Output {w}x{h} needs {} MiB, limit is {} MiB",
            bytes >> 20,
            MAX_CANVAS_BYTES >> 20
        );
    }
    Ok(Some((w, h)))
}

pub fn run(args: &RenderArgs, config: &CliConfig) -> Result<()> {
    let raster_path = config.resolve(&args.raster);
    let features_path = config.resolve(&args.features);

    let mut session = MapSession::new();
    session
        .load_raster_file(&raster_path)
        .with_context(|| format!("Failed to load {}", raster_path.display()))?;
    let outcome = session
        .load_features_file(&features_path)
        .with_context(|| format!("Failed to load {}", features_path.display()))?;
    args.view.apply(&mut session);

    let canvas = canvas_size(args.width, args.height)?;

    crate::summary::print_render_summary(&raster_path, &features_path, &outcome, &session);

    let composed = session.render(&config.style, canvas)?;
    composed
        .save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    println!("Saved to {}", args.output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_defaults_to_raster_size() {
        assert_eq!(canvas_size(None, None).unwrap(), None);
    }

    #[test]
    fn test_canvas_rejects_zero_and_oversized() {
        assert!(canvas_size(Some(0), Some(10)).is_err());
        assert!(canvas_size(Some(100_000), Some(100_000)).is_err());
        assert_eq!(canvas_size(Some(800), Some(600)).unwrap(), Some((800, 600)));
        assert_eq!(
            canvas_size(Some(16_384), Some(16_384)).unwrap(),
            Some((16_384, 16_384))
        );
    }
}
