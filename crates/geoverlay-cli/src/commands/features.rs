use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use geoverlay_core::io::geojson::load_features;

use super::config::CliConfig;

#[derive(Args)]
pub struct FeaturesArgs {
    /// GeoJSON feature collection
    pub file: PathBuf,
}

pub fn run(args: &FeaturesArgs, config: &CliConfig) -> Result<()> {
    let path = config.resolve(&args.file);
    let report =
        load_features(&path).with_context(|| format!("Failed to load {}", path.display()))?;

    crate::summary::print_feature_table(&report.features);

    for skipped in &report.skipped {
        eprintln!("Skipped feature #{}: {}", skipped.index, skipped.reason);
    }
    println!(
        "{} features loaded, {} skipped",
        report.features.len(),
        report.skipped_count()
    );

    Ok(())
}
