use std::path::Path;

use console::Style;
use geoverlay_core::feature::PointFeature;
use geoverlay_core::session::{FeatureLoadOutcome, MapSession};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    warning: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            warning: Style::new().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_render_summary(
    raster: &Path,
    features: &Path,
    outcome: &FeatureLoadOutcome,
    session: &MapSession,
) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Geoverlay Render"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(16)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Raster"),
        s.path.apply_to(raster.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Features"),
        s.path.apply_to(features.display())
    );

    let mut counts = format!("{} loaded", outcome.accepted);
    if !outcome.skipped.is_empty() {
        counts = format!(
            "{counts}, {}",
            s.warning
                .apply_to(format!("{} skipped", outcome.skipped.len()))
        );
    }
    println!("  {:<14}{}", s.label.apply_to("Points"), counts);

    let viewport = session.viewport();
    let (pan_x, pan_y) = viewport.pan_offset();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Zoom"),
        s.value.apply_to(format!("{:.2}x", viewport.zoom_scale()))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Pan"),
        s.value.apply_to(format!("{pan_x:.1}, {pan_y:.1}"))
    );

    if let Some(t) = session.transform() {
        let (lon, lat) = t.origin();
        println!(
            "  {:<14}{}",
            s.label.apply_to("Origin"),
            s.value.apply_to(format!("{lon:.6}, {lat:.6}"))
        );
    }
    println!();
}

pub fn print_feature_table(features: &[PointFeature]) {
    let s = Styles::new();

    println!(
        "{}",
        s.header.apply_to(format!(
            "{:>4}  {:>11}  {:>11}  {:>8}  {:>9}  {:<20}  {:>9}  {:>7}",
            "#", "Latitude", "Longitude", "Signal", "Altitude", "Date & Time", "Frequency", "Bearing"
        ))
    );
    for (i, f) in features.iter().enumerate() {
        println!(
            "{:>4}  {:>11.6}  {:>11.6}  {:>8.2}  {:>9.1}  {:<20}  {:>9.3}  {:>7.1}",
            i,
            f.latitude,
            f.longitude,
            f.signal_strength,
            f.altitude,
            f.timestamp,
            f.frequency,
            f.bearing_degrees
        );
    }
}
