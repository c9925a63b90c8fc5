use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::error::{GeoverlayError, Result};
use crate::feature::PointFeature;

#[derive(Deserialize)]
struct GeoJsonDocument {
    features: Option<Vec<RawFeature>>,
}

#[derive(Deserialize)]
struct RawFeature {
    geometry: Option<RawGeometry>,
    #[serde(default)]
    properties: Option<RawProperties>,
}

#[derive(Deserialize)]
struct RawGeometry {
    coordinates: Option<Value>,
}

/// Property keys carry embedded spaces and are matched exactly.
#[derive(Default, Deserialize)]
struct RawProperties {
    #[serde(rename = "Signal Strength", default)]
    signal_strength: f64,
    #[serde(rename = "Altitude", default)]
    altitude: f64,
    #[serde(rename = "Date & Time", default)]
    date_time: String,
    #[serde(rename = "Frequency", default)]
    frequency: f64,
    #[serde(rename = "TN Bearing", default)]
    tn_bearing: f64,
}

/// A feature that was left out of the active set.
#[derive(Clone, Debug, PartialEq)]
pub struct SkippedFeature {
    /// Position of the feature in the document's `features` array.
    pub index: usize,
    pub reason: String,
}

/// Outcome of a successful feature load: the accepted features in file
/// order plus the ones that were rejected individually.
#[derive(Clone, Debug, Default)]
pub struct FeatureLoadReport {
    pub features: Vec<PointFeature>,
    pub skipped: Vec<SkippedFeature>,
}

impl FeatureLoadReport {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Read and parse a GeoJSON feature collection from disk.
pub fn load_features(path: &Path) -> Result<FeatureLoadReport> {
    let contents = std::fs::read_to_string(path)?;
    let report = parse_features(&contents)?;
    info!(
        path = %path.display(),
        features = report.features.len(),
        skipped = report.skipped_count(),
        "Features loaded"
    );
    Ok(report)
}

/// Parse a GeoJSON feature collection.
///
/// A missing or empty `features` array fails the whole load. A feature whose
/// coordinates are missing or are not exactly `[longitude, latitude]` is
/// skipped and recorded in the report.
pub fn parse_features(json: &str) -> Result<FeatureLoadReport> {
    let document: GeoJsonDocument = serde_json::from_str(json)?;

    let raw_features = match document.features {
        None => {
            return Err(GeoverlayError::InvalidFeatureDocument(
                "document has no `features` array".into(),
            ))
        }
        Some(f) if f.is_empty() => {
            return Err(GeoverlayError::InvalidFeatureDocument(
                "`features` array is empty".into(),
            ))
        }
        Some(f) => f,
    };

    let mut report = FeatureLoadReport::default();
    for (index, raw) in raw_features.into_iter().enumerate() {
        match convert_feature(raw) {
            Ok(feature) => report.features.push(feature),
            Err(reason) => {
                warn!(index, %reason, "Skipping feature");
                report.skipped.push(SkippedFeature { index, reason });
            }
        }
    }

    Ok(report)
}

fn convert_feature(raw: RawFeature) -> std::result::Result<PointFeature, String> {
    let coordinates = raw
        .geometry
        .and_then(|g| g.coordinates)
        .ok_or_else(|| "missing coordinates".to_string())?;
    let (longitude, latitude) = coordinate_pair(&coordinates)?;
    let props = raw.properties.unwrap_or_default();

    Ok(PointFeature {
        longitude,
        latitude,
        signal_strength: props.signal_strength,
        altitude: props.altitude,
        timestamp: props.date_time,
        frequency: props.frequency,
        bearing_degrees: props.tn_bearing,
    })
}

fn coordinate_pair(value: &Value) -> std::result::Result<(f64, f64), String> {
    let items = value
        .as_array()
        .ok_or_else(|| "coordinates is not an array".to_string())?;
    if items.len() != 2 {
        return Err(format!(
            "expected 2 coordinate components, got {}",
            items.len()
        ));
    }
    match (items[0].as_f64(), items[1].as_f64()) {
        (Some(lon), Some(lat)) => Ok((lon, lat)),
        _ => Err("coordinate components must be numbers".to_string()),
    }
}
