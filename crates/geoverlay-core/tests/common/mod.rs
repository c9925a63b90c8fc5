#![allow(dead_code)]

use std::path::Path;

use geoverlay_core::feature::PointFeature;
use geoverlay_core::geo::AffineGeoTransform;
use serde_json::{json, Value};

/// Tiepoint used by most fixtures: origin at 30°E, 25°S.
pub const TEST_TIEPOINT: [f64; 6] = [0.0, 0.0, 0.0, 30.0, -25.0, 0.0];

/// 0.01° per pixel in both directions.
pub const TEST_PIXEL_SCALE: [f64; 3] = [0.01, 0.01, 0.0];

pub fn test_transform() -> AffineGeoTransform {
    AffineGeoTransform::from_tiepoint_and_scale(&TEST_TIEPOINT, &TEST_PIXEL_SCALE)
        .expect("test transform is non-degenerate")
}

/// Build a feature located exactly over raster pixel `(px, py)`.
pub fn feature_at_pixel(
    transform: &AffineGeoTransform,
    px: i64,
    py: i64,
    bearing: f64,
) -> PointFeature {
    let (longitude, latitude) = transform.pixel_to_world(px, py);
    PointFeature {
        longitude,
        latitude,
        signal_strength: -70.0,
        altitude: 1200.0,
        timestamp: format!("2024-05-01 12:00:{:02}", px.rem_euclid(60)),
        frequency: 433.92,
        bearing_degrees: bearing,
    }
}

/// A GeoJSON point feature with the full property set.
pub fn geojson_feature(coordinates: Value, bearing: f64) -> Value {
    json!({
        "type": "Feature",
        "geometry": { "type": "Point", "coordinates": coordinates },
        "properties": {
            "Signal Strength": -65.5,
            "Altitude": 1450.0,
            "Date & Time": "2024-05-01 08:30:00",
            "Frequency": 145.5,
            "TN Bearing": bearing
        }
    })
}

pub fn feature_collection(features: Vec<Value>) -> String {
    json!({ "type": "FeatureCollection", "features": features }).to_string()
}

/// Write a small 8-bit grayscale TIFF carrying the given raw f64 tags.
pub fn write_geotiff(path: &Path, width: u32, height: u32, tags: &[(u16, Vec<f64>)]) {
    let tags: Vec<(u16, &[f64])> = tags.iter().map(|(t, v)| (*t, v.as_slice())).collect();
    write_geotiff_with(path, width, height, &tags);
}

/// Same as [`write_geotiff`], for tags of any TIFF value type.
pub fn write_geotiff_with<T>(path: &Path, width: u32, height: u32, tags: &[(u16, T)])
where
    T: tiff::encoder::TiffValue + Copy,
{
    use tiff::encoder::{colortype::Gray8, TiffEncoder};
    use tiff::tags::Tag;

    let file = std::fs::File::create(path).expect("create tiff");
    let mut encoder = TiffEncoder::new(file).expect("tiff encoder");
    let mut image = encoder
        .new_image::<Gray8>(width, height)
        .expect("tiff image");
    for (tag, values) in tags {
        image
            .encoder()
            .write_tag(Tag::Unknown(*tag), *values)
            .expect("write tag");
    }
    let data: Vec<u8> = (0..width * height).map(|i| (i % 251) as u8).collect();
    image.write_data(&data).expect("write tiff data");
}

/// Write text content to a temporary file with the given suffix.
pub fn write_temp_text(contents: &str, suffix: &str) -> tempfile::NamedTempFile {
    use std::io::Write;
    let mut f = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    f.write_all(contents.as_bytes()).expect("write temp file");
    f.flush().expect("flush");
    f
}
