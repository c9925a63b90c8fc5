use std::io::{Cursor, Read, Seek};
use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};
use tiff::decoder::ifd::Value;
use tiff::decoder::Decoder;
use tiff::tags::Tag;
use tracing::{debug, info};

use crate::consts::{TAG_MODEL_PIXEL_SCALE, TAG_MODEL_TIEPOINT, TAG_MODEL_TRANSFORMATION};
use crate::error::{GeoverlayError, Result};
use crate::geo::GeoreferenceTags;

/// A decoded raster plus whatever georeferencing it carried.
#[derive(Clone, Debug)]
pub struct RasterSource {
    pub image: RgbaImage,
    pub georeference: Option<GeoreferenceTags>,
}

impl RasterSource {
    pub fn from_image(image: DynamicImage, georeference: Option<GeoreferenceTags>) -> Self {
        Self {
            image: image.to_rgba8(),
            georeference,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Load a raster file. Pixel decoding is left to the `image` crate; GeoTIFF
/// tags are only looked for when the content is TIFF.
pub fn load_raster(path: &Path) -> Result<RasterSource> {
    let bytes = std::fs::read(path)?;
    let source = decode_raster(&bytes)?;
    info!(
        path = %path.display(),
        width = source.width(),
        height = source.height(),
        georeferenced = source.georeference.is_some(),
        "Raster loaded"
    );
    Ok(source)
}

/// Decode an in-memory raster, same as [`load_raster`].
pub fn decode_raster(bytes: &[u8]) -> Result<RasterSource> {
    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    let format = reader.format();
    let image = reader.decode()?;

    let georeference = match format {
        Some(ImageFormat::Tiff) => read_georeference_tags(Cursor::new(bytes))?,
        _ => None,
    };

    Ok(RasterSource::from_image(image, georeference))
}

/// Read GeoTIFF georeferencing from the first image directory.
///
/// Tiepoint + pixel scale wins over a transformation matrix. Returns `None`
/// when neither complete set is present.
pub fn read_georeference_tags<R: Read + Seek>(reader: R) -> Result<Option<GeoreferenceTags>> {
    let mut decoder = Decoder::new(reader)?;

    let scale = find_f64_tag(&mut decoder, TAG_MODEL_PIXEL_SCALE)?;
    let tiepoint = find_f64_tag(&mut decoder, TAG_MODEL_TIEPOINT)?;
    if let (Some(pixel_scale), Some(tiepoint)) = (scale, tiepoint) {
        debug!(?tiepoint, ?pixel_scale, "Found tiepoint georeference");
        return Ok(Some(GeoreferenceTags::TiePoint {
            tiepoint,
            pixel_scale,
        }));
    }

    if let Some(m) = find_f64_tag(&mut decoder, TAG_MODEL_TRANSFORMATION)? {
        if m.len() >= 16 {
            // Row-major 4x4: lon = m[3] + px*m[0] + py*m[1], lat = m[7] + px*m[4] + py*m[5]
            debug!("Found transformation-matrix georeference");
            return Ok(Some(GeoreferenceTags::Matrix([
                m[0], m[1], m[4], m[5], m[3], m[7],
            ])));
        }
    }

    Ok(None)
}

/// Tag values stored as DOUBLE or FLOAT, widened to f64.
fn find_f64_tag<R: Read + Seek>(decoder: &mut Decoder<R>, tag: u16) -> Result<Option<Vec<f64>>> {
    let Some(value) = decoder.find_tag(Tag::from_u16_exhaustive(tag))? else {
        return Ok(None);
    };
    let values = match value {
        Value::List(items) => items.into_iter().map(scalar_as_f64).collect(),
        other => scalar_as_f64(other).map(|v| vec![v]),
    };
    values.map(Some).ok_or_else(|| {
        GeoverlayError::InvalidGeoreference(format!("tag {tag} does not hold floating-point values"))
    })
}

fn scalar_as_f64(value: Value) -> Option<f64> {
    match value {
        Value::Double(v) => Some(v),
        Value::Float(v) => Some(f64::from(v)),
        _ => None,
    }
}
