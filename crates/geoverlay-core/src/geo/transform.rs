use tracing::warn;

use crate::consts::{DEGENERATE_EPSILON, FALLBACK_PIXEL_SCALE, FALLBACK_TIEPOINT};
use crate::error::{GeoverlayError, Result};

/// Raw georeferencing metadata as read from a raster file.
#[derive(Clone, Debug, PartialEq)]
pub enum GeoreferenceTags {
    /// ModelTiepoint `[I, J, K, X, Y, Z]` plus ModelPixelScale `[SX, SY, SZ]`.
    TiePoint {
        tiepoint: Vec<f64>,
        pixel_scale: Vec<f64>,
    },
    /// Full affine coefficients `[a, b, c, d, e, f]`, as taken from a
    /// ModelTransformation matrix.
    Matrix([f64; 6]),
}

/// Geographic extent of a raster.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoBounds {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

/// Invertible affine map between raster pixel space and longitude/latitude.
///
/// ```text
/// lon = e + px * a + py * b
/// lat = f + px * c + py * d
/// ```
///
/// The 2x2 part `[[a, b], [c, d]]` is guaranteed non-singular: every
/// constructor rejects a determinant below [`DEGENERATE_EPSILON`], so the
/// inverse mapping never fails once a value exists.
///
/// Inverse results are rounded half-to-even (`f64::round_ties_even`), so a
/// world coordinate exactly between two pixel centres resolves to the even
/// pixel index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffineGeoTransform {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    f: f64,
}

impl AffineGeoTransform {
    /// Build from the full coefficient set.
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Result<Self> {
        if [a, b, c, d, e, f].iter().any(|v| !v.is_finite()) {
            return Err(GeoverlayError::InvalidGeoreference(format!(
                "non-finite coefficient in [{a}, {b}, {c}, {d}, {e}, {f}]"
            )));
        }
        let determinant = a * d - b * c;
        if !determinant.is_finite() || determinant.abs() < DEGENERATE_EPSILON {
            return Err(GeoverlayError::DegenerateTransform { determinant });
        }
        Ok(Self { a, b, c, d, e, f })
    }

    /// Build from a GeoTIFF tiepoint (index 3 = X origin, index 4 = Y origin)
    /// and pixel scale (index 0 = X size, index 1 = Y size).
    ///
    /// The Y scale is negated because raster rows grow downwards while
    /// latitude grows upwards.
    pub fn from_tiepoint_and_scale(tiepoint: &[f64], pixel_scale: &[f64]) -> Result<Self> {
        if tiepoint.len() < 6 {
            return Err(GeoverlayError::InvalidGeoreference(format!(
                "tiepoint needs 6 values, got {}",
                tiepoint.len()
            )));
        }
        if pixel_scale.len() < 2 {
            return Err(GeoverlayError::InvalidGeoreference(format!(
                "pixel scale needs at least 2 values, got {}",
                pixel_scale.len()
            )));
        }
        Self::new(
            pixel_scale[0],
            0.0,
            0.0,
            -pixel_scale[1],
            tiepoint[3],
            tiepoint[4],
        )
    }

    /// Build from raster tags, or from the fixed fallback georeference when
    /// the raster carries none.
    pub fn from_tags(tags: Option<&GeoreferenceTags>) -> Result<Self> {
        match tags {
            Some(GeoreferenceTags::TiePoint {
                tiepoint,
                pixel_scale,
            }) => Self::from_tiepoint_and_scale(tiepoint, pixel_scale),
            Some(GeoreferenceTags::Matrix([a, b, c, d, e, f])) => {
                Self::new(*a, *b, *c, *d, *e, *f)
            }
            None => {
                warn!("Raster has no georeference tags, using fallback transform");
                Ok(Self::fallback())
            }
        }
    }

    /// The degraded-mode georeference used for untagged rasters.
    pub fn fallback() -> Self {
        Self {
            a: FALLBACK_PIXEL_SCALE[0],
            b: 0.0,
            c: 0.0,
            d: -FALLBACK_PIXEL_SCALE[1],
            e: FALLBACK_TIEPOINT[3],
            f: FALLBACK_TIEPOINT[4],
        }
    }

    /// Coefficients in `[a, b, c, d, e, f]` order.
    pub fn coefficients(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }

    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// Longitude/latitude of the top-left corner of pixel (0, 0).
    pub fn origin(&self) -> (f64, f64) {
        (self.e, self.f)
    }

    /// Pixel index to `(lon, lat)`.
    pub fn pixel_to_world(&self, px: i64, py: i64) -> (f64, f64) {
        self.pixel_to_world_f(px as f64, py as f64)
    }

    /// Fractional pixel position to `(lon, lat)`.
    pub fn pixel_to_world_f(&self, px: f64, py: f64) -> (f64, f64) {
        let lon = self.e + px * self.a + py * self.b;
        let lat = self.f + px * self.c + py * self.d;
        (lon, lat)
    }

    /// `(lon, lat)` to the fractional pixel position, without rounding.
    pub fn world_to_pixel_f(&self, lon: f64, lat: f64) -> (f64, f64) {
        let det = self.determinant();
        let dx = lon - self.e;
        let dy = lat - self.f;
        let px = (dx * self.d - dy * self.b) / det;
        let py = (dy * self.a - dx * self.c) / det;
        (px, py)
    }

    /// `(lon, lat)` to the nearest pixel index, rounding half-to-even.
    pub fn world_to_pixel(&self, lon: f64, lat: f64) -> (i64, i64) {
        let (px, py) = self.world_to_pixel_f(lon, lat);
        (px.round_ties_even() as i64, py.round_ties_even() as i64)
    }

    /// World extent covered by a `width` x `height` raster.
    pub fn bounds(&self, width: u32, height: u32) -> GeoBounds {
        let (w, h) = (width as f64, height as f64);
        let corners = [
            self.pixel_to_world_f(0.0, 0.0),
            self.pixel_to_world_f(w, 0.0),
            self.pixel_to_world_f(0.0, h),
            self.pixel_to_world_f(w, h),
        ];

        let mut bounds = GeoBounds {
            min_lon: f64::INFINITY,
            min_lat: f64::INFINITY,
            max_lon: f64::NEG_INFINITY,
            max_lat: f64::NEG_INFINITY,
        };
        for (lon, lat) in corners {
            bounds.min_lon = bounds.min_lon.min(lon);
            bounds.min_lat = bounds.min_lat.min(lat);
            bounds.max_lon = bounds.max_lon.max(lon);
            bounds.max_lat = bounds.max_lat.max(lat);
        }
        bounds
    }
}
