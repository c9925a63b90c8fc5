use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{
    BASE_ARROW_LENGTH, BASE_LINE_WIDTH, BASE_POINT_DIAMETER, BUTTON_ZOOM_IN, BUTTON_ZOOM_OUT,
    MAX_ZOOM, MIN_ZOOM, WHEEL_ZOOM_IN, WHEEL_ZOOM_OUT,
};
use crate::geo::AffineGeoTransform;

/// Direction of a discrete zoom button press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomStep {
    In,
    Out,
}

impl ZoomStep {
    /// Multiplicative factor of a zoom button press.
    pub fn button_factor(self) -> f64 {
        match self {
            Self::In => BUTTON_ZOOM_IN,
            Self::Out => BUTTON_ZOOM_OUT,
        }
    }

    /// Multiplicative factor of one mouse-wheel notch.
    pub fn wheel_factor(self) -> f64 {
        match self {
            Self::In => WHEEL_ZOOM_IN,
            Self::Out => WHEEL_ZOOM_OUT,
        }
    }
}

/// User-controlled zoom and pan.
///
/// The zoom scale always lies in `[MIN_ZOOM, MAX_ZOOM]`. The pan offset is
/// unbounded: panning far away from the raster is allowed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    zoom_scale: f64,
    pan_offset: (f64, f64),
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            zoom_scale: 1.0,
            pan_offset: (0.0, 0.0),
        }
    }
}

impl ViewportState {
    pub fn zoom_scale(&self) -> f64 {
        self.zoom_scale
    }

    pub fn pan_offset(&self) -> (f64, f64) {
        self.pan_offset
    }

    /// Back to zoom 1.0 with no pan.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Multiply the zoom scale by `factor`, clamped to the allowed range.
    pub fn zoom_by(&mut self, factor: f64) {
        self.set_zoom(self.zoom_scale * factor);
    }

    /// Set the zoom scale directly, clamped to the allowed range.
    pub fn set_zoom(&mut self, scale: f64) {
        if !scale.is_finite() {
            return;
        }
        self.zoom_scale = scale.clamp(MIN_ZOOM, MAX_ZOOM);
        debug!(zoom = self.zoom_scale, "Viewport zoom changed");
    }

    /// Apply a mouse-wheel delta: positive zooms in, negative zooms out,
    /// zero is ignored.
    pub fn zoom_wheel(&mut self, delta: f64) {
        if delta > 0.0 {
            self.zoom_by(ZoomStep::In.wheel_factor());
        } else if delta < 0.0 {
            self.zoom_by(ZoomStep::Out.wheel_factor());
        }
    }

    pub fn zoom_button(&mut self, step: ZoomStep) {
        self.zoom_by(step.button_factor());
    }

    /// Shift the pan offset by a drag delta in screen pixels.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_offset.0 += dx;
        self.pan_offset.1 += dy;
    }

    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_offset = (x, y);
    }

    /// Overlay glyph sizes for the current zoom.
    pub fn glyph_sizes(&self) -> GlyphSizes {
        GlyphSizes::default().scaled(self.zoom_scale)
    }
}

/// Marker and bearing-indicator dimensions, in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphSizes {
    pub point_diameter: f64,
    pub arrow_length: f64,
    pub line_width: f64,
}

impl Default for GlyphSizes {
    fn default() -> Self {
        Self {
            point_diameter: BASE_POINT_DIAMETER,
            arrow_length: BASE_ARROW_LENGTH,
            line_width: BASE_LINE_WIDTH,
        }
    }
}

impl GlyphSizes {
    /// Scale every dimension proportionally to `zoom`.
    pub fn scaled(&self, zoom: f64) -> Self {
        Self {
            point_diameter: self.point_diameter * zoom,
            arrow_length: self.arrow_length * zoom,
            line_width: self.line_width * zoom,
        }
    }
}

/// Georeference composed with the current zoom and pan.
///
/// Cheap to build; rebuild it after every zoom or pan change.
#[derive(Clone, Copy, Debug)]
pub struct ViewportTransform {
    geo: AffineGeoTransform,
    state: ViewportState,
}

impl ViewportTransform {
    pub fn new(geo: AffineGeoTransform, state: ViewportState) -> Self {
        Self { geo, state }
    }

    pub fn geo(&self) -> &AffineGeoTransform {
        &self.geo
    }

    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    /// Screen position of a world coordinate: the rounded raster pixel,
    /// scaled by zoom, then shifted by pan.
    pub fn world_to_screen(&self, lon: f64, lat: f64) -> (f64, f64) {
        let (px, py) = self.geo.world_to_pixel(lon, lat);
        self.pixel_to_screen(px as f64, py as f64)
    }

    /// Screen position of a (possibly fractional) raster pixel.
    pub fn pixel_to_screen(&self, px: f64, py: f64) -> (f64, f64) {
        let zoom = self.state.zoom_scale;
        let (pan_x, pan_y) = self.state.pan_offset;
        (px * zoom + pan_x, py * zoom + pan_y)
    }

    /// Raster pixel (fractional) under a screen position.
    pub fn screen_to_pixel(&self, sx: f64, sy: f64) -> (f64, f64) {
        let zoom = self.state.zoom_scale;
        let (pan_x, pan_y) = self.state.pan_offset;
        ((sx - pan_x) / zoom, (sy - pan_y) / zoom)
    }

    /// World coordinate under a screen position.
    pub fn screen_to_world(&self, sx: f64, sy: f64) -> (f64, f64) {
        let (px, py) = self.screen_to_pixel(sx, sy);
        self.geo.pixel_to_world_f(px, py)
    }
}
