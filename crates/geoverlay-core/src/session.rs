use std::path::Path;

use image::RgbaImage;
use tracing::info;

use crate::error::{GeoverlayError, Result};
use crate::feature::PointFeature;
use crate::geo::AffineGeoTransform;
use crate::io::geojson::{self, FeatureLoadReport, SkippedFeature};
use crate::io::raster::{self, RasterSource};
use crate::overlay::{self, HitTestResult, OverlayStyle, PointerFeedback};
use crate::viewport::{ViewportState, ViewportTransform, ZoomStep};

/// Summary handed back after the active feature set was replaced.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureLoadOutcome {
    pub accepted: usize,
    pub skipped: Vec<SkippedFeature>,
}

struct LoadedRaster {
    image: RgbaImage,
    transform: AffineGeoTransform,
}

/// Everything one map view owns: the base raster and its georeference,
/// the viewport, the active feature set and the pan-drag anchor.
///
/// All operations run synchronously on the caller's thread.
#[derive(Default)]
pub struct MapSession {
    raster: Option<LoadedRaster>,
    viewport: ViewportState,
    features: Vec<PointFeature>,
    drag_anchor: Option<(f64, f64)>,
}

impl MapSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a decoded raster. The georeference comes from its tags, or
    /// from the fallback transform when it has none. The viewport is reset.
    pub fn load_raster(&mut self, source: RasterSource) -> Result<&AffineGeoTransform> {
        let transform = AffineGeoTransform::from_tags(source.georeference.as_ref())?;
        self.viewport.reset();
        self.drag_anchor = None;
        let loaded = self.raster.insert(LoadedRaster {
            image: source.image,
            transform,
        });
        Ok(&loaded.transform)
    }

    pub fn load_raster_file(&mut self, path: &Path) -> Result<&AffineGeoTransform> {
        let source = raster::load_raster(path)?;
        self.load_raster(source)
    }

    /// Parse a GeoJSON document and, on success, replace the active set.
    /// On failure the previous set stays in place.
    pub fn load_features(&mut self, json: &str) -> Result<FeatureLoadOutcome> {
        let report = geojson::parse_features(json)?;
        Ok(self.replace_features(report))
    }

    pub fn load_features_file(&mut self, path: &Path) -> Result<FeatureLoadOutcome> {
        let report = geojson::load_features(path)?;
        Ok(self.replace_features(report))
    }

    fn replace_features(&mut self, report: FeatureLoadReport) -> FeatureLoadOutcome {
        let outcome = FeatureLoadOutcome {
            accepted: report.features.len(),
            skipped: report.skipped,
        };
        self.features = report.features;
        info!(
            accepted = outcome.accepted,
            skipped = outcome.skipped.len(),
            "Active feature set replaced"
        );
        outcome
    }

    pub fn features(&self) -> &[PointFeature] {
        &self.features
    }

    pub fn transform(&self) -> Option<&AffineGeoTransform> {
        self.raster.as_ref().map(|r| &r.transform)
    }

    pub fn base_image(&self) -> Option<&RgbaImage> {
        self.raster.as_ref().map(|r| &r.image)
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut ViewportState {
        &mut self.viewport
    }

    /// Current georeference + viewport composition, if a raster is loaded.
    pub fn viewport_transform(&self) -> Option<ViewportTransform> {
        self.transform()
            .map(|t| ViewportTransform::new(*t, self.viewport))
    }

    pub fn zoom_wheel(&mut self, delta: f64) {
        self.viewport.zoom_wheel(delta);
    }

    pub fn zoom_button(&mut self, step: ZoomStep) {
        self.viewport.zoom_button(step);
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.viewport.pan_by(dx, dy);
    }

    pub fn begin_drag(&mut self, x: f64, y: f64) {
        self.drag_anchor = Some((x, y));
    }

    /// Pan by the pointer movement since the previous drag position.
    /// Ignored when no drag is in progress.
    pub fn drag_to(&mut self, x: f64, y: f64) {
        if let Some((ax, ay)) = self.drag_anchor {
            self.viewport.pan_by(x - ax, y - ay);
            self.drag_anchor = Some((x, y));
        }
    }

    pub fn end_drag(&mut self) {
        self.drag_anchor = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Feature under a screen position. No raster means no match.
    pub fn hit_test(&self, x: f64, y: f64) -> HitTestResult<'_> {
        match self.viewport_transform() {
            Some(vt) => overlay::hit_test(x, y, &self.features, &vt),
            None => HitTestResult::NoMatch,
        }
    }

    /// Click selection.
    pub fn click(&self, x: f64, y: f64) -> HitTestResult<'_> {
        self.hit_test(x, y)
    }

    /// Hover feedback for a pointer move. Recomputed from scratch each call,
    /// so leaving a feature resets the cursor and tooltip.
    pub fn pointer_moved(&self, x: f64, y: f64) -> PointerFeedback {
        if self.is_dragging() {
            return overlay::pointer_feedback(&HitTestResult::NoMatch, true);
        }
        overlay::pointer_feedback(&self.hit_test(x, y), false)
    }

    /// Compose the current view. `canvas` defaults to the raster size.
    ///
    /// The returned image is owned by the caller; dropping the previous one
    /// releases it.
    pub fn render(&self, style: &OverlayStyle, canvas: Option<(u32, u32)>) -> Result<RgbaImage> {
        let raster = self.raster.as_ref().ok_or(GeoverlayError::NoRasterLoaded)?;
        let vt = ViewportTransform::new(raster.transform, self.viewport);
        let size = canvas.unwrap_or_else(|| raster.image.dimensions());
        Ok(overlay::render(&raster.image, &self.features, &vt, style, size))
    }
}
