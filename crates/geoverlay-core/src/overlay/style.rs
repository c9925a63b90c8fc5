use serde::{Deserialize, Serialize};

use crate::viewport::GlyphSizes;

/// Colors and base glyph sizes used when composing the overlay.
///
/// Glyph sizes are given at zoom 1.0 and scale with the viewport zoom.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    /// RGBA fill of the feature markers.
    pub marker_color: [u8; 4],
    /// RGBA stroke of the bearing indicators.
    pub arrow_color: [u8; 4],
    /// RGB shown where the viewport is outside the raster.
    pub background: [u8; 3],
    pub glyphs: GlyphSizes,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            marker_color: [255, 0, 0, 200],
            arrow_color: [255, 255, 0, 200],
            background: [255, 255, 255],
            glyphs: GlyphSizes::default(),
        }
    }
}
