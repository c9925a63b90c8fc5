use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::feature::PointFeature;
use crate::overlay::draw::{blend_over, draw_line, fill_circle};
use crate::overlay::style::OverlayStyle;
use crate::viewport::ViewportTransform;

/// End of a bearing indicator of `length` pixels starting at `origin`.
///
/// Bearings follow the navigation convention (0° = north, clockwise).
/// Screen Y grows downwards, so north is towards smaller Y.
pub fn bearing_endpoint(origin: (f64, f64), bearing_degrees: f64, length: f64) -> (f64, f64) {
    let angle = (90.0 - bearing_degrees).to_radians();
    (
        origin.0 + length * angle.cos(),
        origin.1 - length * angle.sin(),
    )
}

/// Compose the raster and the feature overlay into a new `canvas_size`
/// surface as seen through `viewport`.
///
/// `base` is never modified, so it can be re-rendered under any number of
/// zoom/pan states. Features whose screen position falls outside the
/// surface are not drawn.
pub fn render(
    base: &RgbaImage,
    features: &[PointFeature],
    viewport: &ViewportTransform,
    style: &OverlayStyle,
    canvas_size: (u32, u32),
) -> RgbaImage {
    let (width, height) = canvas_size;
    let mut canvas = paint_base_layer(base, viewport, style, canvas_size);

    let glyphs = style.glyphs.scaled(viewport.state().zoom_scale());
    let marker = Rgba(style.marker_color);
    let arrow = Rgba(style.arrow_color);

    let mut drawn = 0usize;
    for feature in features {
        let (sx, sy) = viewport.world_to_screen(feature.longitude, feature.latitude);
        if sx < 0.0 || sy < 0.0 || sx >= width as f64 || sy >= height as f64 {
            continue;
        }

        fill_circle(&mut canvas, sx, sy, glyphs.point_diameter / 2.0, marker);
        let tip = bearing_endpoint((sx, sy), feature.bearing_degrees, glyphs.arrow_length);
        draw_line(&mut canvas, (sx, sy), tip, glyphs.line_width, arrow);
        drawn += 1;
    }

    debug!(
        total = features.len(),
        drawn,
        width,
        height,
        "Overlay rendered"
    );
    canvas
}

/// Nearest-neighbour resample of the raster under the viewport. Screen
/// pixels that map outside the raster keep the background color.
fn paint_base_layer(
    base: &RgbaImage,
    viewport: &ViewportTransform,
    style: &OverlayStyle,
    (width, height): (u32, u32),
) -> RgbaImage {
    let [r, g, b] = style.background;
    let mut canvas = RgbaImage::from_pixel(width, height, Rgba([r, g, b, 255]));
    let (base_w, base_h) = (base.width() as f64, base.height() as f64);

    for sy in 0..height {
        for sx in 0..width {
            let (px, py) = viewport.screen_to_pixel(sx as f64 + 0.5, sy as f64 + 0.5);
            let (px, py) = (px.floor(), py.floor());
            if px < 0.0 || py < 0.0 || px >= base_w || py >= base_h {
                continue;
            }
            let src = base.get_pixel(px as u32, py as u32);
            blend_over(canvas.get_pixel_mut(sx, sy), src);
        }
    }

    canvas
}
