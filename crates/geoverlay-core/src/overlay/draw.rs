use image::{Rgba, RgbaImage};

/// Pixel-index range covering `[lo, hi]`, clipped to `[0, len)`.
fn clipped_span(lo: f64, hi: f64, len: u32) -> Option<(u32, u32)> {
    let start = lo.floor().max(0.0);
    let end = hi.ceil().min(len as f64 - 1.0);
    if !start.is_finite() || !end.is_finite() || start > end {
        return None;
    }
    Some((start as u32, end as u32))
}

/// Source-over compositing of `src` onto `dst` (straight alpha).
///
/// An opaque destination stays opaque.
pub(crate) fn blend_over(dst: &mut Rgba<u8>, src: &Rgba<u8>) {
    let sa = src[3] as f64 / 255.0;
    if sa >= 1.0 {
        *dst = *src;
        return;
    }
    if sa <= 0.0 {
        return;
    }
    let da = dst[3] as f64 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    for c in 0..3 {
        let mixed = (src[c] as f64 * sa + dst[c] as f64 * da * (1.0 - sa)) / out_a;
        dst[c] = mixed.round().clamp(0.0, 255.0) as u8;
    }
    dst[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
}

/// Alpha-blend a filled disc centred on `(cx, cy)`.
///
/// Pixels are sampled at their centres; at least the pixel containing the
/// centre is covered even for tiny radii.
pub(crate) fn fill_circle(canvas: &mut RgbaImage, cx: f64, cy: f64, radius: f64, color: Rgba<u8>) {
    let r = radius.max(0.5);
    let Some((x0, x1)) = clipped_span(cx - r, cx + r, canvas.width()) else {
        return;
    };
    let Some((y0, y1)) = clipped_span(cy - r, cy + r, canvas.height()) else {
        return;
    };

    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f64 + 0.5 - cx;
            let dy = y as f64 + 0.5 - cy;
            if dx * dx + dy * dy <= r * r {
                blend_over(canvas.get_pixel_mut(x, y), &color);
            }
        }
    }
}

/// Alpha-blend a straight stroke of the given width. Every covered pixel is
/// blended exactly once.
pub(crate) fn draw_line(
    canvas: &mut RgbaImage,
    from: (f64, f64),
    to: (f64, f64),
    width: f64,
    color: Rgba<u8>,
) {
    let half = (width / 2.0).max(0.5);
    let Some((x0, x1)) = clipped_span(from.0.min(to.0) - half, from.0.max(to.0) + half, canvas.width())
    else {
        return;
    };
    let Some((y0, y1)) = clipped_span(from.1.min(to.1) - half, from.1.max(to.1) + half, canvas.height())
    else {
        return;
    };

    for y in y0..=y1 {
        for x in x0..=x1 {
            let p = (x as f64 + 0.5, y as f64 + 0.5);
            if distance_to_segment(p, from, to) <= half {
                blend_over(canvas.get_pixel_mut(x, y), &color);
            }
        }
    }
}

fn distance_to_segment(p: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
    let (abx, aby) = (b.0 - a.0, b.1 - a.1);
    let len_sq = abx * abx + aby * aby;
    let t = if len_sq > 0.0 {
        (((p.0 - a.0) * abx + (p.1 - a.1) * aby) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (qx, qy) = (a.0 + t * abx, a.1 + t * aby);
    ((p.0 - qx).powi(2) + (p.1 - qy).powi(2)).sqrt()
}
