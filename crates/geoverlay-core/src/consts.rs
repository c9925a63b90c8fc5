/// Minimum |determinant| of the 2x2 georeference submatrix.
pub const DEGENERATE_EPSILON: f64 = 1e-10;

/// Tiepoint used when a raster carries no georeferencing tags.
/// Layout: [I, J, K, X (longitude), Y (latitude), Z].
pub const FALLBACK_TIEPOINT: [f64; 6] = [0.0, 0.0, 0.0, -27.664135, 31.994103, 0.0];

/// Pixel scale used when a raster carries no georeferencing tags (degrees per pixel).
pub const FALLBACK_PIXEL_SCALE: [f64; 3] = [0.001, 0.001, 0.0];

/// GeoTIFF ModelPixelScaleTag.
pub const TAG_MODEL_PIXEL_SCALE: u16 = 33550;

/// GeoTIFF ModelTiepointTag.
pub const TAG_MODEL_TIEPOINT: u16 = 33922;

/// GeoTIFF ModelTransformationTag (row-major 4x4 matrix).
pub const TAG_MODEL_TRANSFORMATION: u16 = 34264;

/// Lower bound of the viewport zoom scale.
pub const MIN_ZOOM: f64 = 0.1;

/// Upper bound of the viewport zoom scale.
pub const MAX_ZOOM: f64 = 5.0;

/// Zoom factor applied per mouse-wheel notch towards the user.
pub const WHEEL_ZOOM_IN: f64 = 1.1;

/// Zoom factor applied per mouse-wheel notch away from the user.
pub const WHEEL_ZOOM_OUT: f64 = 0.9;

/// Zoom factor of the "zoom in" button.
pub const BUTTON_ZOOM_IN: f64 = 1.2;

/// Zoom factor of the "zoom out" button.
pub const BUTTON_ZOOM_OUT: f64 = 0.8;

/// Half-width of the square hit-test window, in screen pixels.
pub const HIT_TOLERANCE_PX: f64 = 10.0;

/// Marker diameter at zoom 1.0, in screen pixels.
pub const BASE_POINT_DIAMETER: f64 = 10.0;

/// Bearing indicator length at zoom 1.0, in screen pixels.
pub const BASE_ARROW_LENGTH: f64 = 20.0;

/// Bearing indicator stroke width at zoom 1.0, in screen pixels.
pub const BASE_LINE_WIDTH: f64 = 2.0;
