mod common;

use approx::assert_relative_eq;

use geoverlay_core::consts::{FALLBACK_PIXEL_SCALE, FALLBACK_TIEPOINT};
use geoverlay_core::error::GeoverlayError;
use geoverlay_core::geo::{AffineGeoTransform, GeoreferenceTags};

use common::{test_transform, TEST_PIXEL_SCALE, TEST_TIEPOINT};

#[test]
fn test_coefficients_from_tiepoint_and_scale() {
    let t = test_transform();
    let [a, b, c, d, e, f] = t.coefficients();
    assert_eq!(a, 0.01);
    assert_eq!(b, 0.0);
    assert_eq!(c, 0.0);
    assert_eq!(d, -0.01);
    assert_eq!(e, 30.0);
    assert_eq!(f, -25.0);
}

#[test]
fn test_pixel_to_world_origin_and_offsets() {
    let t = test_transform();
    let (lon, lat) = t.pixel_to_world(0, 0);
    assert_relative_eq!(lon, 30.0);
    assert_relative_eq!(lat, -25.0);

    // Latitude decreases as rows increase.
    let (lon, lat) = t.pixel_to_world(100, 50);
    assert_relative_eq!(lon, 31.0, epsilon = 1e-9);
    assert_relative_eq!(lat, -25.5, epsilon = 1e-9);
}

#[test]
fn test_world_to_pixel_round_trip() {
    let t = test_transform();
    for py in (-40..400).step_by(17) {
        for px in (-40..400).step_by(13) {
            let (lon, lat) = t.pixel_to_world(px, py);
            assert_eq!(t.world_to_pixel(lon, lat), (px, py));
        }
    }
}

#[test]
fn test_round_trip_with_rotation() {
    let t = AffineGeoTransform::new(0.002, 0.0005, -0.0003, -0.0021, 18.4, -33.9).unwrap();
    for py in (0..300).step_by(7) {
        for px in (0..300).step_by(11) {
            let (lon, lat) = t.pixel_to_world(px, py);
            assert_eq!(t.world_to_pixel(lon, lat), (px, py));
        }
    }
}

#[test]
fn test_world_to_pixel_rounds_half_to_even() {
    let t = AffineGeoTransform::from_tiepoint_and_scale(&[0.0, 0.0, 0.0, 0.0, 0.0, 0.0], &[1.0, 1.0])
        .unwrap();
    assert_eq!(t.world_to_pixel(2.5, -0.5), (2, 0));
    assert_eq!(t.world_to_pixel(3.5, -1.5), (4, 2));
    assert_eq!(t.world_to_pixel(2.6, -0.4), (3, 0));
}

#[test]
fn test_fractional_inverse_is_exact() {
    let t = test_transform();
    let (px, py) = t.world_to_pixel_f(30.125, -25.0375);
    assert_relative_eq!(px, 12.5, epsilon = 1e-9);
    assert_relative_eq!(py, 3.75, epsilon = 1e-9);
}

#[test]
fn test_zero_pixel_scale_is_degenerate() {
    let err = AffineGeoTransform::from_tiepoint_and_scale(&TEST_TIEPOINT, &[0.0, 0.0, 0.0])
        .unwrap_err();
    assert!(matches!(err, GeoverlayError::DegenerateTransform { .. }));
}

#[test]
fn test_singular_matrix_is_degenerate() {
    // Second row is a multiple of the first.
    let err = AffineGeoTransform::new(1.0, 2.0, 2.0, 4.0, 0.0, 0.0).unwrap_err();
    assert!(matches!(err, GeoverlayError::DegenerateTransform { .. }));
}

#[test]
fn test_tiny_determinant_is_degenerate() {
    let err = AffineGeoTransform::new(1e-6, 0.0, 0.0, -1e-6, 0.0, 0.0).unwrap_err();
    assert!(matches!(err, GeoverlayError::DegenerateTransform { .. }));
}

#[test]
fn test_non_finite_coefficients_rejected() {
    let err = AffineGeoTransform::from_tiepoint_and_scale(
        &[0.0, 0.0, 0.0, f64::NAN, 10.0, 0.0],
        &TEST_PIXEL_SCALE,
    )
    .unwrap_err();
    assert!(matches!(err, GeoverlayError::InvalidGeoreference(_)));

    let err = AffineGeoTransform::new(0.01, 0.0, 0.0, -0.01, 30.0, f64::INFINITY).unwrap_err();
    assert!(matches!(err, GeoverlayError::InvalidGeoreference(_)));

    let tags = GeoreferenceTags::Matrix([0.01, 0.0, 0.0, f64::NEG_INFINITY, 30.0, -25.0]);
    assert!(AffineGeoTransform::from_tags(Some(&tags)).is_err());
}

#[test]
fn test_short_tag_arrays_rejected() {
    let err = AffineGeoTransform::from_tiepoint_and_scale(&[0.0, 0.0, 0.0, 30.0], &TEST_PIXEL_SCALE)
        .unwrap_err();
    assert!(matches!(err, GeoverlayError::InvalidGeoreference(_)));

    let err = AffineGeoTransform::from_tiepoint_and_scale(&TEST_TIEPOINT, &[0.01]).unwrap_err();
    assert!(matches!(err, GeoverlayError::InvalidGeoreference(_)));
}

#[test]
fn test_fallback_matches_reference_tags() {
    let fallback = AffineGeoTransform::fallback();
    let expected = AffineGeoTransform::from_tiepoint_and_scale(
        &[0.0, 0.0, 0.0, -27.664135, 31.994103, 0.0],
        &[0.001, 0.001, 0.0],
    )
    .unwrap();
    assert_eq!(fallback, expected);

    let from_consts =
        AffineGeoTransform::from_tiepoint_and_scale(&FALLBACK_TIEPOINT, &FALLBACK_PIXEL_SCALE)
            .unwrap();
    assert_eq!(fallback, from_consts);
}

#[test]
fn test_from_tags_without_tags_uses_fallback() {
    let t = AffineGeoTransform::from_tags(None).unwrap();
    assert_eq!(t, AffineGeoTransform::fallback());
    assert_eq!(t.origin(), (-27.664135, 31.994103));
}

#[test]
fn test_from_tags_variants() {
    let tags = GeoreferenceTags::TiePoint {
        tiepoint: TEST_TIEPOINT.to_vec(),
        pixel_scale: TEST_PIXEL_SCALE.to_vec(),
    };
    assert_eq!(AffineGeoTransform::from_tags(Some(&tags)).unwrap(), test_transform());

    let matrix = GeoreferenceTags::Matrix([0.5, 0.1, 0.0, -0.5, 10.0, 20.0]);
    let t = AffineGeoTransform::from_tags(Some(&matrix)).unwrap();
    assert_eq!(t.coefficients(), [0.5, 0.1, 0.0, -0.5, 10.0, 20.0]);
    assert_relative_eq!(t.determinant(), -0.25);

    let singular = GeoreferenceTags::Matrix([0.0; 6]);
    assert!(AffineGeoTransform::from_tags(Some(&singular)).is_err());
}

#[test]
fn test_bounds_of_north_up_raster() {
    let t = test_transform();
    let b = t.bounds(200, 100);
    assert_relative_eq!(b.min_lon, 30.0, epsilon = 1e-9);
    assert_relative_eq!(b.max_lon, 32.0, epsilon = 1e-9);
    assert_relative_eq!(b.min_lat, -26.0, epsilon = 1e-9);
    assert_relative_eq!(b.max_lat, -25.0, epsilon = 1e-9);
}
