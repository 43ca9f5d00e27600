//! Validates feature vectors and the two extraction strategies

use image::{Rgb, RgbImage};
use tilemosaic::MosaicError;
use tilemosaic::feature::extract::{average_color, dominant_color};
use tilemosaic::feature::{FeatureVector, Region, Strategy};

fn checkerboard_2x2() -> RgbImage {
    let mut img = RgbImage::new(2, 2);
    img.put_pixel(0, 0, Rgb([0, 0, 0]));
    img.put_pixel(1, 0, Rgb([255, 255, 255]));
    img.put_pixel(0, 1, Rgb([0, 0, 0]));
    img.put_pixel(1, 1, Rgb([255, 255, 255]));
    img
}

#[test]
fn test_l1_distance_sums_component_differences() {
    let a = FeatureVector::new(10.0, 20.0, 30.0);
    let b = FeatureVector::new(13.0, 18.0, 30.0);
    assert!((a.l1_distance(&b) - 5.0).abs() < f64::EPSILON);
    assert!((b.l1_distance(&a) - 5.0).abs() < f64::EPSILON);
    assert!(a.l1_distance(&a).abs() < f64::EPSILON);
}

#[test]
fn test_average_of_checkerboard_is_mid_gray() {
    let vector = average_color(&checkerboard_2x2(), None).unwrap();
    assert_eq!(vector.channels(), [127.5, 127.5, 127.5]);
}

#[test]
fn test_average_over_sub_region() {
    // Left column only: both pixels black
    let region = Region {
        min_x: 0,
        min_y: 0,
        max_x: 1,
        max_y: 2,
    };
    let vector = average_color(&checkerboard_2x2(), Some(region)).unwrap();
    assert_eq!(vector.channels(), [0.0, 0.0, 0.0]);
}

#[test]
fn test_region_beyond_bounds_is_rejected() {
    let region = Region {
        min_x: 0,
        min_y: 0,
        max_x: 3,
        max_y: 2,
    };
    let result = average_color(&checkerboard_2x2(), Some(region));
    assert!(matches!(result, Err(MosaicError::InvalidRegion { .. })));
}

#[test]
fn test_inverted_region_is_rejected() {
    let region = Region {
        min_x: 2,
        min_y: 0,
        max_x: 1,
        max_y: 2,
    };
    let result = average_color(&checkerboard_2x2(), Some(region));
    assert!(matches!(result, Err(MosaicError::InvalidRegion { .. })));
}

#[test]
fn test_zero_area_region_is_rejected() {
    let region = Region {
        min_x: 1,
        min_y: 0,
        max_x: 1,
        max_y: 2,
    };
    let result = average_color(&checkerboard_2x2(), Some(region));
    assert!(matches!(result, Err(MosaicError::InvalidRegion { .. })));
}

#[test]
fn test_dominant_color_returns_strict_majority() {
    let mut img = RgbImage::from_pixel(3, 3, Rgb([200, 10, 10]));
    img.put_pixel(0, 0, Rgb([0, 0, 255]));
    img.put_pixel(2, 2, Rgb([0, 255, 0]));
    let vector = dominant_color(&img).unwrap();
    assert_eq!(vector.channels(), [200.0, 10.0, 10.0]);
}

#[test]
fn test_dominant_color_tie_breaks_to_smallest_rgb() {
    // Two colors at equal count; the lexicographically smaller triple wins
    let mut img = RgbImage::new(2, 2);
    img.put_pixel(0, 0, Rgb([10, 0, 0]));
    img.put_pixel(1, 0, Rgb([10, 0, 0]));
    img.put_pixel(0, 1, Rgb([0, 0, 10]));
    img.put_pixel(1, 1, Rgb([0, 0, 10]));
    let vector = dominant_color(&img).unwrap();
    assert_eq!(vector.channels(), [0.0, 0.0, 10.0]);
}

#[test]
fn test_strategies_dispatch_to_their_extractor() {
    let img = checkerboard_2x2();
    let average = Strategy::Average.extract(&img).unwrap();
    assert_eq!(average.channels(), [127.5, 127.5, 127.5]);
    let dominant = Strategy::Dominant.extract(&img).unwrap();
    assert_eq!(dominant.channels(), [0.0, 0.0, 0.0]);
}
