//! Dominant and average color extraction over RGB images

use crate::feature::vector::FeatureVector;
use crate::io::error::{MosaicError, Result};
use image::RgbImage;
use std::collections::HashMap;

/// A rectangular pixel sub-region, half-open on the high edge
///
/// Valid when `min_x <= max_x <= width` and `min_y <= max_y <= height`.
/// Violations are fatal; regions are never clamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    /// Leftmost column included
    pub min_x: u32,
    /// Topmost row included
    pub min_y: u32,
    /// One past the rightmost column included
    pub max_x: u32,
    /// One past the bottommost row included
    pub max_y: u32,
}

/// Feature extraction strategy, fixed once per mosaic run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Most frequent exact (R, G, B) value
    Dominant,
    /// Arithmetic mean of each channel
    Average,
}

impl Strategy {
    /// Extract a feature vector from the full image
    ///
    /// # Errors
    ///
    /// Returns an error if the image contains no pixels
    pub fn extract(self, image: &RgbImage) -> Result<FeatureVector> {
        match self {
            Self::Dominant => dominant_color(image),
            Self::Average => average_color(image, None),
        }
    }
}

/// Most frequent exact (R, G, B) value in the image
///
/// Ties on the count are broken deterministically in favor of the
/// lexicographically smallest (R, G, B) triple, independent of scan order.
///
/// # Errors
///
/// Returns an error if the image contains no pixels
pub fn dominant_color(image: &RgbImage) -> Result<FeatureVector> {
    let mut counts: HashMap<[u8; 3], u64> = HashMap::new();
    for pixel in image.pixels() {
        *counts.entry(pixel.0).or_insert(0) += 1;
    }

    let mut best: Option<([u8; 3], u64)> = None;
    for (rgb, count) in counts {
        let replace = best.is_none_or(|(best_rgb, best_count)| {
            count > best_count || (count == best_count && rgb < best_rgb)
        });
        if replace {
            best = Some((rgb, count));
        }
    }

    best.map(|(rgb, _)| FeatureVector::from(rgb))
        .ok_or_else(|| MosaicError::InvalidRegion {
            min: (0, 0),
            max: (0, 0),
            dimensions: (image.width(), image.height()),
        })
}

/// Per-channel arithmetic mean over an optional sub-region
///
/// With no region the full image is averaged. Region bounds must lie within
/// the image and must enclose at least one pixel.
///
/// # Errors
///
/// Returns an error if the region falls outside the image bounds, is
/// inverted, or encloses no pixels
pub fn average_color(image: &RgbImage, region: Option<Region>) -> Result<FeatureVector> {
    let (width, height) = (image.width(), image.height());
    let region = region.unwrap_or(Region {
        min_x: 0,
        min_y: 0,
        max_x: width,
        max_y: height,
    });

    let out_of_bounds = region.min_x > region.max_x
        || region.min_y > region.max_y
        || region.max_x > width
        || region.max_y > height;
    let empty = region.min_x == region.max_x || region.min_y == region.max_y;
    if out_of_bounds || empty {
        return Err(MosaicError::InvalidRegion {
            min: (region.min_x, region.min_y),
            max: (region.max_x, region.max_y),
            dimensions: (width, height),
        });
    }

    let mut sums = [0u64; 3];
    for x in region.min_x..region.max_x {
        for y in region.min_y..region.max_y {
            let channels = image.get_pixel(x, y).0;
            for (sum, value) in sums.iter_mut().zip(channels.iter()) {
                *sum += u64::from(*value);
            }
        }
    }

    let count =
        f64::from(region.max_x - region.min_x) * f64::from(region.max_y - region.min_y);
    Ok(FeatureVector::new(
        sums[0] as f64 / count,
        sums[1] as f64 / count,
        sums[2] as f64 / count,
    ))
}
