//! Color feature extraction for tile matching
//!
//! Reduces an image (or a rectangular sub-region) to a three-component
//! feature vector under one of two interchangeable strategies: dominant
//! color or average color. The strategy is fixed once per mosaic run and
//! applied uniformly to library thumbnails and query tiles.

/// Feature extraction strategies over RGB images
pub mod extract;
/// Feature vector representation and L1 distance
pub mod vector;

pub use extract::{Region, Strategy};
pub use vector::FeatureVector;
