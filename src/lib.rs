//! Photomosaic assembly by nearest-neighbor color matching
//!
//! The system indexes a directory of candidate images by a color feature
//! (dominant or average color), then rebuilds a source image as a grid of
//! tiles, each replaced by the candidate thumbnail whose feature is closest
//! in L1 distance.

#![forbid(unsafe_code)]

/// Color feature extraction for tile matching
pub mod feature;
/// Crop geometry for aspect-ratio and grid-aligned trimming
pub mod geometry;
/// Input/output operations and error handling
pub mod io;
/// Tile library construction and nearest-neighbor matching
pub mod library;
/// Mosaic assembly pipeline
pub mod mosaic;

pub use io::error::{MosaicError, Result};
