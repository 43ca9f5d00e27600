//! Crop geometry for aspect-ratio and grid-aligned trimming
//!
//! This module contains the pure pixel arithmetic of the pipeline:
//! - Greatest common divisor and ratio reduction
//! - Centered crop rectangles, either constrained to an aspect ratio or
//!   aligned to an exact tile grid

/// Centered crop rectangle computation
pub mod crop;

pub use crop::CropBox;
