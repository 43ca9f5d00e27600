//! Mosaic assembly pipeline
//!
//! Drives a full run: aligned crop of the source image, one-shot library
//! construction, the grid scan with nearest-neighbor matching, and the final
//! canvas export.

/// Sequential assembly of the output mosaic
pub mod assembler;

pub use assembler::{Assembler, MosaicConfig};
