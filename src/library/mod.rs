//! Tile library construction and nearest-neighbor matching
//!
//! The library indexes normalized thumbnails by their color feature vector.
//! It is built once per mosaic run, read-only afterwards, and its staged
//! thumbnails are discarded with the run's staging area.

/// Directory scanning, thumbnail normalization, and library indexing
pub mod builder;
/// Exhaustive L1 nearest-neighbor search over the library
pub mod matcher;

pub use builder::{ThumbnailRef, TileLibrary, build_library};
pub use matcher::find_nearest;
