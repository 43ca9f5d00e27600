//! Exhaustive nearest-neighbor search over the tile library

use crate::feature::FeatureVector;
use crate::io::error::{MosaicError, Result};
use crate::library::builder::{ThumbnailRef, TileLibrary};

/// Find the library thumbnail whose feature vector is L1-closest to `query`
///
/// Linear scan over every entry; the running minimum is only replaced by a
/// strictly smaller distance, so ties keep the earliest entry in library
/// iteration order. Cost is O(|library|) per call.
///
/// # Errors
///
/// Returns [`MosaicError::EmptyLibrary`] if the library holds no entries;
/// matching cannot fall back to a placeholder tile.
pub fn find_nearest<'a>(
    query: &FeatureVector,
    library: &'a TileLibrary,
) -> Result<&'a ThumbnailRef> {
    let mut nearest: Option<(f64, &ThumbnailRef)> = None;
    for (vector, thumbnail) in library {
        let distance = query.l1_distance(vector);
        if nearest.is_none_or(|(minimum, _)| distance < minimum) {
            nearest = Some((distance, thumbnail));
        }
    }
    nearest
        .map(|(_, thumbnail)| thumbnail)
        .ok_or(MosaicError::EmptyLibrary)
}
