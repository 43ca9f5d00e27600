//! Three-component color feature vectors

/// A color feature summarizing an image as (R, G, B) channel values
///
/// Equality is representational, not perceptual: two visually similar images
/// may carry different vectors. Vectors are only used as comparands and
/// library keys, never rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FeatureVector {
    channels: [f64; 3],
}

impl FeatureVector {
    /// Create a feature vector from per-channel values
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            channels: [r, g, b],
        }
    }

    /// Per-channel values in (R, G, B) order
    pub const fn channels(&self) -> [f64; 3] {
        self.channels
    }

    /// L1 distance: sum of absolute per-component differences
    pub fn l1_distance(&self, other: &Self) -> f64 {
        self.channels
            .iter()
            .zip(other.channels.iter())
            .map(|(a, b)| (a - b).abs())
            .sum()
    }
}

impl From<[u8; 3]> for FeatureVector {
    fn from(rgb: [u8; 3]) -> Self {
        Self::new(f64::from(rgb[0]), f64::from(rgb[1]), f64::from(rgb[2]))
    }
}
