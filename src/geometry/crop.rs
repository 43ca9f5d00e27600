//! Centered crop rectangles over image dimensions
//!
//! All functions here operate on `(width, height)` pairs only; decoding the
//! image and reporting unreadable files is the caller's concern. Trims are
//! centered, with the extra pixel of an odd trim removed from the low
//! (left/top) edge.

/// Greatest common divisor of two numbers via Euclid's algorithm
pub const fn gcd(a: u32, b: u32) -> u32 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

/// Reduce a ratio to lowest terms
///
/// `reduce(4, 8)` yields `(1, 2)`. Both components must be positive.
pub const fn reduce(x: u32, y: u32) -> (u32, u32) {
    let divisor = gcd(x, y);
    (x / divisor, y / divisor)
}

/// A crop rectangle within an image, in pixel coordinates
///
/// Half-open on the high edge: the retained pixels are `x0..x1` by `y0..y1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropBox {
    /// Leftmost retained column
    pub x0: u32,
    /// Topmost retained row
    pub y0: u32,
    /// One past the rightmost retained column
    pub x1: u32,
    /// One past the bottommost retained row
    pub y1: u32,
}

impl CropBox {
    /// Width of the retained region
    pub const fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    /// Height of the retained region
    pub const fn height(&self) -> u32 {
        self.y1 - self.y0
    }
}

/// Largest centered crop whose aspect ratio equals the reduced `ratio`
///
/// Grows a box in increments of the reduced ratio until either image bound
/// would be exceeded, then trims the remainder evenly around the center.
/// `(1, 1)` degenerates to the largest centered square.
pub const fn constrained_crop(width: u32, height: u32, ratio: (u32, u32)) -> CropBox {
    let (x, y) = reduce(ratio.0, ratio.1);
    let mut box_w = 0;
    let mut box_h = 0;
    while box_w + x <= width && box_h + y <= height {
        box_w += x;
        box_h += y;
    }
    centered(width, height, width - box_w, height - box_h)
}

/// Centered crop leaving dimensions that are exact multiples of `resolution`
///
/// Uses the unreduced resolution, so the result aligns to a whole number of
/// `resolution`-sized tiles in each axis. Leftover pixels beyond the last
/// full tile are dropped, never stretched to fill.
pub const fn aligned_crop(width: u32, height: u32, resolution: (u32, u32)) -> CropBox {
    centered(width, height, width % resolution.0, height % resolution.1)
}

// Odd trims remove the extra pixel from the low edge
const fn centered(width: u32, height: u32, trim_w: u32, trim_h: u32) -> CropBox {
    CropBox {
        x0: trim_w / 2 + trim_w % 2,
        y0: trim_h / 2 + trim_h % 2,
        x1: width - trim_w / 2,
        y1: height - trim_h / 2,
    }
}
