//! Output and staging configuration constants

// Output settings
/// Suffix added to the mosaic output filename
pub const OUTPUT_SUFFIX: &str = "_mosaic";
/// Extension of the mosaic output file
pub const OUTPUT_EXTENSION: &str = "jpg";

/// Prefix of the per-run staging directory
pub const STAGING_PREFIX: &str = "tilemosaic-";

// Visible only if a cell fails to paste, which does not happen in a
// completed run
/// Initial fill color of the output canvas
pub const CANVAS_FILL: [u8; 3] = [30, 20, 255];
