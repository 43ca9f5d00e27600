//! Sequential mosaic assembly over a regular tile grid

use crate::feature::Strategy;
use crate::geometry::crop::aligned_crop;
use crate::io::configuration::{CANVAS_FILL, OUTPUT_EXTENSION, OUTPUT_SUFFIX};
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::io::progress::Reporter;
use crate::io::staging::Staging;
use crate::library::{TileLibrary, build_library, find_nearest};
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};

/// Parameters controlling one mosaic run
#[derive(Clone, Copy, Debug)]
pub struct MosaicConfig {
    /// Tile size inspected in the source image
    pub resolution: (u32, u32),
    /// Thumbnail size written to the output image
    pub thumbnail_size: (u32, u32),
    /// Feature extraction strategy, applied to library and queries alike
    pub strategy: Strategy,
    /// Maximum number of candidate images indexed, unbounded when `None`
    pub max_images: Option<usize>,
}

/// Single-shot mosaic assembler
///
/// A run proceeds through fixed phases: crop the source to the tile grid,
/// build the library once, then scan the grid matching one thumbnail per
/// cell. Any failure past parameter validation aborts the run; a partial
/// mosaic is never written.
#[derive(Debug)]
pub struct Assembler {
    config: MosaicConfig,
    reporter: Reporter,
}

impl Assembler {
    /// Create an assembler after validating the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a resolution or thumbnail component is zero
    pub fn new(config: MosaicConfig, reporter: Reporter) -> Result<Self> {
        Self::nonzero("resolution", config.resolution)?;
        Self::nonzero("thumbnail", config.thumbnail_size)?;
        Ok(Self { config, reporter })
    }

    fn nonzero(parameter: &'static str, size: (u32, u32)) -> Result<()> {
        if size.0 == 0 || size.1 == 0 {
            return Err(invalid_parameter(
                parameter,
                &format!("{} {}", size.0, size.1),
                &"components must be nonzero",
            ));
        }
        Ok(())
    }

    /// Assemble a mosaic of `input` from the candidate images in `stash`
    ///
    /// Writes the mosaic as a JPEG next to the input image and returns its
    /// path. All intermediate artifacts live in a staging directory that is
    /// removed before returning, on failure as well as success.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The source image cannot be decoded
    /// - The tile resolution exceeds the cropped source dimensions
    /// - The stash directory yields no decodable candidates
    /// - A matched thumbnail cannot be reopened
    /// - The working copy or the mosaic cannot be saved
    pub fn run(&self, input: &Path, stash: &Path) -> Result<PathBuf> {
        let staging = Staging::new()?;

        let working = self.crop_source(input, &staging)?;
        let library = self.build_library(stash, &staging)?;
        let canvas = self.grid_scan(&working, &library)?;

        let output = Self::output_path(input);
        canvas.save(&output).map_err(|e| MosaicError::ImageExport {
            path: output.clone(),
            source: e,
        })?;
        self.reporter
            .note(&format!("Mosaic written to {}", output.display()));

        self.reporter.note("Removing staged artifacts");
        staging.close()?;
        Ok(output)
    }

    // Init -> Cropped: align the source image to the tile grid
    fn crop_source(&self, input: &Path, staging: &Staging) -> Result<RgbImage> {
        let decoded = image::open(input).map_err(|e| MosaicError::ImageUnreadable {
            path: input.to_path_buf(),
            source: e,
        })?;
        let source = decoded.to_rgb8();

        let crop = aligned_crop(source.width(), source.height(), self.config.resolution);
        if crop.width() == 0 || crop.height() == 0 {
            return Err(invalid_parameter(
                "resolution",
                &format!("{} {}", self.config.resolution.0, self.config.resolution.1),
                &format!(
                    "tile resolution exceeds the {}x{} source image",
                    source.width(),
                    source.height()
                ),
            ));
        }
        let working =
            imageops::crop_imm(&source, crop.x0, crop.y0, crop.width(), crop.height()).to_image();

        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        let working_copy = staging.working_copy_path(&stem);
        self.reporter
            .note(&format!("Staging working copy {}", working_copy.display()));
        working
            .save(&working_copy)
            .map_err(|e| MosaicError::ImageExport {
                path: working_copy,
                source: e,
            })?;

        Ok(working)
    }

    // Cropped -> LibraryBuilt: one-shot build, read-only afterwards
    fn build_library(&self, stash: &Path, staging: &Staging) -> Result<TileLibrary> {
        let library = build_library(
            stash,
            self.config.strategy,
            self.config.thumbnail_size,
            self.config.max_images,
            staging,
            &self.reporter,
        )?;
        if library.is_empty() {
            return Err(MosaicError::EmptyLibrary);
        }
        self.reporter
            .note(&format!("Indexed {} candidate images", library.len()));
        Ok(library)
    }

    // Gridding: one matched thumbnail per cell, column-outer scan order
    fn grid_scan(&self, working: &RgbImage, library: &TileLibrary) -> Result<RgbImage> {
        let (res_x, res_y) = self.config.resolution;
        let (thumb_w, thumb_h) = self.config.thumbnail_size;
        let columns = working.width() / res_x;
        let rows = working.height() / res_y;

        let mut canvas =
            RgbImage::from_pixel(columns * thumb_w, rows * thumb_h, Rgb(CANVAS_FILL));

        let bar = self.reporter.bar(u64::from(columns), "Assembling columns");
        for column in 0..columns {
            for row in 0..rows {
                let cell = imageops::crop_imm(working, column * res_x, row * res_y, res_x, res_y)
                    .to_image();
                // Stretch resample, so cell features are computed at
                // thumbnail scale exactly as library features were
                let stretched = imageops::resize(&cell, thumb_w, thumb_h, FilterType::Nearest);
                let query = self.config.strategy.extract(&stretched)?;

                let matched = find_nearest(&query, library)?;
                let tile = image::open(matched.path())
                    .map_err(|e| MosaicError::ImageUnreadable {
                        path: matched.path().to_path_buf(),
                        source: e,
                    })?
                    .to_rgb8();
                imageops::replace(
                    &mut canvas,
                    &tile,
                    i64::from(column * thumb_w),
                    i64::from(row * thumb_h),
                );
            }
            bar.inc(1);
            self.reporter
                .note(&format!("{} of {columns} columns", column + 1));
        }
        bar.finish_and_clear();

        Ok(canvas)
    }

    fn output_path(input: &Path) -> PathBuf {
        let stem = input.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{OUTPUT_SUFFIX}.{OUTPUT_EXTENSION}",
            stem.to_string_lossy()
        );

        if let Some(parent) = input.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
