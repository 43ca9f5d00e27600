//! Command-line interface for mosaic assembly

use crate::feature::Strategy;
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::Reporter;
use crate::mosaic::{Assembler, MosaicConfig};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tilemosaic")]
#[command(
    author,
    version,
    about = "Assemble a photomosaic from a directory of candidate images"
)]
/// Command-line arguments for the mosaic assembler
pub struct Cli {
    /// Input image to reproduce as a mosaic
    #[arg(short, long, value_name = "IMAGE")]
    pub input: PathBuf,

    /// Directory of candidate images for the tile library
    #[arg(short, long, value_name = "DIR")]
    pub stash: PathBuf,

    /// Size of tile to inspect in the input image
    #[arg(short, long, num_args = 2, required = true, value_names = ["X", "Y"])]
    pub resolution: Vec<u32>,

    /// Size of tile to write in the output image
    #[arg(short, long, num_args = 2, required = true, value_names = ["X", "Y"])]
    pub thumbnail: Vec<u32>,

    /// Maximum number of candidate images to index from the stash
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub max_images: Option<usize>,

    /// Match on average color instead of the default dominant color
    #[arg(short, long)]
    pub average: bool,

    /// Print diagnostic messages while processing
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Feature extraction strategy selected by the flags
    pub const fn strategy(&self) -> Strategy {
        if self.average {
            Strategy::Average
        } else {
            Strategy::Dominant
        }
    }

    /// Assemble the mosaic described by the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation fails or the mosaic run fails
    pub fn run(&self) -> Result<()> {
        let config = MosaicConfig {
            resolution: size_pair("resolution", &self.resolution)?,
            thumbnail_size: size_pair("thumbnail", &self.thumbnail)?,
            strategy: self.strategy(),
            max_images: self.max_images,
        };
        let reporter = Reporter::new(self.verbose);

        let assembler = Assembler::new(config, reporter)?;
        assembler.run(&self.input, &self.stash)?;
        Ok(())
    }
}

// clap enforces the arity; the zero check happens before any file I/O
fn size_pair(parameter: &'static str, values: &[u32]) -> Result<(u32, u32)> {
    let rendered = || {
        values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    };
    match values {
        [x, y] if *x > 0 && *y > 0 => Ok((*x, *y)),
        [_, _] => Err(invalid_parameter(
            parameter,
            &rendered(),
            &"components must be nonzero",
        )),
        _ => Err(invalid_parameter(
            parameter,
            &rendered(),
            &"expected exactly two values",
        )),
    }
}
