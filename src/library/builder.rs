//! Tile library construction from a directory of candidate images

use crate::feature::{FeatureVector, Strategy};
use crate::geometry::crop::constrained_crop;
use crate::io::error::{MosaicError, Result};
use crate::io::progress::Reporter;
use crate::io::staging::Staging;
use image::imageops::{self, FilterType};
use std::path::{Path, PathBuf};

/// Stable handle to a normalized thumbnail staged on disk
///
/// Every referenced thumbnail has exactly the configured thumbnail size.
#[derive(Clone, Debug)]
pub struct ThumbnailRef {
    path: PathBuf,
}

impl ThumbnailRef {
    /// Create a handle from a staged thumbnail path
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the staged thumbnail file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Feature-indexed collection of thumbnails, built once per run
///
/// Entries keep their insertion order, which (with the sorted directory
/// scan) makes both collision handling and matcher tie-breaks deterministic.
#[derive(Debug, Default)]
pub struct TileLibrary {
    entries: Vec<(FeatureVector, ThumbnailRef)>,
}

impl TileLibrary {
    /// Create an empty library
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert a thumbnail under its feature vector
    ///
    /// An entry with an equal vector is overwritten in place: the later
    /// insertion wins, the original position is kept.
    pub fn insert(&mut self, vector: FeatureVector, thumbnail: ThumbnailRef) {
        if let Some(entry) = self.entries.iter_mut().find(|(key, _)| *key == vector) {
            entry.1 = thumbnail;
        } else {
            self.entries.push((vector, thumbnail));
        }
    }

    /// Number of indexed thumbnails
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the library holds no entries
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, (FeatureVector, ThumbnailRef)> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a TileLibrary {
    type Item = &'a (FeatureVector, ThumbnailRef);
    type IntoIter = std::slice::Iter<'a, (FeatureVector, ThumbnailRef)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Build a tile library from the candidate images in `directory`
///
/// Entries are scanned non-recursively in sorted path order. Files that do
/// not decode as images are skipped without counting against `max_images`.
/// Each decodable candidate is center-cropped to the thumbnail aspect ratio,
/// downscaled with an antialiasing filter, staged to disk, and indexed by
/// its feature vector.
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be read
/// - A normalized thumbnail cannot be staged to disk
/// - Feature extraction fails on a normalized thumbnail
pub fn build_library(
    directory: &Path,
    strategy: Strategy,
    thumbnail_size: (u32, u32),
    max_images: Option<usize>,
    staging: &Staging,
    reporter: &Reporter,
) -> Result<TileLibrary> {
    let mut candidates = Vec::new();
    let listing = std::fs::read_dir(directory).map_err(|e| MosaicError::FileSystem {
        path: directory.to_path_buf(),
        operation: "read directory",
        source: e,
    })?;
    for entry in listing {
        let entry = entry.map_err(|e| MosaicError::FileSystem {
            path: directory.to_path_buf(),
            operation: "read directory entry",
            source: e,
        })?;
        candidates.push(entry.path());
    }
    candidates.sort();

    let bar = reporter.bar(candidates.len() as u64, "Indexing candidates");
    let mut library = TileLibrary::new();
    let mut indexed = 0usize;

    for path in candidates {
        bar.inc(1);
        if max_images.is_some_and(|max| indexed >= max) {
            break;
        }

        let decoded = match image::open(&path) {
            Ok(decoded) => decoded,
            Err(_) => {
                reporter.note(&format!(
                    "{} is not an image file; skipping it",
                    path.display()
                ));
                continue;
            }
        };
        let source = decoded.to_rgb8();

        let crop = constrained_crop(source.width(), source.height(), thumbnail_size);
        if crop.width() == 0 || crop.height() == 0 {
            reporter.note(&format!(
                "{} is smaller than one thumbnail aspect step; skipping it",
                path.display()
            ));
            continue;
        }

        let cropped =
            imageops::crop_imm(&source, crop.x0, crop.y0, crop.width(), crop.height()).to_image();
        let thumbnail = imageops::resize(
            &cropped,
            thumbnail_size.0,
            thumbnail_size.1,
            FilterType::Lanczos3,
        );

        let stem = path.file_stem().unwrap_or_default().to_string_lossy();
        let staged = staging.thumbnail_path(indexed, &stem);
        reporter.note(&format!("Staging thumbnail {}", staged.display()));
        thumbnail
            .save(&staged)
            .map_err(|e| MosaicError::ImageExport {
                path: staged.clone(),
                source: e,
            })?;

        let vector = strategy.extract(&thumbnail)?;
        library.insert(vector, ThumbnailRef::new(staged));
        indexed += 1;
    }

    bar.finish_and_clear();
    Ok(library)
}
