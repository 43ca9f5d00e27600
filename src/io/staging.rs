//! Scoped staging area for thumbnails and the cropped working copy
//!
//! All intermediate artifacts of a run live in one ephemeral directory that
//! is created at run start and removed on every exit path, success or
//! failure. Nothing is written next to the candidate images themselves.

use crate::io::configuration::STAGING_PREFIX;
use crate::io::error::{MosaicError, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Ephemeral directory holding one run's intermediate artifacts
///
/// Dropping the value removes the directory and its contents; [`close`]
/// does the same but surfaces removal failures.
///
/// [`close`]: Staging::close
#[derive(Debug)]
pub struct Staging {
    dir: TempDir,
}

impl Staging {
    /// Create a fresh staging directory under the system temp location
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created
    pub fn new() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir()
            .map_err(|e| MosaicError::FileSystem {
                path: std::env::temp_dir(),
                operation: "create staging directory",
                source: e,
            })?;
        Ok(Self { dir })
    }

    /// Root of the staging directory
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Staged path for a normalized thumbnail
    ///
    /// The index keeps names unique when distinct candidates share a stem.
    pub fn thumbnail_path(&self, index: usize, stem: &str) -> PathBuf {
        self.dir.path().join(format!("{index:04}-{stem}.thumbnail.png"))
    }

    /// Staged path for the grid-aligned working copy of the source image
    pub fn working_copy_path(&self, stem: &str) -> PathBuf {
        self.dir.path().join(format!("{stem}.working.jpg"))
    }

    /// Remove the staging directory, surfacing any removal failure
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or its contents cannot be deleted
    pub fn close(self) -> Result<()> {
        let path = self.dir.path().to_path_buf();
        self.dir.close().map_err(|e| MosaicError::FileSystem {
            path,
            operation: "remove staging directory",
            source: e,
        })
    }
}
