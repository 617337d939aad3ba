//! Disk-backed FileFetcher
//!
//! Resolves logical names against a root directory. `NotFound` maps to
//! `FetchOutcome::Absent`; every other read failure is preserved as a
//! `FetchError` so the caller can abort instead of silently falling
//! back to generation.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::entities::AssetFile;
use crate::domain::ports::file_fetcher::{FetchError, FetchOutcome, FetchResult, FileFetcher};

/// FileFetcher over a local directory
#[derive(Debug, Clone)]
pub struct DiskFetcher {
    root: PathBuf,
}

impl DiskFetcher {
    /// Create a fetcher rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory logical names resolve against
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FileFetcher for DiskFetcher {
    fn fetch_by_name(&self, name: &Path) -> FetchResult {
        let path = self.root.join(name);
        match std::fs::read(&path) {
            Ok(data) => Ok(FetchOutcome::Found(AssetFile::new(name, data))),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(FetchOutcome::Absent),
            Err(err) if err.kind() == ErrorKind::PermissionDenied => {
                Err(FetchError::PermissionDenied { path, source: err })
            }
            Err(err) => Err(FetchError::Io { path, source: err }),
        }
    }
}
