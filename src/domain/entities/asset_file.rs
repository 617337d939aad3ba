//! AssetFile entity - a (logical path, raw bytes) pair
//!
//! The unit of output every asset produces and the unit of input the
//! FileFetcher returns. The logical path is relative to the asset
//! directory root; staging resolves it against a concrete target
//! directory at persist time.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

/// A single artifact: logical path plus raw content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFile {
    /// Logical path, relative to the asset directory root
    filename: PathBuf,
    /// Raw content, not further interpreted at this layer
    data: Vec<u8>,
}

impl AssetFile {
    /// Create a new AssetFile
    pub fn new(filename: impl Into<PathBuf>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            data: data.into(),
        }
    }

    /// Get the logical path
    pub fn filename(&self) -> &Path {
        &self.filename
    }

    /// Get the raw content
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// SHA-256 fingerprint of the content, `sha256:<hex>`
    ///
    /// Shown in reports so an operator can confirm which material was
    /// accepted.
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(&self.data);
        let hex: String = digest.iter().map(|b| format!("{b:02x}")).collect();
        format!("sha256:{hex}")
    }
}
