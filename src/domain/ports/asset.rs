//! Asset port - the uniform contract every bootstrap artifact implements
//!
//! The store calls the four operations in a fixed order and cardinality
//! per run: `dependencies()`, then `load(fetcher)`, then - only if load
//! did not claim success - `generate(parents)`, then `files()`. An
//! asset is never re-loaded or re-generated within a single run.

use std::collections::HashMap;
use std::fmt;

use crate::domain::entities::AssetFile;
use crate::domain::ports::file_fetcher::FileFetcher;
use crate::error::BootsmithResult;

/// Stable identity of an asset within the store
///
/// Used for dependency declarations and lookups; `name()` is the
/// human-readable label used only for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetKey(pub &'static str);

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Resolved dependencies handed to `generate`
///
/// A snapshot of each dependency's output files, taken after the
/// dependency reached its terminal state. Assets read from this view
/// only; they never touch another asset directly.
#[derive(Debug, Default)]
pub struct Parents {
    files: HashMap<AssetKey, Vec<AssetFile>>,
}

impl Parents {
    /// Create an empty view (for assets with no dependencies)
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a resolved dependency's files
    pub fn insert(&mut self, key: AssetKey, files: Vec<AssetFile>) {
        self.files.insert(key, files);
    }

    /// Files produced by a resolved dependency
    ///
    /// `None` if the key was not declared as a dependency - the store
    /// only snapshots what `dependencies()` named.
    pub fn files_of(&self, key: AssetKey) -> Option<&[AssetFile]> {
        self.files.get(&key).map(Vec::as_slice)
    }
}

/// A single bootstrap artifact with a dependency/load/generate/files
/// lifecycle
pub trait Asset {
    /// Stable identity within the store
    fn key(&self) -> AssetKey;

    /// Human friendly name, used only for diagnostics
    fn name(&self) -> &str;

    /// Assets this one reads from during `generate`.
    ///
    /// Pure and stable across calls. The relation must be acyclic;
    /// the store rejects cycles before evaluating anything.
    fn dependencies(&self) -> Vec<AssetKey> {
        Vec::new()
    }

    /// Attempt to reconstruct this asset purely from persisted state.
    ///
    /// - `Ok(true)`: state was reconstructed; `files()` is now
    ///   populated and `generate` will not be called.
    /// - `Ok(false)`: the backing state is simply absent. Normal -
    ///   the store falls through to `generate`.
    /// - `Err(_)`: backing state exists but is invalid, or the read
    ///   itself failed. Hard stop; never treated as absence.
    fn load(&mut self, fetcher: &dyn FileFetcher) -> BootsmithResult<bool>;

    /// Produce this asset's files from scratch.
    ///
    /// Invoked only if `load` did not claim success. May read the
    /// resolved dependencies' files; must not mutate anything beyond
    /// this asset's own file list.
    fn generate(&mut self, parents: &Parents) -> BootsmithResult<()>;

    /// The final artifact list.
    ///
    /// Empty until `load` or `generate` completed; stable afterwards.
    fn files(&self) -> &[AssetFile];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_key_display_is_bare() {
        assert_eq!(AssetKey("tls/signing-key").to_string(), "tls/signing-key");
    }

    #[test]
    fn parents_returns_none_for_undeclared_key() {
        let parents = Parents::new();
        assert!(parents.files_of(AssetKey("missing")).is_none());
    }

    #[test]
    fn parents_returns_inserted_files() {
        let mut parents = Parents::new();
        parents.insert(
            AssetKey("dep"),
            vec![AssetFile::new("a.txt", b"x".to_vec())],
        );
        let files = parents.files_of(AssetKey("dep")).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].data(), b"x");
    }
}
