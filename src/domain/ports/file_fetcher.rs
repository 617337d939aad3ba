//! FileFetcher port - how assets reach previously persisted state
//!
//! The absence/error distinction carried by this port is the single
//! most load-bearing invariant in the crate: a missing file is a
//! normal outcome (`FetchOutcome::Absent`) that lets an asset fall
//! back to generation, while every other read failure is a hard error
//! that must abort the run. Encoding the distinction in the return
//! type makes misuse a compile-time concern.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::entities::AssetFile;

/// Result of a fetch: the file, or a definitive "it is not there"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The artifact exists and was read in full
    Found(AssetFile),
    /// The artifact definitively does not exist. Not a failure.
    Absent,
}

/// Result type for fetch operations
pub type FetchResult = Result<FetchOutcome, FetchError>;

/// A fetch failure that is NOT absence
///
/// Permission problems, truncated reads, unexpected file types - all
/// fatal, never reinterpreted as "not supplied".
#[derive(Debug, Error)]
pub enum FetchError {
    /// Permission denied reading the artifact
    #[error("permission denied reading '{path}'")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Any other read failure
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Abstract fetcher for previously persisted asset state
///
/// Implementations:
/// - `DiskFetcher` - reads from a root directory on local disk
/// - in-memory maps in tests
pub trait FileFetcher {
    /// Resolve a logical file name to its stored content.
    ///
    /// Must distinguish "does not exist" (`Ok(FetchOutcome::Absent)`)
    /// from every other failure (`Err`).
    fn fetch_by_name(&self, name: &Path) -> FetchResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_display_names_the_path() {
        let err = FetchError::PermissionDenied {
            path: PathBuf::from("tls/k.key"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("tls/k.key"));
    }

    #[test]
    fn absent_is_not_an_error() {
        let outcome: FetchResult = Ok(FetchOutcome::Absent);
        assert!(outcome.is_ok());
    }
}
