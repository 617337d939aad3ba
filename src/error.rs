//! Error types for Bootsmith
//!
//! Uses `thiserror` for library errors. Absence of a user-supplied
//! artifact is deliberately NOT represented here: it is a normal load
//! outcome, not a failure (see `domain::ports::file_fetcher`).

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::file_fetcher::FetchError;

/// Result type alias for Bootsmith operations
pub type BootsmithResult<T> = Result<T, BootsmithError>;

/// Main error type for Bootsmith operations
///
/// Every variant is fatal: the resolution run halts before any further
/// asset is evaluated. There is no retry at this layer because the
/// failure modes (malformed user input, filesystem errors) are not
/// transient.
#[derive(Error, Debug)]
pub enum BootsmithError {
    /// Fetching an artifact failed for a reason other than absence.
    ///
    /// Never reinterpreted as "not supplied" - an ambiguous read must
    /// not silently mask a user-intended override.
    #[error("failed to fetch '{artifact}'")]
    Fetch {
        artifact: PathBuf,
        #[source]
        source: FetchError,
    },

    /// A user-supplied key artifact exists but does not parse.
    #[error("failed to load RSA private key from '{artifact}': {reason}")]
    MalformedKey { artifact: PathBuf, reason: String },

    /// Deriving or serializing the companion public key failed.
    ///
    /// Internal invariant violation: the private key was just parsed
    /// successfully, so this is never expected in normal operation.
    #[error("failed to derive public key for '{artifact}': {reason}")]
    KeyEncoding { artifact: PathBuf, reason: String },

    /// An asset was registered twice under the same key
    #[error("asset '{key}' is already registered")]
    DuplicateAsset { key: String },

    /// The declared dependency relation is not acyclic
    #[error("asset '{name}' is part of a dependency cycle")]
    DependencyCycle { name: String },

    /// An asset declared a dependency that was never registered
    #[error("asset '{name}' depends on unregistered asset '{dependency}'")]
    UnknownDependency { name: String, dependency: String },

    /// Context wrapper identifying which asset an error came from
    #[error("asset '{name}': {source}")]
    Asset {
        name: String,
        #[source]
        source: Box<BootsmithError>,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BootsmithError {
    /// Wrap an error with the name of the asset it came from
    pub fn for_asset(self, name: impl Into<String>) -> Self {
        BootsmithError::Asset {
            name: name.into(),
            source: Box::new(self),
        }
    }
}
