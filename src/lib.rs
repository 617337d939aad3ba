//! Bootsmith - bootstrap asset materializer
//!
//! Bootsmith reconciles the configuration and cryptographic artifacts
//! needed to bootstrap a cluster. Each asset decides, exactly once per
//! run, between trusting user-supplied bytes on disk and generating
//! fresh content from its dependencies - and it never silently accepts
//! structurally invalid cryptographic material.

pub mod assets;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod keys;

// Re-exports for convenience
pub use assets::tls::{BoundSaSigningKey, BOUND_SA_SIGNING_KEY};
pub use domain::entities::AssetFile;
pub use domain::ports::{Asset, AssetKey, FetchError, FetchOutcome, FileFetcher, Parents};
pub use domain::services::{AssetState, AssetStatus, AssetStore};
pub use error::{BootsmithError, BootsmithResult};
pub use infrastructure::fs::{stage_files, DiskFetcher};

/// The default asset set a bootstrap run materializes
pub fn default_store() -> BootsmithResult<AssetStore> {
    let mut store = AssetStore::new();
    store.register(Box::new(BoundSaSigningKey::new()))?;
    Ok(store)
}
