//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure provides concrete implementations.

pub mod asset;
pub mod file_fetcher;

pub use asset::{Asset, AssetKey, Parents};
pub use file_fetcher::{FetchError, FetchOutcome, FetchResult, FileFetcher};
