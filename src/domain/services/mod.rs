//! Domain services

pub mod store;

pub use store::{AssetState, AssetStatus, AssetStore};
