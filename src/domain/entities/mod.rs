//! Core domain entities

pub mod asset_file;

pub use asset_file::AssetFile;
