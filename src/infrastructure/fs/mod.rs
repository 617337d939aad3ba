//! File system adapters

pub mod disk;
pub mod staging;

pub use disk::DiskFetcher;
pub use staging::stage_files;
