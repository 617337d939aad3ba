//! Domain Layer
//!
//! The core of Bootsmith - the asset reconciliation contract, free of
//! concrete I/O.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (AssetFile)
//! - `ports/` - Interface definitions (Asset, FileFetcher)
//! - `services/` - Domain services (AssetStore)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - this layer never touches the file system directly
//! 2. **Ports & Adapters** - all reads go through the FileFetcher port
//! 3. **Absence is not an error** - a missing user artifact is a normal
//!    outcome and is encoded in the type system, never in error values

pub mod entities;
pub mod ports;
pub mod services;
