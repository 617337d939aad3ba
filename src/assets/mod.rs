//! Concrete bootstrap assets
//!
//! Each submodule groups the assets for one artifact family. Every
//! asset implements the `domain::ports::Asset` contract and is wired
//! into a store by the caller (see `main.rs` for the default set).

pub mod tls;
