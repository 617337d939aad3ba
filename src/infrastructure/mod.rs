//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports.

pub mod fs;
