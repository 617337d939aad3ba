//! TLS asset family

pub mod bound_signing_key;

pub use bound_signing_key::{BoundSaSigningKey, BOUND_SA_SIGNING_KEY};

/// Directory, relative to the asset root, holding TLS material
pub const TLS_DIR: &str = "tls";
