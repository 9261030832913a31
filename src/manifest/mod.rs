//! Local manifest of known versions, checksums and release pointers
//!
//! - [`types`]: `Manifest`, `Releases` and the version map
//! - [`store`]: reading the previous manifest and writing the new one

pub mod store;
pub mod types;

pub use store::ManifestStore;
pub use types::{Checksum, Manifest, Releases, Version, VersionMap};
