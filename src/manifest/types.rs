//! Manifest data model

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Version string exactly as published by the vendor
pub type Version = String;

/// Hex-encoded SHA-256 digest
pub type Checksum = String;

/// Known versions and their checksums, in manifest order.
/// `None` marks a version without a downloadable headless artifact.
pub type VersionMap = IndexMap<Version, Option<Checksum>>;

/// Current version of each release channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Releases {
    pub stable: Version,
    pub experimental: Version,
}

impl Releases {
    pub fn new(stable: impl Into<Version>, experimental: impl Into<Version>) -> Self {
        Self {
            stable: stable.into(),
            experimental: experimental.into(),
        }
    }
}

/// Persisted state written to `versions.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub releases: Releases,
    pub versions: VersionMap,
}
