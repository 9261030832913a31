//! On-disk manifest file

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use tracing::info;

use crate::config::MANIFEST_INDENT;
use crate::error::ManifestError;
use crate::manifest::types::{Manifest, VersionMap};

/// Only the versions are read back; release pointers are always refetched.
#[derive(Debug, Deserialize)]
struct StoredVersions {
    versions: VersionMap,
}

/// Reads and writes the manifest at a fixed path
#[derive(Debug, Clone)]
pub struct ManifestStore {
    path: PathBuf,
}

impl ManifestStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the versions recorded by the previous run.
    ///
    /// A missing file is an empty starting state. An unreadable or
    /// malformed file is an error.
    pub fn load_versions(&self) -> Result<VersionMap, ManifestError> {
        info!("Reading current {} file", self.path.display());

        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("The file {} doesn't exist", self.path.display());
                return Ok(VersionMap::new());
            }
            Err(source) => {
                return Err(ManifestError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let stored: StoredVersions =
            serde_json::from_str(&contents).map_err(|source| ManifestError::Parse {
                path: self.path.clone(),
                source,
            })?;

        Ok(stored.versions)
    }

    /// Overwrites the manifest file with `manifest`.
    pub fn save(&self, manifest: &Manifest) -> Result<(), ManifestError> {
        info!("Writing new {} file", self.path.display());

        let contents = render(manifest).map_err(ManifestError::Serialize)?;

        std::fs::write(&self.path, contents).map_err(|source| ManifestError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Serializes with 4-space indentation and no trailing newline.
pub fn render(manifest: &Manifest) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(MANIFEST_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    manifest.serialize(&mut serializer)?;
    Ok(buf)
}
