#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use tempfile::TempDir;

use factorio_versions::error::RemoteError;
use factorio_versions::manifest::{Checksum, ManifestStore, Releases, Version};
use factorio_versions::remote::{ChecksumTable, ReleaseSource};

/// In-memory release source for testing
pub struct FakeSource {
    versions: Vec<Version>,
    releases: Releases,
    checksums: ChecksumTable,
    downloads: HashMap<Version, Checksum>,
    downloaded: Mutex<Vec<Version>>,
    checksum_fetches: Mutex<usize>,
}

impl FakeSource {
    pub fn new(stable: &str, experimental: &str) -> Self {
        Self {
            versions: Vec::new(),
            releases: Releases::new(stable, experimental),
            checksums: ChecksumTable::new(),
            downloads: HashMap::new(),
            downloaded: Mutex::new(Vec::new()),
            checksum_fetches: Mutex::new(0),
        }
    }

    pub fn with_versions(mut self, versions: &[&str]) -> Self {
        self.versions = versions.iter().map(|v| v.to_string()).collect();
        self
    }

    /// Lists `checksum` for the primary headless artifact name of `version`
    pub fn with_listed_checksum(mut self, version: &str, checksum: &str) -> Self {
        self.checksums.insert(
            format!("factorio-headless_linux_{version}.tar.xz"),
            checksum.to_string(),
        );
        self
    }

    /// Serves `checksum` when `version` is downloaded; other downloads are 404
    pub fn with_download(mut self, version: &str, checksum: &str) -> Self {
        self.downloads
            .insert(version.to_string(), checksum.to_string());
        self
    }

    pub fn downloaded(&self) -> Vec<Version> {
        self.downloaded.lock().unwrap().clone()
    }

    pub fn checksum_fetches(&self) -> usize {
        *self.checksum_fetches.lock().unwrap()
    }
}

#[async_trait]
impl ReleaseSource for FakeSource {
    async fn fetch_available_versions(&self) -> Result<Vec<Version>, RemoteError> {
        Ok(self.versions.clone())
    }

    async fn fetch_releases(&self) -> Result<Releases, RemoteError> {
        Ok(self.releases.clone())
    }

    async fn fetch_checksums(&self) -> Result<ChecksumTable, RemoteError> {
        *self.checksum_fetches.lock().unwrap() += 1;
        Ok(self.checksums.clone())
    }

    async fn download_checksum(&self, version: &str) -> Result<Option<Checksum>, RemoteError> {
        self.downloaded.lock().unwrap().push(version.to_string());
        Ok(self.downloads.get(version).cloned())
    }
}

/// Create a manifest store in a temp dir, optionally seeded with `contents`
pub fn create_test_store(contents: Option<&str>) -> (TempDir, ManifestStore) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("versions.json");
    if let Some(contents) = contents {
        std::fs::write(&path, contents).unwrap();
    }
    (temp_dir, ManifestStore::new(path))
}

pub fn read_manifest_file(store: &ManifestStore) -> String {
    std::fs::read_to_string(store.path()).unwrap()
}
