//! Source trait for the vendor's release data

#[cfg(test)]
use mockall::automock;

use crate::error::RemoteError;
use crate::manifest::{Checksum, Releases, Version};
use crate::remote::parse::ChecksumTable;

/// Trait for reading release information from the vendor
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Fetches every version listed in the download archive
    ///
    /// # Returns
    /// * `Ok(Vec<Version>)` - Versions in page order; duplicates are possible
    /// * `Err(RemoteError)` - If the page cannot be fetched
    async fn fetch_available_versions(&self) -> Result<Vec<Version>, RemoteError>;

    /// Fetches the current stable and experimental releases
    async fn fetch_releases(&self) -> Result<Releases, RemoteError>;

    /// Fetches the published filename to checksum table
    async fn fetch_checksums(&self) -> Result<ChecksumTable, RemoteError>;

    /// Downloads the headless artifact of `version` and digests it
    ///
    /// # Returns
    /// * `Ok(Some(checksum))` - Hex SHA-256 of the downloaded body
    /// * `Ok(None)` - The version has no headless artifact
    /// * `Err(RemoteError)` - Any other failure
    async fn download_checksum(&self, version: &str) -> Result<Option<Checksum>, RemoteError>;
}
