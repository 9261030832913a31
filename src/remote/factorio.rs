//! factorio.com implementation of the release source

use futures::StreamExt;
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

use crate::config::{Endpoints, USER_AGENT};
use crate::error::RemoteError;
use crate::manifest::{Checksum, Releases, Version};
use crate::remote::parse::{
    ChecksumTable, parse_archive_versions, parse_checksum_table, parse_releases,
};
use crate::remote::source::ReleaseSource;

/// Release source backed by the vendor's website
pub struct FactorioSource {
    client: reqwest::Client,
    endpoints: Endpoints,
}

impl FactorioSource {
    /// Creates a source reading from `endpoints`
    pub fn new(endpoints: Endpoints) -> Result<Self, RemoteError> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client, endpoints })
    }

    /// Fetches `url` and returns its body, failing on any non-success status
    async fn get_text(&self, url: &str) -> Result<String, RemoteError> {
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!("{} returned status {}", url, status);
            return Err(RemoteError::UnexpectedStatus {
                url: url.to_string(),
                status,
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait::async_trait]
impl ReleaseSource for FactorioSource {
    async fn fetch_available_versions(&self) -> Result<Vec<Version>, RemoteError> {
        info!("Fetching available versions");
        let page = self.get_text(&self.endpoints.archive_url).await?;
        Ok(parse_archive_versions(&page))
    }

    async fn fetch_releases(&self) -> Result<Releases, RemoteError> {
        info!("Fetching releases");
        let body = self.get_text(&self.endpoints.releases_url).await?;
        parse_releases(&body)
    }

    async fn fetch_checksums(&self) -> Result<ChecksumTable, RemoteError> {
        info!("Fetching checksums");
        let listing = self.get_text(&self.endpoints.checksums_url).await?;
        parse_checksum_table(&listing)
    }

    async fn download_checksum(&self, version: &str) -> Result<Option<Checksum>, RemoteError> {
        info!("Downloading and calculating checksum for version {}", version);
        let url = self.endpoints.headless_download_url(version);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            warn!("Version {} has no headless version", version);
            return Ok(None);
        }

        if !status.is_success() {
            warn!("{} returned status {}", url, status);
            return Err(RemoteError::UnexpectedStatus { url, status });
        }

        let mut hasher = Sha256::new();
        let mut downloaded: u64 = 0;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            downloaded += chunk.len() as u64;
            hasher.update(&chunk);
        }
        debug!("Hashed {} bytes for version {}", downloaded, version);

        Ok(Some(hex::encode(hasher.finalize())))
    }
}
