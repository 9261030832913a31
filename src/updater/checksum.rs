//! Checksum resolution for newly discovered versions

use tracing::warn;

use crate::config::{CHECKSUM_FILENAME_TEMPLATES, checksum_filename};
use crate::error::RemoteError;
use crate::manifest::Checksum;
use crate::remote::{ChecksumTable, ReleaseSource};

/// Looks `version` up in the checksum table under each known artifact name,
/// first match wins.
pub fn find_listed_checksum<'a>(version: &str, table: &'a ChecksumTable) -> Option<&'a Checksum> {
    CHECKSUM_FILENAME_TEMPLATES
        .iter()
        .find_map(|template| table.get(&checksum_filename(template, version)))
}

/// Resolves the checksum of `version`, downloading the artifact when the
/// table does not list it.
pub async fn resolve_checksum<S: ReleaseSource + ?Sized>(
    source: &S,
    version: &str,
    table: &ChecksumTable,
) -> Result<Option<Checksum>, RemoteError> {
    if let Some(checksum) = find_listed_checksum(version, table) {
        return Ok(Some(checksum.clone()));
    }

    warn!("Couldn't find checksum for version {}", version);
    source.download_checksum(version).await
}
