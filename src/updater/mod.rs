//! Update pipeline
//!
//! One run reads the previous manifest, lists the archive, refetches the
//! release pointers, resolves checksums for new versions and rewrites the
//! manifest. Every step is awaited before the next one starts.
//!
//! - [`reconcile`]: which versions to keep, which to resolve, and the merge
//! - [`checksum`]: checksum table lookup with download fallback

pub mod checksum;
pub mod reconcile;

use tracing::info;

use crate::error::UpdateError;
use crate::manifest::{Manifest, ManifestStore, VersionMap};
use crate::remote::ReleaseSource;

use self::checksum::resolve_checksum;
use self::reconcile::{merge, plan};

/// Runs the pipeline once and writes the resulting manifest.
///
/// Nothing is written if any step fails.
pub async fn update<S: ReleaseSource + ?Sized>(
    source: &S,
    store: &ManifestStore,
) -> Result<Manifest, UpdateError> {
    let previous = store.load_versions()?;

    let available = source.fetch_available_versions().await?;
    let version_plan = plan(previous, &available);
    info!("There are {} new versions", version_plan.missing.len());
    info!(
        "There are {} versions which are no longer available",
        version_plan.dropped
    );

    let releases = source.fetch_releases().await?;

    let mut resolved = VersionMap::new();
    if version_plan.missing.is_empty() {
        info!("No new versions, skipping checksum fetching");
    } else {
        let table = source.fetch_checksums().await?;
        for version in version_plan.missing {
            let checksum = resolve_checksum(source, &version, &table).await?;
            resolved.insert(version, checksum);
        }
    }

    let manifest = Manifest {
        releases,
        versions: merge(resolved, version_plan.retained),
    };
    store.save(&manifest)?;

    Ok(manifest)
}
