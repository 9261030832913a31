use anyhow::Context;
use clap::Parser;

use factorio_versions::config::{Endpoints, manifest_path};
use factorio_versions::logging::init_logging;
use factorio_versions::manifest::ManifestStore;
use factorio_versions::remote::FactorioSource;
use factorio_versions::updater::update;

#[derive(Parser)]
#[command(name = "factorio-versions")]
#[command(
    version,
    about = "Refresh versions.json from the Factorio archive, checksum listing and releases API"
)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    Cli::parse();
    init_logging();

    let source =
        FactorioSource::new(Endpoints::default()).context("Failed to create HTTP client")?;
    let store = ManifestStore::new(manifest_path());

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(update(&source, &store))
        .with_context(|| format!("Failed to update {}", store.path().display()))?;

    Ok(())
}
