use std::path::PathBuf;

// =============================================================================
// Remote endpoints
// =============================================================================

/// Archive page listing every published version
pub const DEFAULT_ARCHIVE_URL: &str = "https://www.factorio.com/download/archive/";

/// Latest releases API, one entry per release channel
pub const DEFAULT_RELEASES_URL: &str = "https://factorio.com/api/latest-releases";

/// Flat `<sha256> <filename>` listing
pub const DEFAULT_CHECKSUMS_URL: &str = "https://factorio.com/download/sha256sums/";

/// Prefix of the direct download link, completed by `<version>/headless/linux64`
pub const DEFAULT_DOWNLOAD_URL: &str = "https://www.factorio.com/get-download";

// =============================================================================
// Manifest
// =============================================================================

/// Manifest location, relative to the working directory
pub const DEFAULT_MANIFEST_PATH: &str = "./versions.json";

/// Indentation used when writing the manifest
pub const MANIFEST_INDENT: &[u8] = b"    ";

/// Artifact filenames looked up in the checksum table, in priority order.
/// `{version}` is replaced by the version being resolved.
pub const CHECKSUM_FILENAME_TEMPLATES: [&str; 2] = [
    "factorio-headless_linux_{version}.tar.xz",
    "factorio_headless_x64_{version}.tar.xz",
];

pub const USER_AGENT: &str = concat!("factorio-versions/", env!("CARGO_PKG_VERSION"));

/// Remote endpoints consumed by a run
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    pub archive_url: String,
    pub releases_url: String,
    pub checksums_url: String,
    pub download_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            archive_url: DEFAULT_ARCHIVE_URL.to_string(),
            releases_url: DEFAULT_RELEASES_URL.to_string(),
            checksums_url: DEFAULT_CHECKSUMS_URL.to_string(),
            download_url: DEFAULT_DOWNLOAD_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// Derives every endpoint from a single host, keeping the vendor's paths.
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            archive_url: format!("{base}/download/archive/"),
            releases_url: format!("{base}/api/latest-releases"),
            checksums_url: format!("{base}/download/sha256sums/"),
            download_url: format!("{base}/get-download"),
        }
    }

    /// Direct download link of the linux64 headless build
    pub fn headless_download_url(&self, version: &str) -> String {
        format!(
            "{}/{}/headless/linux64",
            self.download_url.trim_end_matches('/'),
            version
        )
    }
}

/// Returns the path of the manifest file.
pub fn manifest_path() -> PathBuf {
    PathBuf::from(DEFAULT_MANIFEST_PATH)
}

/// Expands a checksum filename template for `version`.
pub fn checksum_filename(template: &str, version: &str) -> String {
    template.replace("{version}", version)
}
