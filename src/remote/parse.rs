//! Parsers for the archive page, the releases API and the checksum listing

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::RemoteError;
use crate::manifest::{Checksum, Releases, Version};

/// Filename to checksum, as published in the checksum listing
pub type ChecksumTable = HashMap<String, Checksum>;

/// Archive links: `/download/archive/<version>`
static ARCHIVE_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/download/archive/([\d.]+)").expect("archive link pattern is valid")
});

/// Extracts every archived version linked from `page`, in page order.
pub fn parse_archive_versions(page: &str) -> Vec<Version> {
    ARCHIVE_LINK_RE
        .captures_iter(page)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Extracts the channel pointers from the latest-releases payload.
///
/// `stable.headless` is required. A missing or malformed
/// `experimental.headless` falls back to the stable version.
pub fn parse_releases(body: &str) -> Result<Releases, RemoteError> {
    let payload: Value = serde_json::from_str(body)
        .map_err(|e| RemoteError::InvalidResponse(format!("latest releases: {e}")))?;

    let stable = headless_version(&payload, "stable").ok_or_else(|| {
        RemoteError::InvalidResponse("latest releases: missing stable.headless".to_string())
    })?;
    let experimental = headless_version(&payload, "experimental").unwrap_or(stable);

    Ok(Releases::new(stable, experimental))
}

fn headless_version<'a>(payload: &'a Value, channel: &str) -> Option<&'a str> {
    payload.get(channel)?.get("headless")?.as_str()
}

/// Builds the filename to checksum table from `<checksum> <filename>` pairs.
///
/// Tokens are reversed and grouped two at a time into `(filename, checksum)`,
/// so when a filename repeats, its first listing wins. An odd token count
/// cannot be paired reliably and is rejected.
pub fn parse_checksum_table(listing: &str) -> Result<ChecksumTable, RemoteError> {
    let tokens: Vec<&str> = listing.split_whitespace().rev().collect();

    if tokens.len() % 2 != 0 {
        return Err(RemoteError::InvalidResponse(format!(
            "checksum listing has an odd number of tokens ({})",
            tokens.len()
        )));
    }

    let table = tokens
        .chunks_exact(2)
        .map(|pair| (pair[0].to_string(), pair[1].to_string()))
        .collect();

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parse_archive_versions_extracts_versions_in_page_order() {
        let page = r#"
            <a href="/download/archive/2.0.28">2.0.28</a>
            <a href="/download/archive/1.1.110">1.1.110</a>
            <a href="/download/archive/0.6.4">0.6.4</a>
        "#;

        assert_eq!(
            parse_archive_versions(page),
            vec!["2.0.28", "1.1.110", "0.6.4"]
        );
    }

    #[test]
    fn parse_archive_versions_keeps_duplicates() {
        let page = r#"<a href="/download/archive/1.0.0">x</a><a href="/download/archive/1.0.0">y</a>"#;

        assert_eq!(parse_archive_versions(page), vec!["1.0.0", "1.0.0"]);
    }

    #[rstest]
    #[case("")]
    #[case("<html>no links here</html>")]
    #[case(r#"<a href="/download/archive/">latest</a>"#)]
    #[case(r#"<a href="/download/sha256sums/">sums</a>"#)]
    fn parse_archive_versions_ignores_non_version_links(#[case] page: &str) {
        assert!(parse_archive_versions(page).is_empty());
    }

    #[test]
    fn parse_archive_versions_stops_at_non_version_characters() {
        let page = r#"<a href="/download/archive/1.1.110/alpha">"#;

        assert_eq!(parse_archive_versions(page), vec!["1.1.110"]);
    }

    #[test]
    fn parse_releases_reads_both_channels() {
        let body = r#"{
            "stable": {"alpha": "2.0.28", "headless": "2.0.28"},
            "experimental": {"alpha": "2.0.30", "headless": "2.0.30"}
        }"#;

        assert_eq!(
            parse_releases(body).unwrap(),
            Releases::new("2.0.28", "2.0.30")
        );
    }

    #[rstest]
    #[case(r#"{"stable":{"headless":"1.2.3"}}"#)]
    #[case(r#"{"stable":{"headless":"1.2.3"},"experimental":null}"#)]
    #[case(r#"{"stable":{"headless":"1.2.3"},"experimental":"1.3.0"}"#)]
    #[case(r#"{"stable":{"headless":"1.2.3"},"experimental":{"alpha":"1.3.0"}}"#)]
    #[case(r#"{"stable":{"headless":"1.2.3"},"experimental":{"headless":42}}"#)]
    fn parse_releases_falls_back_to_stable_for_experimental(#[case] body: &str) {
        assert_eq!(
            parse_releases(body).unwrap(),
            Releases::new("1.2.3", "1.2.3")
        );
    }

    #[rstest]
    #[case("not json")]
    #[case("[]")]
    #[case(r#"{}"#)]
    #[case(r#"{"stable":null}"#)]
    #[case(r#"{"stable":{"alpha":"1.2.3"}}"#)]
    #[case(r#"{"experimental":{"headless":"1.2.3"}}"#)]
    fn parse_releases_rejects_malformed_stable(#[case] body: &str) {
        assert!(matches!(
            parse_releases(body),
            Err(RemoteError::InvalidResponse(_))
        ));
    }

    #[test]
    fn parse_checksum_table_pairs_filename_with_preceding_checksum() {
        let table = parse_checksum_table("h1 f1\nh2 f2\n").unwrap();

        assert_eq!(
            table,
            ChecksumTable::from([
                ("f1".to_string(), "h1".to_string()),
                ("f2".to_string(), "h2".to_string()),
            ])
        );
    }

    #[test]
    fn parse_checksum_table_keeps_first_listing_of_repeated_filename() {
        let table = parse_checksum_table("h1 f1\nh2 f1\n").unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table["f1"], "h1");
    }

    #[rstest]
    #[case("")]
    #[case("   \n\t\n")]
    fn parse_checksum_table_accepts_empty_listing(#[case] listing: &str) {
        assert!(parse_checksum_table(listing).unwrap().is_empty());
    }

    #[rstest]
    #[case("h1")]
    #[case("h1 f1 h2")]
    fn parse_checksum_table_rejects_odd_token_count(#[case] listing: &str) {
        assert!(matches!(
            parse_checksum_table(listing),
            Err(RemoteError::InvalidResponse(_))
        ));
    }
}
