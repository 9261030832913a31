//! Reconciling the previous manifest against the archive listing

use std::collections::HashSet;

use crate::manifest::{Version, VersionMap};

/// What a run has to do with the versions it knows about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionPlan {
    /// Previously recorded versions that are still listed, in prior order
    pub retained: VersionMap,
    /// Listed versions with no recorded checksum, in listing order, deduplicated
    pub missing: Vec<Version>,
    /// Number of previously recorded versions that are no longer listed
    pub dropped: usize,
}

/// Splits `available` into versions to keep and versions to resolve.
pub fn plan(previous: VersionMap, available: &[Version]) -> VersionPlan {
    let listed: HashSet<&str> = available.iter().map(String::as_str).collect();

    let mut seen = HashSet::new();
    let mut missing = Vec::new();
    for version in available {
        if !previous.contains_key(version.as_str()) && seen.insert(version.as_str()) {
            missing.push(version.clone());
        }
    }

    let previous_len = previous.len();
    let retained: VersionMap = previous
        .into_iter()
        .filter(|(version, _)| listed.contains(version.as_str()))
        .collect();

    VersionPlan {
        dropped: previous_len - retained.len(),
        retained,
        missing,
    }
}

/// Combines newly resolved versions with retained ones.
///
/// Resolved versions come first; on a key collision the resolved value wins.
pub fn merge(resolved: VersionMap, retained: VersionMap) -> VersionMap {
    let mut merged = resolved;
    for (version, checksum) in retained {
        merged.entry(version).or_insert(checksum);
    }
    merged
}
