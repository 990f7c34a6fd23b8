use std::path::Path;

use sha2::{Digest, Sha256};

/// Version stamp of the discovery/caching logic itself, bound into every
/// entry fingerprint so prior entries go stale whenever the logic changes,
/// without a manual version bump.
///
/// Computed once by the caller and passed into `CachingTestFinder` at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheVersion(String);

impl CacheVersion {
    /// Hash over the sources of every module participating in discovery
    /// caching, embedded at compile time. Editing any of them (including
    /// the on-disk entry format constant) yields a different version.
    pub fn current() -> Self {
        let mut hasher = Sha256::new();

        for source in [
            include_str!("cache.rs"),
            include_str!("collection.rs"),
            include_str!("fingerprint.rs"),
            include_str!("mod.rs"),
            include_str!("test.rs"),
        ] {
            hasher.update(source.as_bytes());
            hasher.update([0]);
        }

        Self(hex::encode(hasher.finalize()))
    }

    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Cache key for one file: SHA-256 over path, contents, and logic version,
/// NUL-separated. Hex-encoded, so it doubles as the entry file name.
pub fn fingerprint(path: &Path, contents: &[u8], version: &CacheVersion) -> String {
    let mut hasher = Sha256::new();

    hasher.update(path.to_string_lossy().as_bytes());
    hasher.update([0]);
    hasher.update(contents);
    hasher.update([0]);
    hasher.update(version.as_str().as_bytes());

    hex::encode(hasher.finalize())
}
