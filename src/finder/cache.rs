use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{DiscoveryError, Result, StorageError};

use super::fingerprint::{fingerprint, CacheVersion};
use super::{TestCollection, TestFinder};

/// On-disk entry format version. Lives in this file so that bumping it also
/// changes the logic-version hash derived from these sources.
const ENTRY_FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct Entry {
    version: u32,
    tests: TestCollection,
}

/// Decorator around a `TestFinder` that persists discovery results, keyed
/// by a fingerprint of the file's path, contents, and the logic version.
///
/// Entries live as one file per fingerprint in a flat directory; a changed
/// fingerprint produces a new entry and the stale one is simply never read
/// again. Results are additionally memoized in memory per file path for the
/// lifetime of this value, so repeat lookups do no disk I/O or hashing.
pub struct CachingTestFinder<F> {
    directory: PathBuf,
    version: CacheVersion,
    finder: F,
    resolved: HashMap<PathBuf, TestCollection>,
}

impl<F: TestFinder> CachingTestFinder<F> {
    /// Creates the cache directory if it does not exist yet.
    pub fn new(directory: impl Into<PathBuf>, version: CacheVersion, finder: F) -> Result<Self> {
        let directory = directory.into();

        fs::create_dir_all(&directory)
            .map_err(|e| StorageError::create_directory(&directory, e))?;

        Ok(Self {
            directory,
            version,
            finder,
            resolved: HashMap::new(),
        })
    }

    pub fn find_tests_in(&mut self, path: &Path) -> Result<TestCollection> {
        if let Some(tests) = self.resolved.get(path) {
            return Ok(tests.clone());
        }

        let tests = self.process(path)?;
        self.resolved.insert(path.to_path_buf(), tests.clone());

        Ok(tests)
    }

    fn process(&mut self, path: &Path) -> Result<TestCollection> {
        let contents = fs::read(path).map_err(|e| DiscoveryError::unreadable(path, e))?;
        let entry_file = self
            .directory
            .join(fingerprint(path, &contents, &self.version));

        if let Some(tests) = self.read(&entry_file)? {
            debug!(path = %path.display(), "discovery cache hit");
            return Ok(tests);
        }

        debug!(path = %path.display(), "discovery cache miss");
        let tests = self.finder.find_tests_in(path)?;
        self.write(&entry_file, &tests)?;

        Ok(tests)
    }

    fn read(&self, entry_file: &Path) -> Result<Option<TestCollection>> {
        if !entry_file.is_file() {
            return Ok(None);
        }

        let raw = fs::read(entry_file).map_err(|e| StorageError::read_entry(entry_file, e))?;

        // A corrupt or outdated entry is a forced miss; rediscovery overwrites it.
        match serde_json::from_slice::<Entry>(&raw) {
            Ok(entry) if entry.version == ENTRY_FORMAT_VERSION => Ok(Some(entry.tests)),
            Ok(entry) => {
                warn!(
                    path = %entry_file.display(),
                    version = entry.version,
                    "discarding cache entry with unexpected format version"
                );
                Ok(None)
            }
            Err(error) => {
                warn!(
                    path = %entry_file.display(),
                    %error,
                    "discarding unreadable cache entry"
                );
                Ok(None)
            }
        }
    }

    fn write(&self, entry_file: &Path, tests: &TestCollection) -> Result<()> {
        let entry = Entry {
            version: ENTRY_FORMAT_VERSION,
            tests: tests.clone(),
        };

        let raw = serde_json::to_vec(&entry)
            .map_err(|e| StorageError::encode_entry(entry_file, e.to_string()))?;

        fs::write(entry_file, raw).map_err(|e| StorageError::write_entry(entry_file, e))?;

        Ok(())
    }
}

impl<F: TestFinder> TestFinder for CachingTestFinder<F> {
    fn find_tests_in(&mut self, path: &Path) -> Result<TestCollection> {
        CachingTestFinder::find_tests_in(self, path)
    }
}
