pub mod cache;
pub mod collection;
pub mod fingerprint;

pub use cache::CachingTestFinder;
pub use collection::TestCollection;
pub use fingerprint::CacheVersion;
pub use test::Test;

use std::path::Path;

use walkdir::WalkDir;

use crate::error::{DiscoveryError, Result};

/// Boundary to the source-language analyzer that decides which declarations
/// in a file are runnable tests. The analyzer itself lives in the host
/// runner; this core only ever sees the trait.
///
/// Takes `&mut self` so implementations can keep internal state between
/// lookups (the caching decorator does).
pub trait TestFinder {
    fn find_tests_in(&mut self, path: &Path) -> Result<TestCollection>;
}

/// Discovers tests in every file under `directory` whose extension matches
/// `extension` (without the dot), merging per-file collections in sorted
/// walk order so the result is stable across platforms.
pub fn find_tests_in_directory<F>(
    finder: &mut F,
    directory: &Path,
    extension: &str,
) -> Result<TestCollection>
where
    F: TestFinder + ?Sized,
{
    let mut tests = TestCollection::new();

    for entry in WalkDir::new(directory).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(directory).to_path_buf();
            DiscoveryError::unreadable(path, e.into())
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        if entry.path().extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }

        tests = tests.merge_with(&finder.find_tests_in(entry.path())?);
    }

    Ok(tests)
}
