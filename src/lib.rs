/// Test Runner Core
///
/// Discovery caching and diagnostic aggregation for a PHP test runner:
/// a content-addressed cache around a pluggable test finder, and an
/// aggregator that collapses run diagnostics into grouped report elements.
pub mod error;
pub mod finder;
pub mod issues;
pub mod logging;

pub use error::{Error, Result};
pub use finder::{CacheVersion, CachingTestFinder, Test, TestCollection, TestFinder};
pub use issues::{IssueAggregator, IssueCategory, IssueEvent, ReportElement};
