use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while analyzing a source file for tests. These are never
/// cached; a retried lookup re-attempts discovery.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("cannot analyze {path}: {message}")]
    CannotAnalyze { path: PathBuf, message: String },

    #[error("failed to read source file '{path}': {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl DiscoveryError {
    pub fn cannot_analyze(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::CannotAnalyze {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Unreadable {
            path: path.into(),
            source,
        }
    }
}
