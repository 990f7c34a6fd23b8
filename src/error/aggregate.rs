use thiserror::Error;

/// Inconsistencies in the event stream handed to the issue aggregator.
#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("cannot describe test method '{name}': owning scope is missing")]
    MissingScope { name: String },
}

impl AggregateError {
    pub fn missing_scope(name: impl Into<String>) -> Self {
        Self::MissingScope { name: name.into() }
    }
}
