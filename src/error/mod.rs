mod aggregate;
mod discovery;
mod storage;

pub use aggregate::AggregateError;
pub use discovery::DiscoveryError;
pub use storage::StorageError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Aggregate(#[from] AggregateError),
}

pub type Result<T> = std::result::Result<T, Error>;
