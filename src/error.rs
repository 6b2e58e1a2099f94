use thiserror::Error;

use crate::flags::errors::FlagError;
use crate::merge::errors::MergeError;

#[derive(Debug, Error)]
pub enum FlagutilError {
    #[error(transparent)]
    Flag(#[from] FlagError),

    #[error(transparent)]
    Merge(#[from] MergeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid override '{0}': expected NAME=VALUE")]
    InvalidOverride(String),
}
