//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias.
//! Variants cover invalid field configuration, unknown distribution names, rejection
//! sampling that does not converge, and IO while writing serialized fields.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unsupported distribution '{0}'")]
    UnsupportedDistribution(String),

    #[error("{strategy} sampling did not converge after {attempts} attempts")]
    NotConverging {
        strategy: &'static str,
        attempts: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
