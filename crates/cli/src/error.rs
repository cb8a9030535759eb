//! CLI error types.

use crate::config::ConfigError;
use thiserror::Error;

/// CLI errors.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Configuration could not be read or parsed.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Profile options could not be loaded.
    #[error(transparent)]
    Options(#[from] permissions::Error),

    /// The permission host reported an error.
    #[error(transparent)]
    Host(#[from] host::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
