//! Permissions error types.

use thiserror::Error;

/// Errors from loading profile options.
///
/// Requirement inference and the sufficiency check are total and never fail;
/// only reading options from disk or text can.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Failed to parse profile options.
    #[error("failed to parse options: {0}")]
    Parse(String),

    /// An I/O error occurred while reading options.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
