use thiserror::Error;

/// Host errors.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The host reported an error for a permission query, request or removal.
    #[error("host permission query failed: {0}")]
    QueryFailed(String),
}

pub type Result<T> = std::result::Result<T, Error>;
