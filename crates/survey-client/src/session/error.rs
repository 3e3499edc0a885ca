//! Session storage errors

use thiserror::Error;

/// Session storage error
#[derive(Debug, Error)]
pub enum Error {
    /// No storage in this environment
    #[error("Session storage is unavailable")]
    Unavailable,
    /// Reading or writing the backing file failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Stored data could not be encoded or decoded
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    /// A lock guarding the storage was poisoned
    #[error("Session storage lock poisoned")]
    Poisoned,
    /// Browser storage call failed
    #[error("Browser storage error: {0}")]
    Browser(String),
}
