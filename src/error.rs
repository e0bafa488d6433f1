//! Error types shared by the ranking store and its HTTP surface.

use thiserror::Error;

/// Failures reported to callers.
///
/// The simulation never fails; only ranking requests and the plumbing around
/// them produce these.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or out-of-domain input (bad difficulty key, empty username,
    /// non-numeric score).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Anything else (serialization, I/O, poisoned locks).
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl Error {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub fn unexpected(msg: impl Into<String>) -> Self {
        Error::Unexpected(msg.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Unexpected(format!("serialization: {e}"))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Unexpected(format!("io: {e}"))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
