//! Error types for `YouTube` Data API operations.
//!
//! Every fallible operation in this crate fails with one of two kinds:
//!
//! - [`LikelyBugError`]: the library or the shape of an API response broke an
//!   invariant (a documented field was missing, a value had an unknown form).
//!   Retrying will not help; the fix is a bug report.
//! - [`YouTubeApiError`]: the API rejected or failed the call. It carries the
//!   status code the API returned so callers can decide what to do with it.

use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Message used when the transport fails without a recognizable status code.
pub const UNEXPECTED_API_FAILURE: &str =
    "An unexpected error occurred in the call to the YouTube API.";

/// An invariant violation that is most likely a bug in this library.
///
/// If you encounter this error, please report it together with the debug
/// logs of the failing call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LikelyBugError {
    /// Human-readable description of the violated invariant.
    pub message: String,
}

impl LikelyBugError {
    /// Create a new likely-bug error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// An error response from the `YouTube` Data API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{code}] {message}")]
pub struct YouTubeApiError {
    /// HTTP status code reported by the API.
    pub code: u16,
    /// Error message reported by the API.
    pub message: String,
}

impl YouTubeApiError {
    /// Create a new API error.
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// The two kinds of failure an operation can end with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// See [`LikelyBugError`].
    LikelyBug,
    /// See [`YouTubeApiError`].
    YouTubeApi,
}

/// Errors that can occur in `YouTube` Data API operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Response shape or library invariant violated.
    #[error(transparent)]
    LikelyBug(#[from] LikelyBugError),

    /// The API rejected or failed the call.
    #[error(transparent)]
    YouTubeApi(#[from] YouTubeApiError),
}

impl Error {
    /// Create a likely-bug error.
    pub fn likely_bug(message: impl Into<String>) -> Self {
        Self::LikelyBug(LikelyBugError::new(message))
    }

    /// Create an API error.
    pub fn youtube_api(code: u16, message: impl Into<String>) -> Self {
        Self::YouTubeApi(YouTubeApiError::new(code, message))
    }

    /// Which of the two kinds this error is.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::LikelyBug(_) => ErrorKind::LikelyBug,
            Self::YouTubeApi(_) => ErrorKind::YouTubeApi,
        }
    }

    /// Whether this error signals a library or response-shape bug.
    pub const fn is_likely_bug(&self) -> bool {
        matches!(self, Self::LikelyBug(_))
    }

    /// Whether this error came from the API.
    pub const fn is_youtube_api(&self) -> bool {
        matches!(self, Self::YouTubeApi(_))
    }

    /// The status code reported by the API, if this is an API error.
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::LikelyBug(_) => None,
            Self::YouTubeApi(err) => Some(err.code),
        }
    }

    /// The error message without the status code prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::LikelyBug(err) => &err.message,
            Self::YouTubeApi(err) => &err.message,
        }
    }
}
