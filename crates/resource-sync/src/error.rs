//! # Synchronization Errors
//!
//! Every failure the framework can produce is a [`SyncError`]. The store never
//! branches on the variant: it records `to_string()` as the collection's
//! `last_error` and surfaces it verbatim. The variants exist so that callers and
//! tests can still tell a rejected draft from a network failure when they need to.

/// Errors produced by remote clients, id policies and boundary validation.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum SyncError {
    /// The request never produced a response (connection refused, DNS, timeout).
    #[error("Network error: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("Request failed with status code {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be decoded into the expected shape.
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// An existing id could not be parsed while computing the next numeric id.
    #[error("Cannot derive next id: existing id {0:?} is not numeric")]
    MalformedId(String),

    /// The server answered an update with a record carrying another id.
    #[error("Update of {requested:?} returned record {returned:?}")]
    IdMismatch { requested: String, returned: String },

    /// A draft or patch was rejected before any request was sent.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A raw patch named a field the resource does not have, or had a wrong type.
    #[error("Invalid patch: {0}")]
    InvalidPatch(String),

    /// Configuration could not be turned into a working client.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for SyncError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            SyncError::Decode(e.to_string())
        } else {
            SyncError::Transport(e.to_string())
        }
    }
}

impl From<url::ParseError> for SyncError {
    fn from(e: url::ParseError) -> Self {
        SyncError::Config(e.to_string())
    }
}

/// Convenience alias used throughout the crate.
pub type SyncResult<T> = Result<T, SyncError>;
