//! Error types for the API client.

use thiserror::Error;

/// Errors that can occur when making API requests.
///
/// Non-2xx statuses are not represented here: the raw status and headers are
/// returned on the [`ApiResponse`](crate::types::ApiResponse) envelope and
/// callers decide per endpoint whether they are fatal.
#[derive(Error, Debug)]
pub enum Error {
    /// A path template was given the wrong number of positional parameters.
    #[error("path template expects {expected} parameters, got {given}")]
    PathParamCount { expected: usize, given: usize },
    /// The base URL and path did not combine into a parseable URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    /// The target carries a storage method this client does not know how to
    /// initiate uploads for. Raised before any network call is made.
    #[error("unsupported storage method {0:?}")]
    UnsupportedStorageMethod(String),
    /// The target's storage method requires an upload URL that is not set.
    #[error("target has no upload URL for storage method {0}")]
    MissingUploadUrl(&'static str),
    /// Part numbers are 1-based positive integers.
    #[error("part numbers are 1-based, got {0}")]
    InvalidPartNumber(i64),
    /// The provider accepted the upload initiation but did not return the
    /// header carrying the session id.
    #[error("provider response missing header {0}")]
    MissingUploadIdHeader(&'static str),
    /// The provider's multipart initiation body could not be parsed.
    #[error("malformed multipart initiation response")]
    MalformedInitiationBody,
    /// A resource needed to continue (e.g. a proxy record) could not be
    /// loaded or parsed.
    #[error("{kind} {id} unavailable (status {status})")]
    ResourceUnavailable {
        kind: &'static str,
        id: String,
        status: u16,
    },
    /// An HTTP request failed at the transport level (connect, TLS, timeout).
    #[error("request failed")]
    Transport(#[from] reqwest::Error),
}
