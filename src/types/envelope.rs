//! The response envelope returned by every API call.

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// Raw transport metadata paired with a typed, possibly-absent payload.
///
/// Transport success and parse success are independent signals. `ok()` only
/// says the status was 2xx; `data` is `Some` only if the body matched the
/// expected shape. A 200 with an unparsable body is `ok() == true` with
/// `data == None`, and a 404 carrying a structured error body can still have
/// `data == Some(..)` when the type tolerates it. Callers check both.
#[derive(Debug)]
pub struct ApiResponse<T> {
    /// HTTP status code of the response.
    pub status: StatusCode,
    /// Response headers, unmodified.
    pub headers: HeaderMap,
    /// The raw response body, kept for diagnostics.
    pub raw_body: String,
    /// The body parsed into `T`, or `None` if it did not conform.
    pub data: Option<T>,
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Wraps a raw response, attempting the body parse unconditionally.
    ///
    /// The parse is attempted even on failure statuses because some error
    /// responses carry structured bodies the caller wants typed access to.
    pub fn wrap(status: StatusCode, headers: HeaderMap, raw_body: String) -> Self {
        let data = match serde_json::from_str::<T>(&raw_body) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::debug!("response body did not match expected shape: {}", e);
                None
            }
        };
        Self {
            status,
            headers,
            raw_body,
            data,
        }
    }
}

impl<T> ApiResponse<T> {
    /// True iff the status is in the 200-299 range. Says nothing about
    /// whether the body parsed.
    pub fn ok(&self) -> bool {
        self.status.is_success()
    }
}
