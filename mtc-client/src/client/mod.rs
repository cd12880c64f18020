//! Client module - HTTP transports.
//!
//! [`HttpClient`] is the seam between typed API calls and the wire. The
//! network implementation talks to the backend over reqwest; the oneshot
//! implementation (feature `in-process`) calls an axum `Router` in memory.

pub mod http;
#[cfg(feature = "in-process")]
pub mod http_oneshot;

pub use http::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use http_oneshot::OneshotHttpClient;

use serde::de::DeserializeOwned;

use crate::error::{ClientError, ClientResult, error_message};

/// Ensure a request path starts with exactly one `/`
pub(crate) fn normalize_path(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/'))
}

/// Decode a response body, or map a failure status to a [`ClientError`]
pub(crate) fn decode_body<T: DeserializeOwned>(status: u16, body: &[u8]) -> ClientResult<T> {
    if !(200..300).contains(&status) {
        let text = String::from_utf8_lossy(body);
        return Err(ClientError::from_status(status, error_message(&text)));
    }
    serde_json::from_slice(body)
        .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {}", e)))
}
