//! Typed failures for gateway requests.

use thiserror::Error;

/// Cap on buffered error bodies; anything longer is truncated.
const MAX_ERROR_BODY_BYTES: usize = 32 * 1024;

/// What went wrong while talking to the lore API.
///
/// The first three variants distinguish where in the request lifecycle the
/// failure occurred: before a response arrived, on a non-2xx status, or while
/// decoding the body. [`ApiError::Cancelled`] signals intentional cooperative
/// termination and must not be reported as a failure.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, DNS, or timeout failure before any response was obtained.
    #[error("transport failure")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a non-2xx status. `body` is a capped excerpt.
    #[error("unexpected HTTP status {status}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body did not match the expected JSON shape.
    #[error("failed to decode response body")]
    Decode(#[source] serde_json::Error),

    /// The request was stopped via cooperative cancellation.
    #[error("request cancelled")]
    Cancelled,
}

impl ApiError {
    /// Numeric status code, when the server produced a response.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(status.as_u16()),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Read an error response body without buffering more than
/// [`MAX_ERROR_BODY_BYTES`] of it.
pub(crate) async fn read_capped_error_body(response: reqwest::Response) -> String {
    use futures_util::StreamExt;

    let mut body = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let Ok(chunk) = chunk else { break };
        body.extend_from_slice(&chunk);
        if body.len() > MAX_ERROR_BODY_BYTES {
            body.truncate(MAX_ERROR_BODY_BYTES);
            let text = String::from_utf8_lossy(&body);
            return format!("{text}...(truncated)");
        }
    }
    String::from_utf8_lossy(&body).into_owned()
}

#[cfg(test)]
mod tests {
    use super::ApiError;

    #[test]
    fn status_code_is_exposed_for_status_errors() {
        let err = ApiError::Status {
            status: reqwest::StatusCode::NOT_FOUND,
            body: String::new(),
        };
        assert_eq!(err.status_code(), Some(404));
        assert!(!err.is_cancelled());
    }

    #[test]
    fn cancelled_is_not_a_status_failure() {
        let err = ApiError::Cancelled;
        assert_eq!(err.status_code(), None);
        assert!(err.is_cancelled());
    }
}
