//! REST-specific error types for the Recharge API SDK.
//!
//! - [`RestError::InvalidPath`]: When a REST API path fails validation
//! - [`RestError::Http`]: Wraps underlying HTTP errors
//!
//! # Example
//!
//! ```rust,ignore
//! use recharge_api::clients::rest::{RestClient, RestError};
//!
//! match client.get("products", None, &ApiVersion::V2021_01).await {
//!     Ok(response) => println!("Products: {}", response.body),
//!     Err(RestError::InvalidPath { path }) => println!("Invalid path: {}", path),
//!     Err(RestError::Http(e)) => println!("HTTP error: {}", e),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for REST API operations.
///
/// # Example
///
/// ```rust
/// use recharge_api::clients::rest::RestError;
///
/// let error = RestError::InvalidPath { path: "".to_string() };
/// assert!(error.to_string().contains("Invalid"));
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The REST API path is empty after normalization.
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl RestError {
    /// Returns the HTTP status code, if the error came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            Self::InvalidPath { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpResponseError, MaxHttpRetriesExceededError};

    #[test]
    fn test_invalid_path_error_with_empty_path() {
        let error = RestError::InvalidPath {
            path: String::new(),
        };
        assert_eq!(error.to_string(), "Invalid REST API path: ");
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_http_error_wraps_http_response_error() {
        let http_error = HttpError::Response(HttpResponseError {
            code: 404,
            message: r#"{"errors":"Not Found"}"#.to_string(),
            error_reference: Some("abc-123".to_string()),
        });
        let rest_error: RestError = http_error.into();

        assert_eq!(rest_error.to_string(), r#"{"errors":"Not Found"}"#);
        assert_eq!(rest_error.status(), Some(404));
    }

    #[test]
    fn test_http_error_wraps_max_retries_error() {
        let rest_error = RestError::Http(HttpError::MaxRetries(MaxHttpRetriesExceededError {
            code: 429,
            tries: 2,
            message: "{}".to_string(),
            error_reference: None,
        }));

        assert!(rest_error.to_string().contains("Exceeded maximum retry count of 2"));
        assert_eq!(rest_error.status(), Some(429));
    }
}
