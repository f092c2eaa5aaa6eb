//! Resource-specific error types for REST API operations.
//!
//! This module contains the error type returned by every resource call. It
//! extends [`RestError`](crate::clients::RestError) with scope rejections and
//! resource semantics like `NotFound` and `ValidationFailed`.
//!
//! # Error Handling
//!
//! - **Missing scopes**: [`ResourceError::Scope`], raised before any request is sent
//! - **404**: [`ResourceError::NotFound`] - Resource doesn't exist
//! - **422**: [`ResourceError::ValidationFailed`] - Validation errors from the API
//! - **Other 4xx/5xx**: [`ResourceError::Http`] or [`ResourceError::Rest`]
//!
//! # Example
//!
//! ```rust,ignore
//! use recharge_api::rest::ResourceError;
//!
//! match client.addresses().get(123).await {
//!     Ok(address) => println!("Found: {:?}", address.address1),
//!     Err(ResourceError::Scope(e)) => println!("Token cannot do this: {}", e),
//!     Err(ResourceError::NotFound { resource, id }) => {
//!         println!("{} with id {} not found", resource, id);
//!     }
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

use std::collections::HashMap;

use crate::auth::ScopeError;
use crate::clients::{HttpError, HttpResponseError, RestError};
use thiserror::Error;

/// Error type for REST resource operations.
///
/// # Example
///
/// ```rust
/// use recharge_api::rest::ResourceError;
/// use std::collections::HashMap;
///
/// let error = ResourceError::NotFound {
///     resource: "Address",
///     id: "123".to_string(),
/// };
/// assert_eq!(error.to_string(), "Address with id 123 not found");
///
/// let mut errors = HashMap::new();
/// errors.insert("zip".to_string(), vec!["is invalid".to_string()]);
/// let error = ResourceError::ValidationFailed {
///     errors,
///     request_id: Some("abc-123".to_string()),
/// };
/// assert!(error.to_string().contains("Validation failed"));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The token lacks the scopes the endpoint requires.
    #[error(transparent)]
    Scope(#[from] ScopeError),

    /// The resource was not found (HTTP 404).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The type name of the resource (e.g., "Address", "Discount").
        resource: &'static str,
        /// The ID that was requested.
        id: String,
    },

    /// Validation failed for the resource (HTTP 422).
    #[error("Validation failed: {errors:?}")]
    ValidationFailed {
        /// A map of field names to error messages.
        errors: HashMap<String, Vec<String>>,
        /// The request ID for debugging (from X-Request-Id header).
        request_id: Option<String>,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A REST-level error occurred.
    #[error(transparent)]
    Rest(#[from] RestError),

    /// A request body or query could not be serialized, or a response could
    /// not be decoded.
    #[error("Failed to process resource data: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ResourceError {
    /// Creates a `ResourceError` from an HTTP status code and error body.
    ///
    /// Maps HTTP status codes to semantic error variants:
    /// - 404 -> `NotFound`
    /// - 422 -> `ValidationFailed` (parsing errors from body)
    /// - Other -> `Http`
    ///
    /// # Example
    ///
    /// ```rust
    /// use recharge_api::rest::ResourceError;
    /// use serde_json::json;
    ///
    /// let error = ResourceError::from_http_response(
    ///     404,
    ///     &json!({"errors": "Not Found"}),
    ///     "Product",
    ///     Some("123"),
    ///     Some("req-123"),
    /// );
    /// assert!(matches!(error, ResourceError::NotFound { .. }));
    /// ```
    #[must_use]
    pub fn from_http_response(
        code: u16,
        body: &serde_json::Value,
        resource: &'static str,
        id: Option<&str>,
        request_id: Option<&str>,
    ) -> Self {
        match code {
            404 => Self::NotFound {
                resource,
                id: id.unwrap_or("unknown").to_string(),
            },
            422 => Self::ValidationFailed {
                errors: parse_validation_errors(body),
                request_id: request_id.map(ToString::to_string),
            },
            _ => Self::Http(HttpError::Response(HttpResponseError {
                code,
                message: body.to_string(),
                error_reference: request_id.map(ToString::to_string),
            })),
        }
    }

    /// Maps an error returned by [`RestClient`](crate::clients::RestClient)
    /// to its resource-level meaning.
    ///
    /// 404 and 422 responses become `NotFound` and `ValidationFailed`. Every
    /// other error is wrapped unchanged.
    #[must_use]
    pub fn from_rest_error(error: RestError, resource: &'static str, id: Option<&str>) -> Self {
        match error {
            RestError::Http(HttpError::Response(response)) if matches!(response.code, 404 | 422) => {
                let body = serde_json::from_str(&response.message)
                    .unwrap_or_else(|_| serde_json::json!({ "errors": response.message }));
                Self::from_http_response(
                    response.code,
                    &body,
                    resource,
                    id,
                    response.error_reference.as_deref(),
                )
            }
            other => Self::Rest(other),
        }
    }

    /// Returns the request ID if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::ValidationFailed { request_id, .. } => request_id.as_deref(),
            Self::Http(HttpError::Response(e))
            | Self::Rest(RestError::Http(HttpError::Response(e))) => e.error_reference.as_deref(),
            Self::Http(HttpError::MaxRetries(e))
            | Self::Rest(RestError::Http(HttpError::MaxRetries(e))) => {
                e.error_reference.as_deref()
            }
            _ => None,
        }
    }
}

/// Parses validation errors from an API response body.
///
/// Recharge returns validation errors either keyed by field:
/// ```json
/// { "errors": { "zip": ["is invalid"], "province": "is required" } }
/// ```
///
/// Or as a bare message, which is filed under `base`:
/// ```json
/// { "errors": "Invalid discount code" }
/// ```
fn parse_validation_errors(body: &serde_json::Value) -> HashMap<String, Vec<String>> {
    let mut result = HashMap::new();

    let Some(errors) = body.get("errors").or_else(|| body.get("error")) else {
        return result;
    };

    match errors {
        serde_json::Value::Object(map) => {
            for (field, messages) in map {
                let msgs: Vec<String> = match messages {
                    serde_json::Value::Array(arr) => arr
                        .iter()
                        .map(|v| v.as_str().map_or_else(|| v.to_string(), ToString::to_string))
                        .collect(),
                    serde_json::Value::String(s) => vec![s.clone()],
                    _ => vec![messages.to_string()],
                };
                result.insert(field.clone(), msgs);
            }
        }
        serde_json::Value::Array(arr) => {
            let msgs: Vec<String> = arr
                .iter()
                .filter_map(|v| v.as_str().map(ToString::to_string))
                .collect();
            if !msgs.is_empty() {
                result.insert("base".to_string(), msgs);
            }
        }
        serde_json::Value::String(s) => {
            result.insert("base".to_string(), vec![s.clone()]);
        }
        _ => {}
    }

    result
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_not_found_error_formats_message_with_resource_and_id() {
        let error = ResourceError::NotFound {
            resource: "Discount",
            id: "99".to_string(),
        };
        assert_eq!(error.to_string(), "Discount with id 99 not found");
    }

    #[test]
    fn test_scope_error_is_transparent() {
        let error: ResourceError = ScopeError::NoScopes.into();
        assert_eq!(error.to_string(), "No scopes found for token.");
    }

    #[test]
    fn test_from_http_response_maps_422_field_errors() {
        let body = json!({"errors": {"zip": ["is invalid"], "province": "is required"}});
        let error = ResourceError::from_http_response(422, &body, "Address", None, Some("req-1"));

        match error {
            ResourceError::ValidationFailed { errors, request_id } => {
                assert_eq!(errors.get("zip"), Some(&vec!["is invalid".to_string()]));
                assert_eq!(errors.get("province"), Some(&vec!["is required".to_string()]));
                assert_eq!(request_id.as_deref(), Some("req-1"));
            }
            other => panic!("Expected ValidationFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_from_http_response_maps_string_errors_to_base() {
        let body = json!({"errors": "Invalid discount code"});
        let error = ResourceError::from_http_response(422, &body, "Address", None, None);

        if let ResourceError::ValidationFailed { errors, .. } = error {
            assert_eq!(
                errors.get("base"),
                Some(&vec!["Invalid discount code".to_string()])
            );
        } else {
            panic!("Expected ValidationFailed variant");
        }
    }

    #[test]
    fn test_from_http_response_other_codes_wrap_http() {
        let error = ResourceError::from_http_response(500, &json!({}), "Product", None, None);
        assert!(matches!(
            error,
            ResourceError::Http(HttpError::Response(HttpResponseError { code: 500, .. }))
        ));
    }

    #[test]
    fn test_from_rest_error_maps_not_found() {
        let rest = RestError::Http(HttpError::Response(HttpResponseError {
            code: 404,
            message: r#"{"errors":"Not Found"}"#.to_string(),
            error_reference: None,
        }));

        let error = ResourceError::from_rest_error(rest, "Address", Some("12"));
        assert!(matches!(
            error,
            ResourceError::NotFound { resource: "Address", ref id } if id == "12"
        ));
    }

    #[test]
    fn test_from_rest_error_parses_validation_message() {
        let rest = RestError::Http(HttpError::Response(HttpResponseError {
            code: 422,
            message: r#"{"errors":{"code":["has already been taken"]}}"#.to_string(),
            error_reference: Some("req-7".to_string()),
        }));

        let error = ResourceError::from_rest_error(rest, "Discount", None);
        assert_eq!(error.request_id(), Some("req-7"));
        if let ResourceError::ValidationFailed { errors, .. } = error {
            assert_eq!(
                errors.get("code"),
                Some(&vec!["has already been taken".to_string()])
            );
        } else {
            panic!("Expected ValidationFailed variant");
        }
    }

    #[test]
    fn test_from_rest_error_keeps_other_errors() {
        let rest = RestError::Http(HttpError::Response(HttpResponseError {
            code: 401,
            message: "{}".to_string(),
            error_reference: Some("req-2".to_string()),
        }));

        let error = ResourceError::from_rest_error(rest, "Product", None);
        assert!(matches!(error, ResourceError::Rest(_)));
        assert_eq!(error.request_id(), Some("req-2"));
    }
}
