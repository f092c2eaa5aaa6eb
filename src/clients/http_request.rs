//! HTTP request types for the Recharge API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the Recharge API.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;
use crate::config::ApiVersion;

/// HTTP methods supported by the Recharge API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources and triggering actions.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the upper-case method name used on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a request is re-sent when the server answers HTTP 429.
///
/// A rate-limited request is re-sent at most once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetryPolicy {
    /// Sleep for the client's retry wait, then re-send once.
    AfterWait,
    /// Re-send once without sleeping.
    Immediate,
}

impl RetryPolicy {
    /// Total attempts for a rate-limited request: the first send and one retry.
    pub const MAX_TRIES: u32 = 2;

    /// Returns the policy Recharge calls use for `method`.
    ///
    /// DELETE re-sends immediately; every other method waits first.
    #[must_use]
    pub const fn for_method(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Delete => Self::Immediate,
            HttpMethod::Get | HttpMethod::Post | HttpMethod::Put => Self::AfterWait,
        }
    }
}

/// An HTTP request to be sent to the Recharge API.
///
/// Use [`HttpRequest::builder`] to construct requests.
///
/// # Example
///
/// ```rust
/// use recharge_api::clients::{HttpMethod, HttpRequest, RetryPolicy};
/// use serde_json::json;
///
/// let request = HttpRequest::builder(HttpMethod::Post, "addresses/validate_address")
///     .body(json!({"address1": "1 Main St", "zipcode": "10001"}))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.retry, RetryPolicy::AfterWait);
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path (relative to the base URL) for this request.
    pub path: String,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
    /// Query parameters to append to the URL.
    pub query: Option<HashMap<String, String>>,
    /// API version sent in the `X-Recharge-Version` header.
    pub api_version: Option<ApiVersion>,
    /// Behavior on HTTP 429.
    pub retry: RetryPolicy,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `path` is empty
    /// - `http_method` is `Post` or `Put` but `body` is `None`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.path.trim_matches('/').is_empty() {
            return Err(InvalidHttpRequestError::EmptyPath);
        }

        if matches!(self.http_method, HttpMethod::Post | HttpMethod::Put) && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    query: Option<HashMap<String, String>>,
    api_version: Option<ApiVersion>,
    retry: RetryPolicy,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            query: None,
            api_version: None,
            retry: RetryPolicy::for_method(method),
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: HashMap<String, String>) -> Self {
        self.query = Some(query);
        self
    }

    /// Sets the API version for this request.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            query: self.query,
            api_version: self.api_version,
            retry: self.retry,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_retry_policy_per_method() {
        assert_eq!(RetryPolicy::for_method(HttpMethod::Get), RetryPolicy::AfterWait);
        assert_eq!(RetryPolicy::for_method(HttpMethod::Post), RetryPolicy::AfterWait);
        assert_eq!(RetryPolicy::for_method(HttpMethod::Put), RetryPolicy::AfterWait);
        assert_eq!(RetryPolicy::for_method(HttpMethod::Delete), RetryPolicy::Immediate);
    }

    #[test]
    fn test_builder_picks_retry_policy_from_method() {
        let get = HttpRequest::builder(HttpMethod::Get, "discounts").build().unwrap();
        assert_eq!(get.retry, RetryPolicy::AfterWait);

        let delete = HttpRequest::builder(HttpMethod::Delete, "discounts/1")
            .build()
            .unwrap();
        assert_eq!(delete.retry, RetryPolicy::Immediate);
        assert_eq!(RetryPolicy::MAX_TRIES, 2);
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "addresses/1")
            .api_version(ApiVersion::V2021_01)
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "addresses/1");
        assert!(request.body.is_none());
        assert_eq!(request.api_version, Some(ApiVersion::V2021_01));
    }

    #[test]
    fn test_verify_requires_body_for_post_and_put() {
        let result = HttpRequest::builder(HttpMethod::Post, "discounts").build();
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "POST"
        ));

        let result = HttpRequest::builder(HttpMethod::Put, "discounts/1").build();
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "PUT"
        ));
    }

    #[test]
    fn test_verify_rejects_empty_path() {
        let result = HttpRequest::builder(HttpMethod::Get, "/").build();
        assert!(matches!(result, Err(InvalidHttpRequestError::EmptyPath)));
    }

    #[test]
    fn test_builder_with_query() {
        let mut query = HashMap::new();
        query.insert("limit".to_string(), "50".to_string());

        let request = HttpRequest::builder(HttpMethod::Put, "products/7")
            .body(json!({"discount_amount": "5.0"}))
            .query(query)
            .build()
            .unwrap();

        assert_eq!(
            request.query.unwrap().get("limit"),
            Some(&"50".to_string())
        );
        assert!(request.body.is_some());
    }
}
