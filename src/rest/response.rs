//! Response wrapper for REST resource operations.
//!
//! This module provides [`ResourceResponse<T>`], a wrapper that combines
//! resource data with rate limit information and the request id. The wrapper
//! implements `Deref` for ergonomic access to the inner data.
//!
//! # Example
//!
//! ```rust,ignore
//! let response = client.products().list(None).await?;
//!
//! for product in response.iter() {
//!     println!("Product: {:?}", product.title);
//! }
//!
//! if let Some(limit) = response.rate_limit() {
//!     println!("Bucket: {}/{}", limit.request_count, limit.bucket_size);
//! }
//!
//! let products = response.into_inner();
//! ```

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;

use crate::clients::{HttpResponse, RateLimit};
use crate::rest::ResourceError;

/// A response from a REST resource operation.
///
/// # Example
///
/// ```rust
/// use recharge_api::rest::ResourceResponse;
/// use recharge_api::clients::RateLimit;
///
/// let response = ResourceResponse::new(
///     vec!["item1", "item2", "item3"],
///     Some(RateLimit { request_count: 1, bucket_size: 40 }),
///     Some("req-123".to_string()),
/// );
///
/// assert_eq!(response.len(), 3);
/// assert_eq!(response[0], "item1");
/// assert_eq!(response.request_id(), Some("req-123"));
/// ```
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    /// The resource data.
    data: T,
    /// Rate limit information from the `X-Recharge-Limit` header.
    rate_limit: Option<RateLimit>,
    /// Request ID from the X-Request-Id header.
    request_id: Option<String>,
}

impl<T> ResourceResponse<T> {
    /// Creates a new `ResourceResponse` with the given data and metadata.
    #[must_use]
    pub const fn new(data: T, rate_limit: Option<RateLimit>, request_id: Option<String>) -> Self {
        Self {
            data,
            rate_limit,
            request_id,
        }
    }

    /// Consumes the response and returns the inner data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns a reference to the inner data.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns the rate limit information, if available.
    #[must_use]
    pub const fn rate_limit(&self) -> Option<&RateLimit> {
        self.rate_limit.as_ref()
    }

    /// Returns the request ID from the response headers.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Maps the inner data to a new type, keeping the metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            rate_limit: self.rate_limit,
            request_id: self.request_id,
        }
    }
}

impl<T: DeserializeOwned> ResourceResponse<T> {
    /// Creates a `ResourceResponse` from an HTTP response.
    ///
    /// Extracts the data from the response body under the given key, e.g.
    /// `"address"` for `{"address": {...}}`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the key is missing, or
    /// [`ResourceError::Serialization`] if the data cannot be deserialized.
    pub fn from_http_response(response: HttpResponse, key: &str) -> Result<Self, ResourceError> {
        let request_id = response.request_id().map(ToString::to_string);
        let rate_limit = response.rate_limit;
        let code = response.code;

        let mut body = response.body;
        let data_value = body
            .get_mut(key)
            .map(serde_json::Value::take)
            .ok_or_else(|| {
                ResourceError::Http(crate::clients::HttpError::Response(
                    crate::clients::HttpResponseError {
                        code,
                        message: format!("Missing key '{key}' in response body"),
                        error_reference: request_id.clone(),
                    },
                ))
            })?;

        let data: T = serde_json::from_value(data_value)?;

        Ok(Self {
            data,
            rate_limit,
            request_id,
        })
    }
}

impl ResourceResponse<serde_json::Value> {
    /// Creates a `ResourceResponse` holding the whole response body.
    ///
    /// Used for calls whose body has no single wrapping key.
    #[must_use]
    pub fn from_body(response: HttpResponse) -> Self {
        let request_id = response.request_id().map(ToString::to_string);
        Self {
            data: response.body,
            rate_limit: response.rate_limit,
            request_id,
        }
    }
}

impl ResourceResponse<()> {
    /// Creates an empty `ResourceResponse` from an HTTP response, keeping
    /// only its metadata. Used for calls such as DELETE that return no body.
    #[must_use]
    pub fn empty(response: &HttpResponse) -> Self {
        Self {
            data: (),
            rate_limit: response.rate_limit,
            request_id: response.request_id().map(ToString::to_string),
        }
    }
}

/// Provides transparent access to the inner data.
impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

// Verify ResourceResponse is Send + Sync when T is Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceResponse<String>>();
    assert_send_sync::<ResourceResponse<Vec<String>>>();
};
