//! HTTP response types for the Recharge API SDK.
//!
//! This module provides the [`HttpResponse`] type and the [`RateLimit`]
//! parsed from Recharge's `X-Recharge-Limit` header.

use std::collections::HashMap;

/// Rate limit information parsed from the `X-Recharge-Limit` header.
///
/// Recharge uses a leaky bucket. The header format is "X/Y" where X is the
/// number of requests currently in the bucket and Y is the bucket size.
///
/// # Example
///
/// ```rust
/// use recharge_api::clients::RateLimit;
///
/// let limit = RateLimit::parse("38/40").unwrap();
/// assert_eq!(limit.request_count, 38);
/// assert_eq!(limit.bucket_size, 40);
/// assert_eq!(limit.remaining(), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// The current number of requests in the bucket.
    pub request_count: u32,
    /// The maximum number of requests the bucket holds.
    pub bucket_size: u32,
}

impl RateLimit {
    /// Parses the rate limit header value.
    ///
    /// Returns `None` unless the value has the form `"X/Y"` with numeric parts.
    #[must_use]
    pub fn parse(header_value: &str) -> Option<Self> {
        let (count, size) = header_value.trim().split_once('/')?;

        Some(Self {
            request_count: count.trim().parse().ok()?,
            bucket_size: size.trim().parse().ok()?,
        })
    }

    /// Returns how many requests fit in the bucket before it overflows.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.bucket_size.saturating_sub(self.request_count)
    }
}

/// An HTTP response from the Recharge API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers with lower-case names (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body. Empty bodies parse to `{}`.
    pub body: serde_json::Value,
    /// Rate limit information (from the `X-Recharge-Limit` header).
    pub rate_limit: Option<RateLimit>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the rate limit header.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let rate_limit = headers
            .get("x-recharge-limit")
            .and_then(|values| values.first())
            .and_then(|value| RateLimit::parse(value));

        Self {
            code,
            headers,
            body,
            rate_limit,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` if the server rejected the request for rate limiting.
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        self.code == 429
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }
}
