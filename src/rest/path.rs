//! Endpoint descriptions for REST resources.
//!
//! Every Recharge operation is a [`ResourcePath`] constant naming its HTTP
//! method, its URL template and the scopes the token needs to call it.
//!
//! # Example
//!
//! ```rust
//! use recharge_api::rest::{build_path, ResourcePath};
//! use recharge_api::clients::HttpMethod;
//!
//! const ADDRESS_GET: ResourcePath = ResourcePath::new(
//!     HttpMethod::Get,
//!     "addresses/{address_id}",
//!     &["read_customers"],
//! );
//!
//! assert_eq!(ADDRESS_GET.endpoint(), "GET /addresses/{address_id}");
//! assert_eq!(
//!     build_path(ADDRESS_GET.template, &[("address_id", 42)]),
//!     "addresses/42"
//! );
//! ```

use std::fmt::Display;

use crate::clients::HttpMethod;

/// A single Recharge endpoint.
///
/// # Path Templates
///
/// Templates use `{name}` placeholders, filled in by [`build_path`]:
/// - `products/{product_id}`
/// - `customers/{customer_id}/addresses`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The URL template with `{id}` placeholders.
    pub template: &'static str,
    /// Scopes the token must hold. Empty means the call is not checked.
    pub required_scopes: &'static [&'static str],
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    ///
    /// This is a `const fn` to allow paths to be defined as constants.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        template: &'static str,
        required_scopes: &'static [&'static str],
    ) -> Self {
        Self {
            http_method,
            template,
            required_scopes,
        }
    }

    /// Returns the key this endpoint is cached under once approved.
    ///
    /// The key is built from the template rather than the filled-in URL, so
    /// approving `GET /addresses/1` also approves `GET /addresses/2`.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{} /{}", self.http_method, self.template)
    }

    /// Returns `true` if calling this endpoint requires a scope check.
    #[must_use]
    pub const fn is_scoped(&self) -> bool {
        !self.required_scopes.is_empty()
    }
}

/// Builds a URL path by interpolating IDs into a template.
///
/// Each value is percent-encoded before substitution. Placeholders with no
/// matching entry are left untouched.
///
/// # Example
///
/// ```rust
/// use recharge_api::rest::build_path;
///
/// let path = build_path("async_batches/{batch_id}/tasks", &[("batch_id", 7)]);
/// assert_eq!(path, "async_batches/7/tasks");
/// ```
#[must_use]
pub fn build_path<V: Display>(template: &str, ids: &[(&str, V)]) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        let encoded = urlencoding::encode(&value.to_string()).into_owned();
        result = result.replace(&placeholder, &encoded);
    }

    result
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourcePath>();
};
