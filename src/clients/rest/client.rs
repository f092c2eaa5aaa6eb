//! REST client implementation for the Recharge API.
//!
//! This module provides the [`RestClient`] type. It owns the HTTP dispatcher
//! and the [`ScopeGuard`] that every resource call consults before sending.

use std::collections::HashMap;

use crate::auth::{ScopeError, ScopeGuard};
use crate::clients::rest::RestError;
use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{ApiVersion, RechargeConfig};

/// REST API client for Recharge.
///
/// Provides `get`, `post`, `put` and `delete` methods taking the API version
/// to send in the `X-Recharge-Version` header. Resource handles such as
/// [`addresses`](Self::addresses) borrow the client and call these methods.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
/// The scope cache is shared by every call made through the same client.
///
/// # Example
///
/// ```rust,ignore
/// use recharge_api::{AccessToken, ApiVersion, RechargeConfig, RestClient};
///
/// let config = RechargeConfig::builder()
///     .access_token(AccessToken::new("token").unwrap())
///     .scopes("read_products".parse().unwrap())
///     .build()
///     .unwrap();
///
/// let client = RestClient::new(&config)?;
/// let response = client.get("products/count", None, &ApiVersion::V2021_01).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// Granted scopes and the cache of approved endpoints.
    scope_guard: ScopeGuard,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the HTTP client cannot be created.
    pub fn new(config: &RechargeConfig) -> Result<Self, RestError> {
        let http_client = HttpClient::new(config)?;

        if config.scopes().is_empty() {
            tracing::debug!("Recharge client created without scopes; scoped calls will fail");
        }

        Ok(Self {
            http_client,
            scope_guard: ScopeGuard::new(config.scopes().clone()),
        })
    }

    /// Returns the scope guard used by this client.
    #[must_use]
    pub const fn scope_guard(&self) -> &ScopeGuard {
        &self.scope_guard
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Checks that the token may call `endpoint`.
    ///
    /// Endpoints approved once are cached and pass without re-checking.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError::NoScopes`] if the client has no scopes at all,
    /// or [`ScopeError::MissingScopes`] naming every missing scope.
    pub fn check_scopes(&self, endpoint: &str, required: &[&str]) -> Result<(), ScopeError> {
        self.scope_guard.check(endpoint, required)
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut query = HashMap::new();
    /// query.insert("limit".to_string(), "50".to_string());
    /// let response = client.get("products", Some(query), &ApiVersion::V2021_01).await?;
    /// ```
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
        version: &ApiVersion,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None, query, version)
            .await
    }

    /// Sends a POST request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
        version: &ApiVersion,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, Some(body), query, version)
            .await
    }

    /// Sends a PUT request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn put(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
        version: &ApiVersion,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Put, path, Some(body), query, version)
            .await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn delete(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
        version: &ApiVersion,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, path, None, query, version)
            .await
    }

    /// Internal helper to build and send requests.
    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
        version: &ApiVersion,
    ) -> Result<HttpResponse, RestError> {
        let normalized_path = normalize_path(path)?;

        let mut builder =
            HttpRequest::builder(method, normalized_path).api_version(version.clone());

        if let Some(body_value) = body {
            builder = builder.body(body_value);
        }

        if let Some(query_params) = query {
            if !query_params.is_empty() {
                builder = builder.query(query_params);
            }
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        self.http_client.request(request).await.map_err(Into::into)
    }
}

/// Strips leading slashes from a path, rejecting paths left empty.
fn normalize_path(path: &str) -> Result<String, RestError> {
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        return Err(RestError::InvalidPath {
            path: String::new(),
        });
    }

    Ok(path.to_string())
}
