//! HTTP client for Recharge API communication.
//!
//! This module provides the [`HttpClient`] type, the single dispatcher every
//! resource call goes through. It attaches the access token, encodes JSON,
//! and re-sends a request once when Recharge answers HTTP 429.

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
use crate::clients::http_request::{HttpMethod, HttpRequest, RetryPolicy};
use crate::clients::http_response::HttpResponse;
use crate::config::{ApiVersion, RechargeConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the Recharge access token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Recharge-Access-Token";

/// Header selecting the Recharge API version.
pub const VERSION_HEADER: &str = "X-Recharge-Version";

/// HTTP client for making requests to the Recharge API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers including User-Agent, JSON content negotiation and the access token
/// - One retry on HTTP 429, after a fixed wait for GET/PUT/POST and immediately for DELETE
/// - Optional logging of every URL and its `X-Recharge-Limit` header
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use recharge_api::{AccessToken, RechargeConfig};
/// use recharge_api::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let config = RechargeConfig::builder()
///     .access_token(AccessToken::new("token").unwrap())
///     .build()
///     .unwrap();
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "products/count").build()?;
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `https://api.rechargeapps.com`).
    base_url: String,
    /// Version sent when a request does not name one.
    default_version: ApiVersion,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Wait before re-sending a rate-limited request.
    retry_wait: Duration,
    /// Log each URL and rate-limit header at info level.
    debug: bool,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &RechargeConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Recharge API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert(
            ACCESS_TOKEN_HEADER.to_string(),
            config.access_token().as_ref().to_string(),
        );

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_url: config.base_url().as_ref().to_string(),
            default_version: config.api_version().clone(),
            default_headers,
            retry_wait: config.retry_wait(),
            debug: config.debug(),
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the version sent when a request does not name one.
    #[must_use]
    pub const fn default_version(&self) -> &ApiVersion {
        &self.default_version
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the wait before re-sending a rate-limited request.
    #[must_use]
    pub const fn retry_wait(&self) -> Duration {
        self.retry_wait
    }

    /// Builds the absolute URL for a request path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Sends an HTTP request to the Recharge API.
    ///
    /// A 429 response is re-sent once according to the request's
    /// [`RetryPolicy`]. The retry carries the same body and query.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs (`Network`)
    /// - A non-2xx response is received (`Response`)
    /// - The retry was also rate limited (`MaxRetries`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request.path);

        let mut headers = self.default_headers.clone();
        let version = request
            .api_version
            .as_ref()
            .unwrap_or(&self.default_version);
        headers.insert(VERSION_HEADER.to_string(), version.to_string());

        let mut tries: u32 = 0;
        loop {
            tries += 1;

            let mut req_builder = match request.http_method {
                HttpMethod::Get => self.client.get(&url),
                HttpMethod::Post => self.client.post(&url),
                HttpMethod::Put => self.client.put(&url),
                HttpMethod::Delete => self.client.delete(&url),
            };

            for (key, value) in &headers {
                req_builder = req_builder.header(key, value);
            }

            if let Some(query) = &request.query {
                req_builder = req_builder.query(query);
            }

            if let Some(body) = &request.body {
                req_builder = req_builder.body(body.to_string());
            }

            tracing::debug!(method = %request.http_method, %url, attempt = tries, "sending Recharge request");
            let res = req_builder.send().await?;

            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let body_text = res.text().await.unwrap_or_default();
            let body = Self::parse_body(code, &body_text);

            let response = HttpResponse::new(code, res_headers, body);

            if self.debug {
                tracing::info!("{url}");
                tracing::info!(
                    "{}",
                    response.header("x-recharge-limit").unwrap_or("<no X-Recharge-Limit>")
                );
            }

            if response.is_ok() {
                return Ok(response);
            }

            let error_message = Self::serialize_error(&response);
            let error_reference = response.request_id().map(String::from);

            if !response.is_rate_limited() {
                return Err(HttpError::Response(HttpResponseError {
                    code,
                    message: error_message,
                    error_reference,
                }));
            }

            if tries >= RetryPolicy::MAX_TRIES {
                return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                    code,
                    tries,
                    message: error_message,
                    error_reference,
                }));
            }

            tracing::warn!(
                method = %request.http_method,
                %url,
                "Recharge rate limit reached, retrying once"
            );
            if request.retry == RetryPolicy::AfterWait {
                tokio::time::sleep(self.retry_wait).await;
            }
        }
    }

    /// Parses response headers into a `HashMap` keyed by lower-case name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Parses a response body as JSON.
    ///
    /// Empty bodies become `{}`. Non-JSON error bodies are kept under
    /// `raw_body` so they can surface in error messages.
    fn parse_body(code: u16, body_text: &str) -> serde_json::Value {
        if body_text.trim().is_empty() {
            return serde_json::json!({});
        }

        serde_json::from_str(body_text).unwrap_or_else(|_| {
            if code >= 400 {
                serde_json::json!({ "raw_body": body_text })
            } else {
                serde_json::json!({})
            }
        })
    }

    /// Serializes the error members of a response body to JSON.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        for key in ["errors", "error", "warning", "raw_body"] {
            if let Some(value) = response.body.get(key) {
                error_body.insert(key.to_string(), value.clone());
            }
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}
