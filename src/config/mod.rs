//! Configuration types for the Recharge API SDK.
//!
//! This module provides the core configuration types used to initialize
//! the SDK for API communication with Recharge.
//!
//! # Overview
//!
//! - [`RechargeConfig`]: The main configuration struct holding all SDK settings
//! - [`RechargeConfigBuilder`]: A builder for constructing [`RechargeConfig`] instances
//! - [`AccessToken`]: A validated access token newtype with masked debug output
//! - [`BaseUrl`]: A validated API base URL
//! - [`ApiVersion`]: The Recharge API version
//!
//! # Example
//!
//! ```rust
//! use recharge_api::{AccessToken, RechargeConfig};
//!
//! let config = RechargeConfig::builder()
//!     .access_token(AccessToken::new("sk_test_123").unwrap())
//!     .scopes("read_customers,write_customers".parse().unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, BaseUrl};
pub use version::ApiVersion;

use std::time::Duration;

use crate::auth::AuthScopes;
use crate::error::ConfigError;

/// Fixed wait before retrying a rate-limited request.
pub const DEFAULT_RETRY_WAIT: Duration = Duration::from_secs(1);

/// Configuration for the Recharge API SDK.
///
/// Holds the access token, the scopes granted to that token, and request
/// settings shared by every resource.
///
/// # Thread Safety
///
/// `RechargeConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use recharge_api::{AccessToken, RechargeConfig};
///
/// let config = RechargeConfig::builder()
///     .access_token(AccessToken::new("token").unwrap())
///     .debug(true)
///     .build()
///     .unwrap();
///
/// assert!(config.debug());
/// ```
#[derive(Clone, Debug)]
pub struct RechargeConfig {
    access_token: AccessToken,
    scopes: AuthScopes,
    api_version: ApiVersion,
    base_url: BaseUrl,
    debug: bool,
    retry_wait: Duration,
    user_agent_prefix: Option<String>,
}

impl RechargeConfig {
    /// Creates a new builder for constructing a `RechargeConfig`.
    #[must_use]
    pub fn builder() -> RechargeConfigBuilder {
        RechargeConfigBuilder::new()
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the scopes granted to the access token.
    #[must_use]
    pub const fn scopes(&self) -> &AuthScopes {
        &self.scopes
    }

    /// Returns the default API version.
    ///
    /// Resources that belong to a specific version override this per request.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns whether request URLs and rate-limit headers are logged.
    #[must_use]
    pub const fn debug(&self) -> bool {
        self.debug
    }

    /// Returns the wait before retrying a rate-limited request.
    #[must_use]
    pub const fn retry_wait(&self) -> Duration {
        self.retry_wait
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify RechargeConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RechargeConfig>();
};

/// Builder for constructing [`RechargeConfig`] instances.
///
/// `access_token` is required. All other fields have defaults.
///
/// # Defaults
///
/// - `scopes`: Empty (every scoped endpoint is rejected)
/// - `api_version`: `2021-01`
/// - `base_url`: `https://api.rechargeapps.com`
/// - `debug`: `false`
/// - `retry_wait`: 1 second
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct RechargeConfigBuilder {
    access_token: Option<AccessToken>,
    scopes: Option<AuthScopes>,
    api_version: Option<ApiVersion>,
    base_url: Option<BaseUrl>,
    debug: Option<bool>,
    retry_wait: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl RechargeConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the scopes granted to the access token.
    #[must_use]
    pub fn scopes(mut self, scopes: AuthScopes) -> Self {
        self.scopes = Some(scopes);
        self
    }

    /// Sets the default API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Enables logging of every request URL and its `X-Recharge-Limit` header.
    #[must_use]
    pub const fn debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    /// Sets the wait before retrying a rate-limited request.
    #[must_use]
    pub const fn retry_wait(mut self, wait: Duration) -> Self {
        self.retry_wait = Some(wait);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`RechargeConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `access_token` is not set.
    pub fn build(self) -> Result<RechargeConfig, ConfigError> {
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;

        Ok(RechargeConfig {
            access_token,
            scopes: self.scopes.unwrap_or_default(),
            api_version: self.api_version.unwrap_or_default(),
            base_url: self.base_url.unwrap_or_default(),
            debug: self.debug.unwrap_or(false),
            retry_wait: self.retry_wait.unwrap_or(DEFAULT_RETRY_WAIT),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_access_token() {
        let result = RechargeConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "access_token"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = RechargeConfig::builder()
            .access_token(AccessToken::new("token").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.api_version(), &ApiVersion::V2021_01);
        assert_eq!(config.base_url().as_ref(), "https://api.rechargeapps.com");
        assert!(config.scopes().is_empty());
        assert!(!config.debug());
        assert_eq!(config.retry_wait(), Duration::from_secs(1));
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = RechargeConfig::builder()
            .access_token(AccessToken::new("token").unwrap())
            .scopes("read_products,write_products".parse().unwrap())
            .api_version(ApiVersion::V2021_11)
            .base_url(BaseUrl::new("http://localhost:9000").unwrap())
            .debug(true)
            .retry_wait(Duration::from_millis(20))
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.api_version(), &ApiVersion::V2021_11);
        assert_eq!(config.base_url().as_ref(), "http://localhost:9000");
        assert!(config.scopes().contains("write_products"));
        assert!(config.debug());
        assert_eq!(config.retry_wait(), Duration::from_millis(20));
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_config_debug_does_not_leak_token() {
        let config = RechargeConfig::builder()
            .access_token(AccessToken::new("very-secret").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("RechargeConfig"));
        assert!(!debug_str.contains("very-secret"));
    }
}
