//! # Recharge API Rust SDK
//!
//! A typed Rust client for the Recharge subscription billing REST API.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`RechargeConfig`] and [`RechargeConfigBuilder`]
//! - Validated newtypes for the access token and base URL
//! - Client-side permission checks: every endpoint names the scopes it needs,
//!   and calls the token cannot make fail before any request is sent
//! - An async HTTP client that retries once when Recharge rate limits a call
//! - Typed resources for addresses and products (API 2021-01) and for
//!   discounts and async batches (API 2021-11)
//!
//! ## Quick Start
//!
//! ```rust
//! use recharge_api::{AccessToken, RechargeConfig};
//!
//! let config = RechargeConfig::builder()
//!     .access_token(AccessToken::new("your-api-token").unwrap())
//!     .scopes("read_customers,write_discounts".parse().unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use recharge_api::{AccessToken, RechargeConfig, RestClient};
//! use recharge_api::rest::resources::AddressApplyDiscount;
//!
//! let config = RechargeConfig::builder()
//!     .access_token(AccessToken::new("your-api-token").unwrap())
//!     .scopes("read_customers,write_discounts".parse().unwrap())
//!     .build()
//!     .unwrap();
//! let client = RestClient::new(&config)?;
//!
//! let addresses = client.addresses().list(10_526_473, None).await?;
//! for address in addresses.iter() {
//!     println!("{:?}, {:?}", address.address1, address.city);
//! }
//!
//! client
//!     .addresses()
//!     .apply_discount(
//!         addresses[0].id,
//!         &AddressApplyDiscount::Code { discount_code: "SAVE10".to_string() },
//!     )
//!     .await?;
//! ```
//!
//! ## Scopes
//!
//! A Recharge token carries a fixed set of scopes. The scopes given to
//! [`RechargeConfigBuilder::scopes`] are checked before each call. A call the
//! token may not make returns [`ScopeError`](auth::ScopeError) without
//! touching the network. Endpoints that passed once are remembered per client.
//!
//! ## Rate Limits
//!
//! When Recharge answers HTTP 429, GET, POST and PUT wait for the configured
//! retry delay (1 second by default) and re-send once; DELETE re-sends once
//! immediately. A second 429 is returned as an error.
//!
//! ## Logging
//!
//! The SDK logs through [`tracing`](https://docs.rs/tracing) and installs no
//! subscriber. With [`RechargeConfigBuilder::debug`] enabled, every URL and
//! `X-Recharge-Limit` header is logged at info level.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: Clients are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::{AuthScopes, ScopeError, ScopeGuard};
pub use config::{AccessToken, ApiVersion, BaseUrl, RechargeConfig, RechargeConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError, RateLimit,
    RestClient, RestError, RetryPolicy,
};

// Re-export resource plumbing
pub use rest::{ResourceError, ResourceResponse};
