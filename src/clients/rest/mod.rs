//! REST API client for Recharge.
//!
//! This module provides a higher-level REST API client built on top of the
//! [`HttpClient`](crate::clients::HttpClient). It adds the per-call API
//! version and the scope check shared by every resource.
//!
//! # Overview
//!
//! - [`RestClient`]: The REST API client with `get()`, `post()`, `put()`, `delete()` methods
//! - [`RestError`]: Error type for REST API operations
//!
//! # Example
//!
//! ```rust,ignore
//! use recharge_api::{AccessToken, ApiVersion, RechargeConfig, RestClient};
//!
//! let config = RechargeConfig::builder()
//!     .access_token(AccessToken::new("your-token").unwrap())
//!     .scopes("read_products".parse().unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = RestClient::new(&config)?;
//! client.check_scopes("GET /products", &["read_products"])?;
//! let response = client.get("products", None, &ApiVersion::V2021_01).await?;
//! println!("Products: {}", response.body);
//! ```
//!
//! # Retry Behavior
//!
//! A rate-limited (429) request is re-sent exactly once. GET, POST and PUT
//! wait for the configured retry delay first; DELETE re-sends immediately.

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
