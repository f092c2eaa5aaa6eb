//! HTTP client types for Recharge API communication.
//!
//! This module provides the HTTP layer for making authenticated requests to
//! the Recharge API. It handles request/response processing, the single
//! rate-limit retry, and Recharge-specific header parsing.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`RetryPolicy`]: What to do when Recharge answers 429
//! - [`RateLimit`]: The parsed `X-Recharge-Limit` header
//! - [`rest::RestClient`]: Higher-level REST API client
//! - [`rest::RestError`]: REST-specific error types
//!
//! # Retry Behavior
//!
//! - **429 (Rate Limited)**: GET, POST and PUT sleep for the configured
//!   retry wait (1 second by default) and re-send once; DELETE re-sends once
//!   without sleeping. A second 429 returns [`HttpError::MaxRetries`].
//! - **Other errors**: Returned immediately without retry.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, ACCESS_TOKEN_HEADER, SDK_VERSION, VERSION_HEADER};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, RetryPolicy};
pub use http_response::{HttpResponse, RateLimit};

pub use rest::{RestClient, RestError};
