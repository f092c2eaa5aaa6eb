//! Authentication types for the Recharge API SDK.
//!
//! Recharge authenticates every call with a long-lived API token sent in the
//! `X-Recharge-Access-Token` header. Each token carries a fixed set of
//! permission scopes, and each endpoint requires some of them.
//!
//! # Overview
//!
//! - [`AuthScopes`]: The scopes granted to a token
//! - [`ScopeGuard`]: Rejects calls to endpoints the token may not use and
//!   caches endpoints that passed
//! - [`ScopeError`]: Why a call was rejected
//!
//! # Example
//!
//! ```rust
//! use recharge_api::auth::{AuthScopes, ScopeGuard};
//!
//! let scopes: AuthScopes = "read_products".parse().unwrap();
//! let guard = ScopeGuard::new(scopes);
//!
//! assert!(guard.check("GET /products", &["read_products"]).is_ok());
//! assert!(guard.check("POST /products", &["write_products"]).is_err());
//! ```

mod scope_guard;
mod scopes;

pub use scope_guard::{ScopeError, ScopeGuard};
pub use scopes::AuthScopes;
