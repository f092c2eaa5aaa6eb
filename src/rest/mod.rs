//! REST resource infrastructure for the Recharge API.
//!
//! This module provides the plumbing shared by every resource:
//!
//! - **[`ResourcePath`]**: An endpoint's method, URL template and required scopes
//! - **[`RechargeResource`] trait**: The single call path (scope check, URL, HTTP, decode)
//! - **[`ResourceResponse<T>`]**: A Deref-based wrapper carrying rate limit and request id
//! - **[`ResourceError`]**: Semantic error types for resource operations
//! - **[`serialize_to_query`]**: Typed query structs to flat query maps
//! - **[`timestamp`]**: Serde helpers for Recharge timestamps
//!
//! Individual resources (addresses, products, discounts, async batches) are
//! implemented in the [`resources`] submodule.
//!
//! # Example
//!
//! ```rust,ignore
//! use recharge_api::{AccessToken, RechargeConfig, RestClient};
//!
//! let config = RechargeConfig::builder()
//!     .access_token(AccessToken::new("token").unwrap())
//!     .scopes("read_products,write_discounts".parse().unwrap())
//!     .build()
//!     .unwrap();
//! let client = RestClient::new(&config)?;
//!
//! let products = client.products().list(None).await?;
//! for product in products.iter() {
//!     println!("- {:?}", product.title);
//! }
//!
//! let count = client.products().count().await?;
//! println!("Total products: {}", *count);
//! ```

mod errors;
mod path;
mod query;
mod resource;
mod response;
pub mod timestamp;

pub mod resources;

pub use errors::ResourceError;
pub use path::{build_path, ResourcePath};
pub use query::{body_or_empty, optional_query, serialize_to_query};
pub use resource::RechargeResource;
pub use response::ResourceResponse;
