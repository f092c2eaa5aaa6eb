//! Version-specific REST resource implementations.
//!
//! Recharge pins each endpoint family to an API version, sent in the
//! `X-Recharge-Version` header. Resources are grouped by that version:
//!
//! ```text
//! resources/
//!   mod.rs           <- This file
//!   v2021_01/        <- Addresses, Products
//!   v2021_11/        <- Discounts, AsyncBatches (+ plan/onetime task bodies)
//! ```
//!
//! Each resource is a small handle borrowing the [`RestClient`](crate::RestClient),
//! obtained from an accessor on the client:
//!
//! ```rust,ignore
//! let address = client.addresses().get(3_517_584).await?;
//! let product_count = client.products().count().await?;
//! let discount = client.discounts().get(59_568_555).await?;
//! let batches = client.async_batches().list().await?;
//! ```
//!
//! The handle types and every body, query and response type are re-exported
//! here as well.

pub mod v2021_01;
pub mod v2021_11;

pub use v2021_01::*;
pub use v2021_11::*;
