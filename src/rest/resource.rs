//! Shared call path for Recharge resources.
//!
//! This module defines the [`RechargeResource`] trait. A resource handle
//! borrows a [`RestClient`], names its API version, and gets [`send`] and
//! [`fetch`] for free. Every call runs the same steps: check scopes, build
//! the URL, issue the HTTP call, decode the result.
//!
//! [`send`]: RechargeResource::send
//! [`fetch`]: RechargeResource::fetch
//!
//! # Example
//!
//! ```rust,ignore
//! use recharge_api::rest::{RechargeResource, ResourcePath};
//! use recharge_api::clients::HttpMethod;
//! use recharge_api::{ApiVersion, RestClient};
//!
//! const CHARGE_GET: ResourcePath =
//!     ResourcePath::new(HttpMethod::Get, "charges/{charge_id}", &["read_orders"]);
//!
//! pub struct Charges<'a> {
//!     client: &'a RestClient,
//! }
//!
//! impl RechargeResource for Charges<'_> {
//!     const NAME: &'static str = "Charge";
//!     const API_VERSION: ApiVersion = ApiVersion::V2021_01;
//!     const ID_PARAM: &'static str = "charge_id";
//!
//!     fn client(&self) -> &RestClient {
//!         self.client
//!     }
//! }
//!
//! let charge: ResourceResponse<serde_json::Value> = charges
//!     .fetch(&CHARGE_GET, &[("charge_id", 7)], None, None, "charge")
//!     .await?;
//! ```

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::clients::{HttpMethod, HttpResponse, RestClient};
use crate::config::ApiVersion;
use crate::rest::{build_path, ResourceError, ResourcePath, ResourceResponse};

/// A group of Recharge endpoints sharing a base path and API version.
#[allow(async_fn_in_trait)]
pub trait RechargeResource {
    /// The singular resource name used in error messages (e.g., "Address").
    const NAME: &'static str;

    /// The API version sent with every call of this resource.
    const API_VERSION: ApiVersion;

    /// The path placeholder holding this resource's own id, e.g. `address_id`.
    ///
    /// Only this id is reported in [`ResourceError::NotFound`]; parent ids
    /// such as `customer_id` are not.
    const ID_PARAM: &'static str;

    /// Returns the client calls are sent through.
    fn client(&self) -> &RestClient;

    /// Sends one call to `path` and returns the raw response.
    ///
    /// The scope check runs first, so a rejected call never reaches the
    /// network. POST and PUT without a body send `{}`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Scope`] if the token lacks a required scope,
    /// [`ResourceError::NotFound`] or [`ResourceError::ValidationFailed`] for
    /// 404 and 422 responses, and [`ResourceError::Rest`] otherwise.
    async fn send(
        &self,
        path: &ResourcePath,
        ids: &[(&str, u64)],
        body: Option<Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, ResourceError> {
        let client = self.client();

        if path.is_scoped() {
            client.check_scopes(&path.endpoint(), path.required_scopes)?;
        }

        let url = build_path(path.template, ids);
        let version = Self::API_VERSION;
        let body = body.unwrap_or_else(|| Value::Object(serde_json::Map::new()));

        let result = match path.http_method {
            HttpMethod::Get => client.get(&url, query, &version).await,
            HttpMethod::Post => client.post(&url, body, query, &version).await,
            HttpMethod::Put => client.put(&url, body, query, &version).await,
            HttpMethod::Delete => client.delete(&url, query, &version).await,
        };

        result.map_err(|e| {
            let id = ids
                .iter()
                .find(|(name, _)| *name == Self::ID_PARAM)
                .map(|(_, id)| id.to_string());
            ResourceError::from_rest_error(e, Self::NAME, id.as_deref())
        })
    }

    /// Sends one call and decodes the body member named `key`.
    ///
    /// # Errors
    ///
    /// Everything [`send`](Self::send) returns, plus
    /// [`ResourceError::Serialization`] when the body does not decode.
    async fn fetch<T: DeserializeOwned>(
        &self,
        path: &ResourcePath,
        ids: &[(&str, u64)],
        body: Option<Value>,
        query: Option<HashMap<String, String>>,
        key: &str,
    ) -> Result<ResourceResponse<T>, ResourceError> {
        let response = self.send(path, ids, body, query).await?;
        ResourceResponse::from_http_response(response, key)
    }

    /// Sends one call whose response carries no data of interest.
    ///
    /// # Errors
    ///
    /// Everything [`send`](Self::send) returns.
    async fn execute(
        &self,
        path: &ResourcePath,
        ids: &[(&str, u64)],
    ) -> Result<ResourceResponse<()>, ResourceError> {
        let response = self.send(path, ids, None, None).await?;
        Ok(ResourceResponse::empty(&response))
    }
}
