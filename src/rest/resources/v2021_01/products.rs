//! Product resource implementation.
//!
//! Recharge products mirror Shopify products and hold the subscription
//! settings (intervals, cutoffs, discounts) offered for them.
//!
//! # Example
//!
//! ```rust,ignore
//! use recharge_api::rest::resources::v2021_01::{ProductCreateBody, ProductListQuery};
//!
//! let products = client.products();
//!
//! let created = products
//!     .create(&ProductCreateBody {
//!         shopify_product_id: 1_255_183_683,
//!         charge_interval_frequency: Some(30),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let query = ProductListQuery { limit: Some(50), ..Default::default() };
//! for product in products.list(Some(&query)).await?.iter() {
//!     println!("{:?}", product.title);
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, RestClient};
use crate::config::ApiVersion;
use crate::rest::{
    optional_query, timestamp, RechargeResource, ResourceError, ResourcePath, ResourceResponse,
};

const CREATE: ResourcePath = ResourcePath::new(HttpMethod::Post, "products", &["write_products"]);
const GET: ResourcePath =
    ResourcePath::new(HttpMethod::Get, "products/{product_id}", &["read_products"]);
const UPDATE: ResourcePath =
    ResourcePath::new(HttpMethod::Put, "products/{product_id}", &["write_products"]);
const DELETE: ResourcePath =
    ResourcePath::new(HttpMethod::Delete, "products/{product_id}", &["write_products"]);
const LIST: ResourcePath = ResourcePath::new(HttpMethod::Get, "products", &["read_products"]);
const COUNT: ResourcePath =
    ResourcePath::new(HttpMethod::Get, "products/count", &["read_products"]);

/// How a product's subscription discount is computed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProductDiscountType {
    #[default]
    Percentage,
}

/// Which purchase options the storefront offers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProductStorefrontPurchaseOptions {
    SubscriptionOnly,
    SubscriptionAndOnetime,
}

/// The unit of a subscription interval.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProductOrderIntervalUnit {
    Day,
    Week,
    Month,
}

/// Image URLs for a product, by size.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductImages {
    #[serde(default)]
    pub large: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub original: Option<String>,
    #[serde(default)]
    pub small: Option<String>,
}

/// Body for creating a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductCreateBody {
    /// The Shopify product this Recharge product wraps.
    pub shopify_product_id: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge_interval_frequency: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutoff_day_of_month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutoff_day_of_week: Option<u32>,
    /// Decimal string, e.g. `"10.0"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<ProductDiscountType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_after_specific_number_of_charges: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifiable_properties: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_day_of_month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_day_of_week: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_interval_frequency_options: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storefront_purchase_options: Option<ProductStorefrontPurchaseOptions>,
}

/// Body for updating a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductUpdateBody {
    pub shopify_product_id: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge_interval_frequency: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutoff_day_of_month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutoff_day_of_week: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<ProductDiscountType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_after_specific_number_of_charges: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifiable_properties: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_day_of_month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_day_of_week: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_interval_unit: Option<ProductOrderIntervalUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storefront_purchase_options: Option<ProductStorefrontPurchaseOptions>,
}

/// Filters for listing products.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct ProductListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopify_product_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

/// A product as returned by Recharge.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Product {
    pub id: u64,

    #[serde(default)]
    pub shopify_product_id: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub handle: Option<String>,
    #[serde(default)]
    pub images: Option<ProductImages>,

    #[serde(default)]
    pub charge_interval_frequency: Option<u32>,
    #[serde(default)]
    pub cutoff_day_of_month: Option<u32>,
    #[serde(default)]
    pub cutoff_day_of_week: Option<u32>,
    #[serde(default)]
    pub discount_amount: Option<f64>,
    #[serde(default)]
    pub discount_type: Option<ProductDiscountType>,
    #[serde(default)]
    pub expire_after_specific_number_of_charges: Option<u32>,
    #[serde(default)]
    pub modifiable_properties: Option<Vec<String>>,
    #[serde(default)]
    pub number_charges_until_expiration: Option<u32>,
    #[serde(default)]
    pub order_day_of_month: Option<u32>,
    #[serde(default)]
    pub order_day_of_week: Option<u32>,
    #[serde(default)]
    pub order_interval_frequency: Option<u32>,
    #[serde(default)]
    pub order_interval_unit: Option<ProductOrderIntervalUnit>,
    #[serde(default)]
    pub storefront_purchase_options: Option<ProductStorefrontPurchaseOptions>,

    #[serde(with = "timestamp::option", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(with = "timestamp::option", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Product endpoints (API version 2021-01).
#[derive(Debug, Clone, Copy)]
pub struct Products<'a> {
    client: &'a RestClient,
}

impl RechargeResource for Products<'_> {
    const NAME: &'static str = "Product";
    const API_VERSION: ApiVersion = ApiVersion::V2021_01;
    const ID_PARAM: &'static str = "product_id";

    fn client(&self) -> &RestClient {
        self.client
    }
}

impl<'a> Products<'a> {
    /// Creates a handle for the product endpoints.
    #[must_use]
    pub const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Creates a product.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Scope`] without `write_products`.
    pub async fn create(
        &self,
        body: &ProductCreateBody,
    ) -> Result<ResourceResponse<Product>, ResourceError> {
        let body = serde_json::to_value(body)?;
        self.fetch(&CREATE, &[], Some(body), None, "product").await
    }

    /// Gets a product by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the product doesn't exist.
    pub async fn get(&self, product_id: u64) -> Result<ResourceResponse<Product>, ResourceError> {
        self.fetch(&GET, &[("product_id", product_id)], None, None, "product")
            .await
    }

    /// Updates a product.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the product doesn't exist.
    pub async fn update(
        &self,
        product_id: u64,
        body: &ProductUpdateBody,
    ) -> Result<ResourceResponse<Product>, ResourceError> {
        let body = serde_json::to_value(body)?;
        self.fetch(&UPDATE, &[("product_id", product_id)], Some(body), None, "product")
            .await
    }

    /// Deletes a product.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the product doesn't exist.
    pub async fn delete(&self, product_id: u64) -> Result<ResourceResponse<()>, ResourceError> {
        self.execute(&DELETE, &[("product_id", product_id)]).await
    }

    /// Lists products.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Scope`] without `read_products`.
    pub async fn list(
        &self,
        query: Option<&ProductListQuery>,
    ) -> Result<ResourceResponse<Vec<Product>>, ResourceError> {
        let query = optional_query(query)?;
        self.fetch(&LIST, &[], None, query, "products").await
    }

    /// Counts products.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Scope`] without `read_products`.
    pub async fn count(&self) -> Result<ResourceResponse<u64>, ResourceError> {
        self.fetch(&COUNT, &[], None, None, "count").await
    }
}

impl RestClient {
    /// Returns a handle for the product endpoints.
    #[must_use]
    pub const fn products(&self) -> Products<'_> {
        Products::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::serialize_to_query;
    use serde_json::json;

    #[test]
    fn test_product_paths_and_scopes() {
        assert_eq!(CREATE.endpoint(), "POST /products");
        assert_eq!(GET.endpoint(), "GET /products/{product_id}");
        assert_eq!(UPDATE.required_scopes, &["write_products"]);
        assert_eq!(DELETE.required_scopes, &["write_products"]);
        assert_eq!(LIST.required_scopes, &["read_products"]);
        assert_eq!(COUNT.template, "products/count");
    }

    #[test]
    fn test_enums_use_wire_names() {
        assert_eq!(
            serde_json::to_value(ProductStorefrontPurchaseOptions::SubscriptionAndOnetime).unwrap(),
            json!("subscription_and_onetime")
        );
        assert_eq!(
            serde_json::to_value(ProductOrderIntervalUnit::Week).unwrap(),
            json!("week")
        );
        assert_eq!(
            serde_json::to_value(ProductDiscountType::Percentage).unwrap(),
            json!("percentage")
        );
    }

    #[test]
    fn test_create_body_requires_only_shopify_product_id() {
        let body = ProductCreateBody {
            shopify_product_id: 1_255_183_683,
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"shopify_product_id": 1_255_183_683_u64})
        );
    }

    #[test]
    fn test_update_body_sends_interval_unit() {
        let body = ProductUpdateBody {
            shopify_product_id: 7,
            order_interval_unit: Some(ProductOrderIntervalUnit::Month),
            discount_amount: Some("5.0".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["order_interval_unit"], "month");
        assert_eq!(value["discount_amount"], "5.0");
        assert!(value.get("order_interval_frequency_options").is_none());
    }

    #[test]
    fn test_list_query() {
        let query = ProductListQuery {
            shopify_product_id: Some(99),
            page: Some(2),
            ..Default::default()
        };
        let params = serialize_to_query(&query).unwrap();
        assert_eq!(params["shopify_product_id"], "99");
        assert_eq!(params["page"], "2");
        assert!(!params.contains_key("limit"));
    }

    #[test]
    fn test_product_deserializes_from_recharge_shape() {
        let product: Product = serde_json::from_value(json!({
            "id": 1_327_844,
            "shopify_product_id": 1_255_183_683,
            "title": "Coffee",
            "handle": "coffee",
            "images": {"small": "https://cdn.example/s.png"},
            "charge_interval_frequency": 30,
            "discount_amount": 10.0,
            "discount_type": "percentage",
            "order_interval_unit": "day",
            "storefront_purchase_options": "subscription_only",
            "created_at": "2021-01-20T15:00:42",
            "updated_at": null
        }))
        .unwrap();

        assert_eq!(product.id, 1_327_844);
        assert_eq!(product.order_interval_unit, Some(ProductOrderIntervalUnit::Day));
        assert_eq!(
            product.images.and_then(|i| i.small).as_deref(),
            Some("https://cdn.example/s.png")
        );
        assert!(product.updated_at.is_none());
        assert!(product.modifiable_properties.is_none());
    }

    #[test]
    fn test_product_accepts_null_modifiable_properties() {
        let product: Product = serde_json::from_value(json!({
            "id": 7,
            "modifiable_properties": null
        }))
        .unwrap();
        assert!(product.modifiable_properties.is_none());

        let product: Product = serde_json::from_value(json!({
            "id": 7,
            "modifiable_properties": ["quantity"]
        }))
        .unwrap();
        assert_eq!(product.modifiable_properties, Some(vec!["quantity".to_string()]));
    }
}
