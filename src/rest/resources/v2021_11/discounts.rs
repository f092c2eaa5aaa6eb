//! Discount resource implementation.
//!
//! Discounts are codes that lower the price of charges. They can be limited
//! to products or collections, to purchase types, to sales channels and to a
//! number of redemptions.
//!
//! # Example
//!
//! ```rust,ignore
//! use recharge_api::rest::resources::v2021_11::{
//!     DiscountCreateBody, DiscountListQuery, DiscountStatus, DiscountValueType,
//! };
//!
//! let discounts = client.discounts();
//!
//! let created = discounts
//!     .create(&DiscountCreateBody {
//!         code: "SUMMER20".to_string(),
//!         value: Some("20".to_string()),
//!         value_type: Some(DiscountValueType::Percentage),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let query = DiscountListQuery { status: Some(DiscountStatus::Enabled), ..Default::default() };
//! let enabled = discounts.list(Some(&query)).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, RestClient};
use crate::config::ApiVersion;
use crate::rest::{
    optional_query, timestamp, RechargeResource, ResourceError, ResourcePath, ResourceResponse,
};

const CREATE: ResourcePath =
    ResourcePath::new(HttpMethod::Post, "discounts", &["write_discounts"]);
const GET: ResourcePath =
    ResourcePath::new(HttpMethod::Get, "discounts/{discount_id}", &["read_discounts"]);
const UPDATE: ResourcePath =
    ResourcePath::new(HttpMethod::Put, "discounts/{discount_id}", &["write_discounts"]);
const DELETE: ResourcePath =
    ResourcePath::new(HttpMethod::Delete, "discounts/{discount_id}", &["write_discounts"]);
const LIST: ResourcePath = ResourcePath::new(HttpMethod::Get, "discounts", &["read_discounts"]);

/// How a discount's value is applied.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DiscountValueType {
    Percentage,
    FixedAmount,
}

/// Whether a discount can be redeemed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DiscountStatus {
    Enabled,
    /// Not redeemable by new customers; existing applications keep working.
    Disabled,
    /// Not redeemable and removed from every address it was applied to.
    FullyDisabled,
}

/// Which purchases a discount applies to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum DiscountPurchaseItemType {
    All,
    Onetime,
    Subscription,
}

/// What kind of IDs `DiscountAppliesTo::ids` holds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DiscountAppliesToResource {
    ShopifyProduct,
    ShopifyCollectionId,
}

/// Restriction on who may redeem a discount for a first purchase.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DiscountFirstTimeCustomerRestriction {
    /// No restriction. Recharge sends this as the string `"null"`.
    #[serde(rename = "null")]
    None,
    #[serde(rename = "customer_must_not_exist_in_recharge")]
    CustomerMustNotExistInRecharge,
}

/// Limits a discount to products, collections or purchase types.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DiscountAppliesTo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_item_type: Option<DiscountPurchaseItemType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<DiscountAppliesToResource>,
}

/// Whether a discount may be applied through one channel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DiscountChannelSetting {
    pub can_apply: bool,
}

/// Per-channel application settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DiscountChannelSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api: Option<DiscountChannelSetting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkout_page: Option<DiscountChannelSetting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_portal: Option<DiscountChannelSetting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_portal: Option<DiscountChannelSetting>,
}

/// Redemption limits.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DiscountUsageLimits {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_application_per_customer: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_time_customer_restriction: Option<DiscountFirstTimeCustomerRestriction>,
    /// How many charges after the first the discount applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_subsequent_redemptions: Option<u32>,
    /// Total number of redemptions allowed across all customers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redemptions: Option<u32>,
}

/// Body for creating a discount.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DiscountCreateBody {
    /// The code customers enter.
    pub code: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub applies_to: Option<DiscountAppliesTo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_settings: Option<DiscountChannelSettings>,
    #[serde(with = "timestamp::option", default, skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
    /// Minimum subtotal, in whole currency units, before the discount applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisite_subtotal_min: Option<u64>,
    #[serde(with = "timestamp::option", default, skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DiscountStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_limits: Option<DiscountUsageLimits>,
    /// Decimal string, e.g. `"20"` or `"5.50"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<DiscountValueType>,
}

/// Body for updating a discount. Only the fields that are set are sent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DiscountUpdateBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applies_to: Option<DiscountAppliesTo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_settings: Option<DiscountChannelSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(with = "timestamp::option", default, skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisite_subtotal_min: Option<u64>,
    #[serde(with = "timestamp::option", default, skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DiscountStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_limits: Option<DiscountUsageLimits>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<DiscountValueType>,
}

/// Names the discount removed by a `discount_delete` batch task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiscountDeleteBody {
    pub discount_id: u64,
}

/// Filters for listing discounts.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct DiscountListQuery {
    #[serde(with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,
    #[serde(with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<DiscountValueType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DiscountStatus>,
    #[serde(with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
    #[serde(with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
}

/// A discount as returned by Recharge.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Discount {
    pub id: u64,

    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub value_type: Option<DiscountValueType>,
    #[serde(default)]
    pub status: Option<DiscountStatus>,
    #[serde(default)]
    pub applies_to: Option<DiscountAppliesTo>,
    #[serde(default)]
    pub channel_settings: Option<DiscountChannelSettings>,
    #[serde(default)]
    pub usage_limits: Option<DiscountUsageLimits>,
    #[serde(default)]
    pub prerequisite_subtotal_min: Option<u64>,
    /// Number of times the discount has been redeemed.
    #[serde(default)]
    pub times_used: Option<u64>,

    #[serde(with = "timestamp::option", default)]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(with = "timestamp::option", default)]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(with = "timestamp::option", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(with = "timestamp::option", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Discount endpoints (API version 2021-11).
#[derive(Debug, Clone, Copy)]
pub struct Discounts<'a> {
    client: &'a RestClient,
}

impl RechargeResource for Discounts<'_> {
    const NAME: &'static str = "Discount";
    const API_VERSION: ApiVersion = ApiVersion::V2021_11;
    const ID_PARAM: &'static str = "discount_id";

    fn client(&self) -> &RestClient {
        self.client
    }
}

impl<'a> Discounts<'a> {
    /// Creates a handle for the discount endpoints.
    #[must_use]
    pub const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Creates a discount.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the code is taken or
    /// the body is rejected.
    pub async fn create(
        &self,
        body: &DiscountCreateBody,
    ) -> Result<ResourceResponse<Discount>, ResourceError> {
        let body = serde_json::to_value(body)?;
        self.fetch(&CREATE, &[], Some(body), None, "discount").await
    }

    /// Gets a discount by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the discount doesn't exist.
    pub async fn get(&self, discount_id: u64) -> Result<ResourceResponse<Discount>, ResourceError> {
        self.fetch(&GET, &[("discount_id", discount_id)], None, None, "discount")
            .await
    }

    /// Updates a discount.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the discount doesn't exist.
    pub async fn update(
        &self,
        discount_id: u64,
        body: &DiscountUpdateBody,
    ) -> Result<ResourceResponse<Discount>, ResourceError> {
        let body = serde_json::to_value(body)?;
        self.fetch(&UPDATE, &[("discount_id", discount_id)], Some(body), None, "discount")
            .await
    }

    /// Deletes a discount.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the discount doesn't exist.
    pub async fn delete(&self, discount_id: u64) -> Result<ResourceResponse<()>, ResourceError> {
        self.execute(&DELETE, &[("discount_id", discount_id)]).await
    }

    /// Lists discounts.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Scope`] without `read_discounts`.
    pub async fn list(
        &self,
        query: Option<&DiscountListQuery>,
    ) -> Result<ResourceResponse<Vec<Discount>>, ResourceError> {
        let query = optional_query(query)?;
        self.fetch(&LIST, &[], None, query, "discounts").await
    }
}

impl RestClient {
    /// Returns a handle for the discount endpoints.
    #[must_use]
    pub const fn discounts(&self) -> Discounts<'_> {
        Discounts::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::serialize_to_query;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_discount_paths_and_scopes() {
        assert_eq!(CREATE.endpoint(), "POST /discounts");
        assert_eq!(GET.endpoint(), "GET /discounts/{discount_id}");
        assert_eq!(UPDATE.endpoint(), "PUT /discounts/{discount_id}");
        assert_eq!(DELETE.endpoint(), "DELETE /discounts/{discount_id}");
        assert_eq!(LIST.required_scopes, &["read_discounts"]);
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(
            serde_json::to_value(DiscountPurchaseItemType::Subscription).unwrap(),
            json!("SUBSCRIPTION")
        );
        assert_eq!(
            serde_json::to_value(DiscountStatus::FullyDisabled).unwrap(),
            json!("fully_disabled")
        );
        assert_eq!(
            serde_json::to_value(DiscountValueType::FixedAmount).unwrap(),
            json!("fixed_amount")
        );
        assert_eq!(
            serde_json::to_value(DiscountFirstTimeCustomerRestriction::None).unwrap(),
            json!("null")
        );
        assert_eq!(
            serde_json::to_value(DiscountAppliesToResource::ShopifyCollectionId).unwrap(),
            json!("shopify_collection_id")
        );
    }

    #[test]
    fn test_create_body_nests_settings() {
        let body = DiscountCreateBody {
            code: "SUMMER20".to_string(),
            value: Some("20".to_string()),
            value_type: Some(DiscountValueType::Percentage),
            starts_at: Some(Utc.with_ymd_and_hms(2021, 6, 1, 0, 0, 0).unwrap()),
            applies_to: Some(DiscountAppliesTo {
                ids: Some(vec![11, 12]),
                purchase_item_type: Some(DiscountPurchaseItemType::All),
                resource: Some(DiscountAppliesToResource::ShopifyProduct),
            }),
            channel_settings: Some(DiscountChannelSettings {
                api: Some(DiscountChannelSetting { can_apply: true }),
                ..Default::default()
            }),
            usage_limits: Some(DiscountUsageLimits {
                first_time_customer_restriction: Some(
                    DiscountFirstTimeCustomerRestriction::CustomerMustNotExistInRecharge,
                ),
                redemptions: Some(100),
                ..Default::default()
            }),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "code": "SUMMER20",
                "value": "20",
                "value_type": "percentage",
                "starts_at": "2021-06-01T00:00:00",
                "applies_to": {
                    "ids": [11, 12],
                    "purchase_item_type": "ALL",
                    "resource": "shopify_product"
                },
                "channel_settings": {"api": {"can_apply": true}},
                "usage_limits": {
                    "first_time_customer_restriction": "customer_must_not_exist_in_recharge",
                    "redemptions": 100
                }
            })
        );
    }

    #[test]
    fn test_list_query_status_filter() {
        let query = DiscountListQuery {
            status: Some(DiscountStatus::Enabled),
            discount_type: Some(DiscountValueType::Percentage),
            ..Default::default()
        };
        let params = serialize_to_query(&query).unwrap();
        assert_eq!(params["status"], "enabled");
        assert_eq!(params["discount_type"], "percentage");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_discount_deserializes_with_offset_timestamps() {
        let discount: Discount = serde_json::from_value(json!({
            "id": 59_568_555,
            "code": "SUMMER20",
            "value": "20.00",
            "value_type": "percentage",
            "status": "enabled",
            "usage_limits": {"redemptions": 100, "one_application_per_customer": false},
            "times_used": 3,
            "starts_at": "2021-06-01T00:00:00+00:00",
            "ends_at": null,
            "created_at": "2021-05-30T12:00:00+00:00"
        }))
        .unwrap();

        assert_eq!(discount.id, 59_568_555);
        assert_eq!(discount.status, Some(DiscountStatus::Enabled));
        assert_eq!(discount.usage_limits.and_then(|u| u.redemptions), Some(100));
        assert_eq!(
            discount.starts_at,
            Some(Utc.with_ymd_and_hms(2021, 6, 1, 0, 0, 0).unwrap())
        );
        assert!(discount.ends_at.is_none());
    }
}
