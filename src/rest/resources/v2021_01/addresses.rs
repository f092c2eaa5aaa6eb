//! Address resource implementation.
//!
//! Addresses belong to customers and carry the subscriptions shipped to
//! them. Creating and listing go through the owning customer:
//! - `POST /customers/{customer_id}/addresses`
//! - `GET /customers/{customer_id}/addresses`
//!
//! Everything else addresses the address directly:
//! - `GET /addresses/{address_id}`
//! - `PUT /addresses/{address_id}`
//! - `DELETE /addresses/{address_id}`
//! - `GET /addresses/count`
//!
//! # Special Operations
//!
//! - **Validate**: `POST /addresses/validate_address` checks an address
//!   without storing it. It needs no scopes.
//! - **Discounts**: `apply_discount` and `remove_discount` attach or detach a
//!   discount on the address.
//!
//! # Example
//!
//! ```rust,ignore
//! use recharge_api::rest::resources::v2021_01::{AddressApplyDiscount, AddressUpdateBody};
//!
//! let addresses = client.addresses();
//!
//! let address = addresses.get(12_345).await?;
//! println!("Ships to {:?}", address.city);
//!
//! let update = AddressUpdateBody {
//!     phone: Some("555-0100".to_string()),
//!     ..Default::default()
//! };
//! addresses.update(12_345, Some(&update)).await?;
//!
//! addresses
//!     .apply_discount(12_345, &AddressApplyDiscount::Code { discount_code: "SAVE10".to_string() })
//!     .await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, RestClient};
use crate::config::ApiVersion;
use crate::rest::{
    optional_query, timestamp, RechargeResource, ResourceError, ResourcePath, ResourceResponse,
};

const CREATE: ResourcePath = ResourcePath::new(
    HttpMethod::Post,
    "customers/{customer_id}/addresses",
    &["write_customers"],
);
const GET: ResourcePath =
    ResourcePath::new(HttpMethod::Get, "addresses/{address_id}", &["read_customers"]);
const UPDATE: ResourcePath =
    ResourcePath::new(HttpMethod::Put, "addresses/{address_id}", &["write_customers"]);
const DELETE: ResourcePath =
    ResourcePath::new(HttpMethod::Delete, "addresses/{address_id}", &["write_customers"]);
const LIST: ResourcePath = ResourcePath::new(
    HttpMethod::Get,
    "customers/{customer_id}/addresses",
    &["read_customers"],
);
const COUNT: ResourcePath =
    ResourcePath::new(HttpMethod::Get, "addresses/count", &["read_customers"]);
const VALIDATE: ResourcePath =
    ResourcePath::new(HttpMethod::Post, "addresses/validate_address", &[]);
const APPLY_DISCOUNT: ResourcePath = ResourcePath::new(
    HttpMethod::Post,
    "addresses/{address_id}/apply_discount",
    &["write_discounts"],
);
const REMOVE_DISCOUNT: ResourcePath = ResourcePath::new(
    HttpMethod::Post,
    "addresses/{address_id}/remove_discount",
    &["write_discounts"],
);

/// A custom name/value pair stored on an address.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AddressNoteAttribute {
    /// The attribute name.
    pub name: String,
    /// The attribute value.
    pub value: String,
}

/// A shipping line that replaces the store's default for this address.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AddressShippingLinesOverride {
    /// The shipping rate code.
    pub code: String,
    /// The price, as a decimal string.
    pub price: String,
    /// The title shown to the customer.
    pub title: String,
}

/// Body for creating an address.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AddressCreateBody {
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub country: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub province: String,
    pub zip: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart_note: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_attributes: Option<Vec<AddressNoteAttribute>>,

    /// ISO 4217 currency code for charges shipped to this address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presentment_currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_lines_override: Option<Vec<AddressShippingLinesOverride>>,
}

/// Body for updating an address. Only the fields that are set are sent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AddressUpdateBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_attributes: Option<Vec<AddressNoteAttribute>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_lines_override: Option<Vec<AddressShippingLinesOverride>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

/// Filters for listing a customer's addresses.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct AddressListQuery {
    #[serde(with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,
    #[serde(with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_id: Option<u64>,
    /// Restrict to these address IDs. Sent comma-separated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<u64>>,
    /// Page size. Recharge caps this at 250.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
    #[serde(with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
}

/// Filters for counting addresses.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct AddressCountQuery {
    #[serde(with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,
    #[serde(with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_id: Option<u64>,
    #[serde(with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
    #[serde(with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
}

/// Body for validating an address.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AddressValidateBody {
    pub address1: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
}

/// Which discount to apply to an address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum AddressApplyDiscount {
    /// Apply by the code customers type in.
    Code {
        /// The discount code.
        discount_code: String,
    },
    /// Apply by Recharge discount ID.
    Id {
        /// The discount ID.
        discount_id: u64,
    },
}

/// An address as returned by Recharge.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Address {
    /// The unique identifier of the address.
    pub id: u64,

    /// The customer the address belongs to.
    #[serde(default)]
    pub customer_id: Option<u64>,

    #[serde(default)]
    pub address1: Option<String>,
    #[serde(default)]
    pub address2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub cart_note: Option<String>,

    #[serde(default)]
    pub note_attributes: Option<Vec<AddressNoteAttribute>>,

    #[serde(default)]
    pub shipping_lines_override: Option<Vec<AddressShippingLinesOverride>>,

    /// The discount currently applied, if any.
    #[serde(default)]
    pub discount_id: Option<u64>,

    #[serde(default)]
    pub presentment_currency: Option<String>,

    #[serde(with = "timestamp::option", default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(with = "timestamp::option", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Address endpoints (API version 2021-01).
#[derive(Debug, Clone, Copy)]
pub struct Addresses<'a> {
    client: &'a RestClient,
}

impl RechargeResource for Addresses<'_> {
    const NAME: &'static str = "Address";
    const API_VERSION: ApiVersion = ApiVersion::V2021_01;
    const ID_PARAM: &'static str = "address_id";

    fn client(&self) -> &RestClient {
        self.client
    }
}

impl<'a> Addresses<'a> {
    /// Creates a handle for the address endpoints.
    #[must_use]
    pub const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Creates an address for the customer.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Scope`] without `write_customers`, or
    /// [`ResourceError::ValidationFailed`] if Recharge rejects the body.
    pub async fn create(
        &self,
        customer_id: u64,
        body: &AddressCreateBody,
    ) -> Result<ResourceResponse<Address>, ResourceError> {
        let body = serde_json::to_value(body)?;
        self.fetch(&CREATE, &[("customer_id", customer_id)], Some(body), None, "address")
            .await
    }

    /// Gets an address by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the address doesn't exist.
    pub async fn get(&self, address_id: u64) -> Result<ResourceResponse<Address>, ResourceError> {
        self.fetch(&GET, &[("address_id", address_id)], None, None, "address")
            .await
    }

    /// Updates an address. Without a body an empty update is sent.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the address doesn't exist.
    pub async fn update(
        &self,
        address_id: u64,
        body: Option<&AddressUpdateBody>,
    ) -> Result<ResourceResponse<Address>, ResourceError> {
        let body = body.map(serde_json::to_value).transpose()?;
        self.fetch(&UPDATE, &[("address_id", address_id)], body, None, "address")
            .await
    }

    /// Deletes an address.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the address doesn't exist.
    pub async fn delete(&self, address_id: u64) -> Result<ResourceResponse<()>, ResourceError> {
        self.execute(&DELETE, &[("address_id", address_id)]).await
    }

    /// Lists all addresses for a customer.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Scope`] without `read_customers`.
    pub async fn list(
        &self,
        customer_id: u64,
        query: Option<&AddressListQuery>,
    ) -> Result<ResourceResponse<Vec<Address>>, ResourceError> {
        let query = optional_query(query)?;
        self.fetch(&LIST, &[("customer_id", customer_id)], None, query, "addresses")
            .await
    }

    /// Retrieves the count of addresses.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Scope`] without `read_customers`.
    pub async fn count(
        &self,
        query: Option<&AddressCountQuery>,
    ) -> Result<ResourceResponse<u64>, ResourceError> {
        let query = optional_query(query)?;
        self.fetch(&COUNT, &[], None, query, "count").await
    }

    /// Validates an address. No scopes are checked.
    ///
    /// The whole response body is returned as Recharge sent it.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the address is rejected.
    pub async fn validate(
        &self,
        body: &AddressValidateBody,
    ) -> Result<ResourceResponse<serde_json::Value>, ResourceError> {
        let body = serde_json::to_value(body)?;
        let response = self.send(&VALIDATE, &[], Some(body), None).await?;
        Ok(ResourceResponse::from_body(response))
    }

    /// Applies a discount to an address.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Scope`] without `write_discounts`.
    pub async fn apply_discount(
        &self,
        address_id: u64,
        body: &AddressApplyDiscount,
    ) -> Result<ResourceResponse<Address>, ResourceError> {
        let body = serde_json::to_value(body)?;
        self.fetch(
            &APPLY_DISCOUNT,
            &[("address_id", address_id)],
            Some(body),
            None,
            "address",
        )
        .await
    }

    /// Removes the discount from an address.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Scope`] without `write_discounts`.
    pub async fn remove_discount(
        &self,
        address_id: u64,
    ) -> Result<ResourceResponse<Address>, ResourceError> {
        self.fetch(&REMOVE_DISCOUNT, &[("address_id", address_id)], None, None, "address")
            .await
    }
}

impl RestClient {
    /// Returns a handle for the address endpoints.
    #[must_use]
    pub const fn addresses(&self) -> Addresses<'_> {
        Addresses::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::serialize_to_query;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_address_paths_and_scopes() {
        assert_eq!(CREATE.endpoint(), "POST /customers/{customer_id}/addresses");
        assert_eq!(GET.required_scopes, &["read_customers"]);
        assert_eq!(UPDATE.required_scopes, &["write_customers"]);
        assert_eq!(DELETE.http_method, HttpMethod::Delete);
        assert_eq!(LIST.template, "customers/{customer_id}/addresses");
        assert_eq!(COUNT.template, "addresses/count");
        assert!(!VALIDATE.is_scoped());
        assert_eq!(APPLY_DISCOUNT.required_scopes, &["write_discounts"]);
        assert_eq!(REMOVE_DISCOUNT.http_method, HttpMethod::Post);
    }

    #[test]
    fn test_create_body_omits_unset_optionals() {
        let body = AddressCreateBody {
            address1: "1 Main St".to_string(),
            city: "Austin".to_string(),
            zip: "78701".to_string(),
            company: Some("Acme".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["address1"], "1 Main St");
        assert_eq!(value["address2"], "");
        assert_eq!(value["company"], "Acme");
        assert!(value.get("cart_note").is_none());
        assert!(value.get("presentment_currency").is_none());
    }

    #[test]
    fn test_update_body_only_sends_set_fields() {
        let body = AddressUpdateBody {
            phone: Some("555-0100".to_string()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"phone": "555-0100"}));
    }

    #[test]
    fn test_apply_discount_serializes_either_shape() {
        let by_code = AddressApplyDiscount::Code {
            discount_code: "SAVE10".to_string(),
        };
        let by_id = AddressApplyDiscount::Id { discount_id: 42 };

        assert_eq!(serde_json::to_value(&by_code).unwrap(), json!({"discount_code": "SAVE10"}));
        assert_eq!(serde_json::to_value(&by_id).unwrap(), json!({"discount_id": 42}));
    }

    #[test]
    fn test_list_query_formats_timestamps_and_ids() {
        let query = AddressListQuery {
            created_at_min: Some(Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap()),
            ids: Some(vec![1, 2]),
            limit: Some(50),
            ..Default::default()
        };

        let params = serialize_to_query(&query).unwrap();
        assert_eq!(params["created_at_min"], "2021-01-01T00:00:00");
        assert_eq!(params["ids"], "1,2");
        assert_eq!(params["limit"], "50");
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_address_deserializes_from_recharge_shape() {
        let address: Address = serde_json::from_value(json!({
            "id": 3_517_584,
            "customer_id": 10_526_473,
            "address1": "1 Main St",
            "address2": null,
            "city": "Austin",
            "province": "Texas",
            "zip": "78701",
            "country": "United States",
            "note_attributes": [{"name": "gift", "value": "yes"}],
            "shipping_lines_override": null,
            "discount_id": null,
            "presentment_currency": "USD",
            "created_at": "2021-01-20T15:00:42",
            "updated_at": "2021-02-01T08:30:00"
        }))
        .unwrap();

        assert_eq!(address.id, 3_517_584);
        assert_eq!(address.customer_id, Some(10_526_473));
        assert!(address.address2.is_none());
        assert_eq!(address.note_attributes.as_ref().map(Vec::len), Some(1));
        assert_eq!(
            address.created_at,
            Some(Utc.with_ymd_and_hms(2021, 1, 20, 15, 0, 42).unwrap())
        );
    }

    #[test]
    fn test_address_accepts_null_note_attributes() {
        let address: Address = serde_json::from_value(json!({
            "id": 1,
            "note_attributes": null,
            "shipping_lines_override": null
        }))
        .unwrap();

        assert!(address.note_attributes.is_none());
        assert!(address.shipping_lines_override.is_none());
    }
}
