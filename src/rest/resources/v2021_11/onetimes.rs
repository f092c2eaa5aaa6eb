//! One-time product bodies used by `onetime_*` async batch tasks.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifies a product variant in the connected ecommerce platform.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ExternalVariantId {
    pub ecommerce: String,
}

/// Body of an `onetime_create` task: adds a one-time item to the next
/// charge of an address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OnetimeCreateBody {
    pub address_id: u64,
    pub external_variant_id: ExternalVariantId,
    /// Charge date, sent as `YYYY-MM-DD`.
    pub next_charge_scheduled_at: NaiveDate,
    pub quantity: u32,
    /// Decimal string. Defaults to the store price when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_title: Option<String>,
}

/// Body of an `onetime_delete` task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OnetimeDeleteBody {
    pub onetime_id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_onetime_create_body_formats_date() {
        let body = OnetimeCreateBody {
            address_id: 3_517_584,
            external_variant_id: ExternalVariantId {
                ecommerce: "4242".to_string(),
            },
            next_charge_scheduled_at: NaiveDate::from_ymd_opt(2021, 12, 1).unwrap(),
            quantity: 2,
            price: None,
            product_title: Some("Mug".to_string()),
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "address_id": 3_517_584,
                "external_variant_id": {"ecommerce": "4242"},
                "next_charge_scheduled_at": "2021-12-01",
                "quantity": 2,
                "product_title": "Mug"
            })
        );
    }
}
