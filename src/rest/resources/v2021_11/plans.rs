//! Plan bodies used by `bulk_plans_*` async batch tasks.
//!
//! A plan is a purchase option (subscription, prepaid or one-time) offered
//! for a product. Plans are only written through async batches here.

use serde::{Deserialize, Serialize};

use super::discounts::DiscountValueType;

/// The kind of purchase a plan offers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlanType {
    Subscription,
    Prepaid,
    Onetime,
}

/// The unit of a plan's charge and order intervals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlanIntervalUnit {
    Day,
    Week,
    Month,
}

/// Identifies a product in the connected ecommerce platform.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ExternalProductId {
    pub ecommerce: String,
}

/// Charge and delivery schedule of a subscription or prepaid plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanSubscriptionPreferences {
    pub charge_interval_frequency: u32,
    pub interval_unit: PlanIntervalUnit,
    pub order_interval_frequency: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutoff_day_of_month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutoff_day_of_week: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_after_specific_number_of_charges: Option<u32>,
}

/// Body of a `bulk_plans_create` task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanCreateBody {
    pub external_product_id: ExternalProductId,
    pub title: String,
    #[serde(rename = "type")]
    pub plan_type: PlanType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<DiscountValueType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_preferences: Option<PlanSubscriptionPreferences>,
}

/// Body of a `bulk_plans_update` task.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PlanUpdateBody {
    /// The plan to update.
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<DiscountValueType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_preferences: Option<PlanSubscriptionPreferences>,
}

/// Body of a `bulk_plans_delete` task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanDeleteBody {
    /// The plan to delete.
    pub id: u64,
}
