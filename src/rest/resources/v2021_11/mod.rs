//! Resources served under API version 2021-11.

mod async_batches;
mod discounts;
mod onetimes;
mod plans;

pub use async_batches::{
    AsyncBatch, AsyncBatchCreateBody, AsyncBatchCreateTaskBody, AsyncBatchTask,
    AsyncBatchTaskBody, AsyncBatchTaskResult, AsyncBatchType, AsyncBatches,
};
pub use discounts::{
    Discount, DiscountAppliesTo, DiscountAppliesToResource, DiscountChannelSetting,
    DiscountChannelSettings, DiscountCreateBody, DiscountDeleteBody,
    DiscountFirstTimeCustomerRestriction, DiscountListQuery, DiscountPurchaseItemType,
    DiscountStatus, DiscountUpdateBody, DiscountUsageLimits, DiscountValueType, Discounts,
};
pub use onetimes::{ExternalVariantId, OnetimeCreateBody, OnetimeDeleteBody};
pub use plans::{
    ExternalProductId, PlanCreateBody, PlanDeleteBody, PlanIntervalUnit, PlanSubscriptionPreferences,
    PlanType, PlanUpdateBody,
};
