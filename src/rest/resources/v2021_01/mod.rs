//! Resources served under API version 2021-01.

mod addresses;
mod products;

pub use addresses::{
    Address, AddressApplyDiscount, AddressCountQuery, AddressCreateBody, AddressListQuery,
    AddressNoteAttribute, AddressShippingLinesOverride, AddressUpdateBody, AddressValidateBody,
    Addresses,
};
pub use products::{
    Product, ProductCreateBody, ProductDiscountType, ProductImages, ProductListQuery,
    ProductOrderIntervalUnit, ProductStorefrontPurchaseOptions, ProductUpdateBody, Products,
};
