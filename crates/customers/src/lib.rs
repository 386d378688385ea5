//! Customers domain module (standard, premium and VIP tiers).
//!
//! This crate contains business rules for customers, implemented purely as
//! deterministic domain logic (no IO, no console output, no storage). Operations
//! return values and [`CustomerEvent`]s; narrating them is up to the caller.

pub mod account;
pub mod contact;
pub mod customer;
pub mod email;
pub mod event;
pub mod loyalty;
pub mod premium;
pub mod registry;
pub mod vip;

pub use account::{CustomerAccount, CustomerTier, PriceQuote};
pub use contact::{ContactInfo, ContactUpdate};
pub use customer::{Customer, RegisterCustomer};
pub use email::Email;
pub use event::{
    ContactInfoUpdated, CustomerEvent, CustomerRegistered, EmailChanged, LoyaltyPointsAdded,
    PersonalManagerAssigned, PremiumSupportGranted, VipLoungeAccessed,
};
pub use loyalty::{LoyaltyLevel, LoyaltyProgram, LoyaltyUpdate};
pub use premium::PremiumCustomer;
pub use registry::CustomerRegistry;
pub use vip::VipCustomer;
