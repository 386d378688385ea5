//! Capability shared by every customer variant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use clientbook_core::{CustomerId, DiscountRate, DomainResult, Money};

use crate::contact::ContactUpdate;
use crate::customer::Customer;
use crate::email::Email;
use crate::event::CustomerEvent;

/// Customer variant. Informational only: behavior is reached through
/// [`CustomerAccount`], never by matching on the tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerTier {
    Standard,
    Premium,
    Vip,
}

impl core::fmt::Display for CustomerTier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            CustomerTier::Standard => "standard",
            CustomerTier::Premium => "premium",
            CustomerTier::Vip => "VIP",
        })
    }
}

/// Breakdown of a discounted price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub base: Money,
    pub rate: DiscountRate,
    pub discount: Money,
    pub amount_due: Money,
}

impl PriceQuote {
    pub fn new(base: Money, rate: DiscountRate) -> Self {
        let discount = base.portion(rate);
        Self {
            base,
            rate,
            discount,
            amount_due: base - discount,
        }
    }
}

/// What order processing (and any other caller) may rely on, whatever the
/// concrete customer variant is.
///
/// Implementors supply identity access, their tier, their fixed discount rate
/// and their `info()` rendering; discount arithmetic and contact maintenance
/// are shared.
pub trait CustomerAccount: core::fmt::Debug {
    fn customer(&self) -> &Customer;

    fn customer_mut(&mut self) -> &mut Customer;

    fn tier(&self) -> CustomerTier;

    /// Constant for the variant type.
    fn discount_rate(&self) -> DiscountRate;

    /// Human-readable profile.
    fn info(&self) -> String;

    fn quote(&self, base_amount: Money) -> PriceQuote {
        PriceQuote::new(base_amount, self.discount_rate())
    }

    /// Final payable amount for `base_amount`.
    fn calculate_discount(&self, base_amount: Money) -> Money {
        self.quote(base_amount).amount_due
    }

    fn customer_id(&self) -> CustomerId {
        self.customer().customer_id()
    }

    fn full_name(&self) -> String {
        self.customer().full_name()
    }

    fn email(&self) -> &Email {
        self.customer().email()
    }

    fn set_email(
        &mut self,
        value: &str,
        occurred_at: DateTime<Utc>,
    ) -> DomainResult<CustomerEvent> {
        self.customer_mut().set_email(value, occurred_at)
    }

    fn update_contact_info(
        &mut self,
        update: &ContactUpdate,
        occurred_at: DateTime<Utc>,
    ) -> DomainResult<CustomerEvent> {
        self.customer_mut().update_contact_info(update, occurred_at)
    }
}
