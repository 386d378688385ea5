use chrono::{DateTime, Utc};

use clientbook_core::{DiscountRate, Entity};

use crate::account::{CustomerAccount, CustomerTier};
use crate::customer::Customer;
use crate::event::{CustomerEvent, PremiumSupportGranted};

/// Premium customer: a [`Customer`] with a 15% discount and priority support.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PremiumCustomer {
    customer: Customer,
    premium_since: DateTime<Utc>,
}

impl PremiumCustomer {
    pub const DISCOUNT_PERCENT: u8 = 15;

    /// `premium_since` defaults to the registration time.
    pub(crate) fn new(customer: Customer, premium_since: Option<DateTime<Utc>>) -> Self {
        let premium_since = premium_since.unwrap_or_else(|| customer.registered_at());
        Self {
            customer,
            premium_since,
        }
    }

    pub fn premium_since(&self) -> DateTime<Utc> {
        self.premium_since
    }

    /// Grant 24/7 priority support. No state changes.
    pub fn premium_support(&self, occurred_at: DateTime<Utc>) -> CustomerEvent {
        CustomerEvent::PremiumSupportGranted(PremiumSupportGranted {
            customer_id: self.customer.customer_id(),
            full_name: self.customer.full_name(),
            occurred_at,
        })
    }
}

impl Entity for PremiumCustomer {
    type Id = clientbook_core::CustomerId;

    fn id(&self) -> &Self::Id {
        self.customer.id()
    }
}

impl CustomerAccount for PremiumCustomer {
    fn customer(&self) -> &Customer {
        &self.customer
    }

    fn customer_mut(&mut self) -> &mut Customer {
        &mut self.customer
    }

    fn tier(&self) -> CustomerTier {
        CustomerTier::Premium
    }

    fn discount_rate(&self) -> DiscountRate {
        DiscountRate::from_percent(Self::DISCOUNT_PERCENT)
    }

    fn info(&self) -> String {
        format!(
            "{}\nPremium since: {}",
            self.customer.info(),
            self.premium_since.format("%d.%m.%Y")
        )
    }
}

impl core::fmt::Display for PremiumCustomer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "PremiumCustomer({}, {})",
            self.customer.customer_id(),
            self.customer.full_name()
        )
    }
}
