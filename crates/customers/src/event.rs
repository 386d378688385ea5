use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use clientbook_core::CustomerId;
use clientbook_events::Event;

use crate::account::{CustomerAccount, CustomerTier};
use crate::email::Email;
use crate::loyalty::LoyaltyLevel;

/// Event: CustomerRegistered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRegistered {
    pub customer_id: CustomerId,
    pub tier: CustomerTier,
    pub full_name: String,
    pub occurred_at: DateTime<Utc>,
}

/// Event: EmailChanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailChanged {
    pub customer_id: CustomerId,
    pub previous: Email,
    pub current: Email,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ContactInfoUpdated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfoUpdated {
    pub customer_id: CustomerId,
    pub full_name: String,
    pub email_changed: bool,
    pub phone_changed: bool,
    pub address_changed: bool,
    pub occurred_at: DateTime<Utc>,
}

/// Event: LoyaltyPointsAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoyaltyPointsAdded {
    pub customer_id: CustomerId,
    pub points_added: u64,
    pub total_points: u64,
    pub level: LoyaltyLevel,
    pub occurred_at: DateTime<Utc>,
}

/// Event: PersonalManagerAssigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalManagerAssigned {
    pub customer_id: CustomerId,
    pub full_name: String,
    pub manager: String,
    pub occurred_at: DateTime<Utc>,
}

/// Event: PremiumSupportGranted (24/7 priority support).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumSupportGranted {
    pub customer_id: CustomerId,
    pub full_name: String,
    pub occurred_at: DateTime<Utc>,
}

/// Event: VipLoungeAccessed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VipLoungeAccessed {
    pub customer_id: CustomerId,
    pub full_name: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerEvent {
    CustomerRegistered(CustomerRegistered),
    EmailChanged(EmailChanged),
    ContactInfoUpdated(ContactInfoUpdated),
    LoyaltyPointsAdded(LoyaltyPointsAdded),
    PersonalManagerAssigned(PersonalManagerAssigned),
    PremiumSupportGranted(PremiumSupportGranted),
    VipLoungeAccessed(VipLoungeAccessed),
}

impl CustomerEvent {
    /// Describe a freshly registered customer of any tier.
    pub fn registered(account: &dyn CustomerAccount) -> Self {
        let customer = account.customer();
        CustomerEvent::CustomerRegistered(CustomerRegistered {
            customer_id: customer.customer_id(),
            tier: account.tier(),
            full_name: customer.full_name(),
            occurred_at: customer.registered_at(),
        })
    }

    pub fn customer_id(&self) -> CustomerId {
        match self {
            CustomerEvent::CustomerRegistered(e) => e.customer_id,
            CustomerEvent::EmailChanged(e) => e.customer_id,
            CustomerEvent::ContactInfoUpdated(e) => e.customer_id,
            CustomerEvent::LoyaltyPointsAdded(e) => e.customer_id,
            CustomerEvent::PersonalManagerAssigned(e) => e.customer_id,
            CustomerEvent::PremiumSupportGranted(e) => e.customer_id,
            CustomerEvent::VipLoungeAccessed(e) => e.customer_id,
        }
    }
}

impl Event for CustomerEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CustomerEvent::CustomerRegistered(_) => "customers.customer.registered",
            CustomerEvent::EmailChanged(_) => "customers.email.changed",
            CustomerEvent::ContactInfoUpdated(_) => "customers.contact.updated",
            CustomerEvent::LoyaltyPointsAdded(_) => "customers.loyalty.points_added",
            CustomerEvent::PersonalManagerAssigned(_) => "customers.vip.manager_assigned",
            CustomerEvent::PremiumSupportGranted(_) => "customers.premium.support_granted",
            CustomerEvent::VipLoungeAccessed(_) => "customers.vip.lounge_accessed",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CustomerEvent::CustomerRegistered(e) => e.occurred_at,
            CustomerEvent::EmailChanged(e) => e.occurred_at,
            CustomerEvent::ContactInfoUpdated(e) => e.occurred_at,
            CustomerEvent::LoyaltyPointsAdded(e) => e.occurred_at,
            CustomerEvent::PersonalManagerAssigned(e) => e.occurred_at,
            CustomerEvent::PremiumSupportGranted(e) => e.occurred_at,
            CustomerEvent::VipLoungeAccessed(e) => e.occurred_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::customer::Customer;
    use crate::customer::tests::{register_cmd, test_time};
    use crate::premium::PremiumCustomer;

    #[test]
    fn registered_event_carries_tier_and_identity() {
        let premium = PremiumCustomer::new(Customer::new(register_cmd()).unwrap(), None);
        let event = CustomerEvent::registered(&premium);

        assert_eq!(event.customer_id(), CustomerId::new(1001));
        assert_eq!(event.event_type(), "customers.customer.registered");
        assert_eq!(event.occurred_at(), test_time());
        assert!(matches!(
            event,
            CustomerEvent::CustomerRegistered(e) if e.tier == CustomerTier::Premium
        ));
    }

    #[test]
    fn email_change_reports_its_customer() {
        let mut customer = Customer::new(register_cmd()).unwrap();
        let event = customer.set_email("ivan@example.com", test_time()).unwrap();

        assert_eq!(event.customer_id(), customer.customer_id());
        assert_eq!(event.event_type(), "customers.email.changed");
    }
}
