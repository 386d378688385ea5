use chrono::{DateTime, Utc};

use clientbook_core::{CustomerId, DiscountRate, DomainError, DomainResult, Entity};

use crate::account::{CustomerAccount, CustomerTier};
use crate::customer::Customer;
use crate::event::{CustomerEvent, LoyaltyPointsAdded, PersonalManagerAssigned, VipLoungeAccessed};
use crate::loyalty::{LoyaltyLevel, LoyaltyProgram};

const NOT_ASSIGNED: &str = "Not assigned";

/// VIP customer: a [`Customer`] with a 25% discount, an optional personal
/// manager and a loyalty program that starts at Gold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VipCustomer {
    customer: Customer,
    loyalty: LoyaltyProgram,
    personal_manager: Option<String>,
}

impl VipCustomer {
    pub const DISCOUNT_PERCENT: u8 = 25;
    pub const WELCOME_POINTS: u64 = 1500;

    pub(crate) fn new(customer: Customer, personal_manager: Option<String>) -> DomainResult<Self> {
        let personal_manager = personal_manager.map(validate_manager).transpose()?;
        Ok(Self {
            customer,
            loyalty: LoyaltyProgram::with_points(Self::WELCOME_POINTS),
            personal_manager,
        })
    }

    pub fn personal_manager(&self) -> Option<&str> {
        self.personal_manager.as_deref()
    }

    pub fn loyalty(&self) -> &LoyaltyProgram {
        &self.loyalty
    }

    pub fn loyalty_points(&self) -> u64 {
        self.loyalty.points()
    }

    pub fn loyalty_level(&self) -> LoyaltyLevel {
        self.loyalty.level()
    }

    pub fn loyalty_info(&self) -> String {
        self.loyalty.loyalty_info()
    }

    /// Credit loyalty points; see [`LoyaltyProgram::add_points`].
    pub fn add_points(
        &mut self,
        points: i64,
        occurred_at: DateTime<Utc>,
    ) -> DomainResult<CustomerEvent> {
        let update = self.loyalty.add_points(points)?;
        tracing::debug!(
            customer_id = %self.customer.customer_id(),
            added = update.added,
            total = update.total,
            level = %update.level,
            "loyalty points added"
        );

        Ok(CustomerEvent::LoyaltyPointsAdded(LoyaltyPointsAdded {
            customer_id: self.customer.customer_id(),
            points_added: update.added,
            total_points: update.total,
            level: update.level,
            occurred_at,
        }))
    }

    /// Assign (or replace) the personal manager.
    pub fn assign_personal_manager(
        &mut self,
        name: impl Into<String>,
        occurred_at: DateTime<Utc>,
    ) -> DomainResult<CustomerEvent> {
        let manager = validate_manager(name.into())?;
        self.personal_manager = Some(manager.clone());
        tracing::debug!(
            customer_id = %self.customer.customer_id(),
            manager = %manager,
            "personal manager assigned"
        );

        Ok(CustomerEvent::PersonalManagerAssigned(PersonalManagerAssigned {
            customer_id: self.customer.customer_id(),
            full_name: self.customer.full_name(),
            manager,
            occurred_at,
        }))
    }

    /// Grant VIP lounge access. No state changes.
    pub fn use_vip_lounge(&self, occurred_at: DateTime<Utc>) -> CustomerEvent {
        CustomerEvent::VipLoungeAccessed(VipLoungeAccessed {
            customer_id: self.customer.customer_id(),
            full_name: self.customer.full_name(),
            occurred_at,
        })
    }
}

fn validate_manager(name: String) -> DomainResult<String> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("personal manager name cannot be empty"));
    }
    Ok(name)
}

impl Entity for VipCustomer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        self.customer.id()
    }
}

impl CustomerAccount for VipCustomer {
    fn customer(&self) -> &Customer {
        &self.customer
    }

    fn customer_mut(&mut self) -> &mut Customer {
        &mut self.customer
    }

    fn tier(&self) -> CustomerTier {
        CustomerTier::Vip
    }

    fn discount_rate(&self) -> DiscountRate {
        DiscountRate::from_percent(Self::DISCOUNT_PERCENT)
    }

    fn info(&self) -> String {
        format!(
            "{}\nVIP status\nPersonal manager: {}\n{}",
            self.customer.info(),
            self.personal_manager().unwrap_or(NOT_ASSIGNED),
            self.loyalty.loyalty_info()
        )
    }
}

impl core::fmt::Display for VipCustomer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "VipCustomer({}, {})",
            self.customer.customer_id(),
            self.customer.full_name()
        )
    }
}

#[cfg(test)]
mod tests {
    use clientbook_core::Money;
    use proptest::prelude::*;

    use super::*;
    use crate::customer::tests::{register_cmd, test_time};

    fn vip(manager: Option<&str>) -> VipCustomer {
        VipCustomer::new(
            Customer::new(register_cmd()).unwrap(),
            manager.map(str::to_string),
        )
        .unwrap()
    }

    #[test]
    fn starts_gold_with_welcome_points() {
        let customer = vip(None);
        assert_eq!(customer.loyalty_points(), 1500);
        assert_eq!(customer.loyalty_level(), LoyaltyLevel::Gold);
    }

    #[test]
    fn adding_points_keeps_gold() {
        let mut customer = vip(None);
        let event = customer.add_points(250, test_time()).unwrap();

        assert_eq!(customer.loyalty_points(), 1750);
        assert_eq!(customer.loyalty_level(), LoyaltyLevel::Gold);
        match event {
            CustomerEvent::LoyaltyPointsAdded(e) => {
                assert_eq!(e.points_added, 250);
                assert_eq!(e.total_points, 1750);
                assert_eq!(e.level, LoyaltyLevel::Gold);
            }
            _ => panic!("Expected LoyaltyPointsAdded event"),
        }
    }

    #[test]
    fn negative_points_are_rejected() {
        let mut customer = vip(None);
        let err = customer.add_points(-10, test_time()).unwrap_err();

        assert!(matches!(err, DomainError::InvalidArgument(_)));
        assert_eq!(customer.loyalty_points(), 1500);
    }

    #[test]
    fn discount_is_twenty_five_percent() {
        let quote = vip(None).quote(Money::from_minor(500_000));

        assert_eq!(quote.discount, Money::from_minor(125_000));
        assert_eq!(quote.amount_due, Money::from_minor(375_000));
    }

    #[test]
    fn info_includes_manager_and_loyalty() {
        let customer = vip(Some("Natalia Ivanova"));
        let expected_tail =
            "\nVIP status\nPersonal manager: Natalia Ivanova\nLevel: Gold, Points: 1500";

        assert!(customer.info().starts_with(&customer.customer().info()));
        assert!(customer.info().ends_with(expected_tail));
    }

    #[test]
    fn info_uses_placeholder_without_manager() {
        assert!(vip(None).info().contains("Personal manager: Not assigned"));
    }

    #[test]
    fn assign_personal_manager_replaces_previous() {
        let mut customer = vip(Some("Natalia Ivanova"));
        let event = customer
            .assign_personal_manager("Olena Sydorenko", test_time())
            .unwrap();

        assert_eq!(customer.personal_manager(), Some("Olena Sydorenko"));
        match event {
            CustomerEvent::PersonalManagerAssigned(e) => {
                assert_eq!(e.manager, "Olena Sydorenko");
                assert_eq!(e.full_name, "Ivan Petrenko");
            }
            _ => panic!("Expected PersonalManagerAssigned event"),
        }
    }

    #[test]
    fn blank_manager_is_rejected() {
        let mut customer = vip(Some("Natalia Ivanova"));
        assert!(matches!(
            customer.assign_personal_manager("  ", test_time()),
            Err(DomainError::Validation(_))
        ));
        assert_eq!(customer.personal_manager(), Some("Natalia Ivanova"));

        let base = Customer::new(register_cmd()).unwrap();
        assert!(VipCustomer::new(base, Some(String::new())).is_err());
    }

    #[test]
    fn lounge_access_leaves_state_alone() {
        let customer = vip(None);
        let before = customer.clone();

        assert!(matches!(
            customer.use_vip_lounge(test_time()),
            CustomerEvent::VipLoungeAccessed(_)
        ));
        assert_eq!(customer, before);
    }

    proptest! {
        /// Property: VIP pays exactly 75% of the base amount.
        #[test]
        fn pays_seventy_five_percent(minor in 1i64..1_000_000_000i64) {
            let base = Money::from_minor(minor);
            let expected = Money::new(base.amount() * rust_decimal::Decimal::new(75, 2));
            prop_assert_eq!(vip(None).calculate_discount(base), expected);
        }
    }
}
