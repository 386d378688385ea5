//! End-to-end: register one customer of each tier and push the same order
//! through a single processor.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use clientbook_core::Money;
use clientbook_customers::{
    ContactUpdate, CustomerAccount, CustomerEvent, CustomerRegistry, CustomerTier, LoyaltyLevel,
    RegisterCustomer,
};
use clientbook_events::InMemoryEventSink;
use clientbook_orders::{OrderEvent, OrderProcessor};

fn at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 10, 30, 0).unwrap()
}

fn accounts(registry: &CustomerRegistry) -> Vec<Box<dyn CustomerAccount>> {
    let standard = registry
        .register(
            RegisterCustomer::new(1001, "Ivan", "Petrenko", "ivan.petrenko@email.com", at())
                .with_phone("+380501234567"),
        )
        .unwrap();
    let premium = registry
        .register_premium(
            RegisterCustomer::new(1002, "Maria", "Kovalenko", "maria.kovalenko@email.com", at()),
            None,
        )
        .unwrap();
    let vip = registry
        .register_vip(
            RegisterCustomer::new(
                1003,
                "Oleksandr",
                "Shevchenko",
                "alex.shevchenko@email.com",
                at(),
            ),
            Some("Natalia Ivanova".to_string()),
        )
        .unwrap();

    let mut accounts: Vec<Box<dyn CustomerAccount>> = Vec::with_capacity(3);
    accounts.push(Box::new(standard));
    accounts.push(Box::new(premium));
    accounts.push(Box::new(vip));
    accounts
}

#[test]
fn same_order_priced_per_tier_without_branching() {
    let registry = CustomerRegistry::new();
    let customers = accounts(&registry);
    let sink = Arc::new(InMemoryEventSink::<OrderEvent>::new());
    let processor = OrderProcessor::new(Arc::clone(&sink));

    let due: Vec<Money> = customers
        .iter()
        .map(|c| {
            processor
                .process(c.as_ref(), Money::from_minor(500_000), at())
                .unwrap()
                .amount_due
        })
        .collect();

    assert_eq!(registry.total_customers(), 3);
    assert_eq!(
        due,
        vec![
            Money::from_minor(500_000),
            Money::from_minor(425_000),
            Money::from_minor(375_000),
        ]
    );

    let tiers: Vec<CustomerTier> = sink
        .events()
        .into_iter()
        .map(|OrderEvent::OrderProcessed(receipt)| receipt.tier)
        .collect();
    assert_eq!(tiers, vec![CustomerTier::Standard, CustomerTier::Premium, CustomerTier::Vip]);
}

#[test]
fn contact_changes_apply_through_the_shared_capability() {
    let registry = CustomerRegistry::new();
    let mut customers = accounts(&registry);

    for customer in customers.iter_mut() {
        assert!(customer.set_email("bad", at()).is_err());
        let event = customer
            .update_contact_info(&ContactUpdate::new().address("Franka St 25, Kyiv"), at())
            .unwrap();
        assert!(matches!(event, CustomerEvent::ContactInfoUpdated(e) if e.address_changed));
    }

    for customer in &customers {
        assert!(customer.email().as_str().contains('@'));
        assert!(customer.info().contains("Address: Franka St 25, Kyiv"));
        assert_eq!(customer.info(), customer.info());
    }
}

#[test]
fn vip_loyalty_scenario() {
    let registry = CustomerRegistry::new();
    let mut vip = registry
        .register_vip(
            RegisterCustomer::new(
                1003,
                "Oleksandr",
                "Shevchenko",
                "alex.shevchenko@email.com",
                at(),
            ),
            None,
        )
        .unwrap();

    assert_eq!(vip.loyalty_level(), LoyaltyLevel::Gold);
    vip.add_points(250, at()).unwrap();

    assert_eq!(vip.loyalty_points(), 1750);
    assert_eq!(vip.loyalty_level(), LoyaltyLevel::Gold);
    assert!(vip.info().ends_with("Level: Gold, Points: 1750"));
}

#[test]
fn receipts_serialize_amounts_as_strings() {
    let registry = CustomerRegistry::new();
    let customers = accounts(&registry);
    let processor = OrderProcessor::new(InMemoryEventSink::<OrderEvent>::new());

    let receipt = processor
        .process(customers[2].as_ref(), Money::from_minor(500_000), at())
        .unwrap();
    let json = serde_json::to_value(&receipt).unwrap();

    assert_eq!(json["tier"], "vip");
    let due: Money = json["amount_due"].as_str().unwrap().parse().unwrap();
    assert_eq!(due, Money::from_minor(375_000));
    assert_eq!(json["customer_id"], 1003);
}
