//! The demo walkthrough.

use std::io::Write;

use anyhow::Context;
use chrono::Utc;

use clientbook_customers::{
    ContactUpdate, CustomerAccount, CustomerEvent, CustomerRegistry, RegisterCustomer,
};
use clientbook_events::{EventSink, LoggingSink};
use clientbook_orders::{OrderProcessor, OrderReceipt};

use crate::config::DemoConfig;
use crate::report::ConsoleReporter;

/// What a finished walkthrough produced.
#[derive(Debug, Clone)]
pub struct ScenarioSummary {
    pub total_customers: u64,
    pub receipts: Vec<OrderReceipt>,
}

struct Narrator<'a, W> {
    console: &'a ConsoleReporter<W>,
    log: LoggingSink,
}

impl<W: Write + Send> Narrator<'_, W> {
    fn emit(&self, event: CustomerEvent) -> anyhow::Result<()> {
        if let Err(err) = self.log.publish(event.clone()) {
            tracing::warn!(
                customer_id = %event.customer_id(),
                error = %err,
                "failed to log customer event"
            );
        }
        self.console.publish(event)?;
        Ok(())
    }
}

/// Register the three sample customers and exercise every operation on them.
pub fn run<W: Write + Send>(
    config: &DemoConfig,
    console: &ConsoleReporter<W>,
) -> anyhow::Result<ScenarioSummary> {
    let narrator = Narrator {
        console,
        log: LoggingSink::new(),
    };
    let registry = CustomerRegistry::new();

    console.section("CUSTOMER MANAGEMENT SYSTEM")?;

    let mut regular = registry
        .register(
            RegisterCustomer::new(
                1001,
                "Ivan",
                "Petrenko",
                "ivan.petrenko@email.com",
                Utc::now(),
            )
                .with_phone("+380501234567")
                .with_address("10 Shevchenka St, Lviv"),
        )
        .context("registering standard customer")?;
    let premium = registry
        .register_premium(
            RegisterCustomer::new(
                1002,
                "Maria",
                "Kovalenko",
                "maria.kovalenko@email.com",
                Utc::now(),
            )
                .with_phone("+380502345678")
                .with_address("25 Franka St, Kyiv"),
            None,
        )
        .context("registering premium customer")?;
    let mut vip = registry
        .register_vip(
            RegisterCustomer::new(
                1003,
                "Oleksandr",
                "Shevchenko",
                "alex.shevchenko@email.com",
                Utc::now(),
            )
                .with_phone("+380503456789")
                .with_address("5 Hrushevskoho St, Odesa"),
            Some("Natalia Ivanova".to_string()),
        )
        .context("registering VIP customer")?;

    let registered: [&dyn CustomerAccount; 3] = [&regular, &premium, &vip];
    for account in registered {
        narrator.emit(CustomerEvent::registered(account))?;
    }
    console.line(format!("Created {} customers", registry.total_customers()))?;

    console.section("CUSTOMER PROFILES")?;
    let profiles: [(&str, &dyn CustomerAccount); 3] = [
        ("Standard customer", &regular),
        ("Premium customer", &premium),
        ("VIP customer", &vip),
    ];
    for (label, account) in profiles {
        console.line(format!("\n{label}:"))?;
        console.line(account.info())?;
    }

    console.section("CONTACT UPDATE")?;
    let update = ContactUpdate::new()
        .phone("+380507654321")
        .address("15 Lesi Ukrainky St, Lviv");
    narrator.emit(regular.update_contact_info(&update, Utc::now())?)?;
    if let Err(err) = regular.set_email("ivan.petrenko.at.email.com", Utc::now()) {
        console.line(format!("Error: {err}"))?;
        tracing::info!(customer_id = %regular.customer_id(), error = %err, "email change rejected");
    }

    console.section("ORDER PROCESSING (POLYMORPHISM)")?;
    let processor = OrderProcessor::new(console);
    let mut receipts = Vec::with_capacity(3);
    let ordering: [&dyn CustomerAccount; 3] = [&regular, &premium, &vip];
    for account in ordering {
        receipts.push(processor.process(account, config.order_amount, Utc::now())?);
    }

    console.section("LOYALTY PROGRAM")?;
    console.line(format!("\n{}:", vip.full_name()))?;
    match vip.add_points(config.bonus_points, Utc::now()) {
        Ok(event) => narrator.emit(event)?,
        Err(err) => console.line(format!("Error: {err}"))?,
    }
    narrator.emit(vip.use_vip_lounge(Utc::now()))?;

    console.section("ADDITIONAL SERVICES")?;
    narrator.emit(premium.premium_support(Utc::now()))?;
    narrator.emit(vip.assign_personal_manager("Olena Sydorenko", Utc::now())?)?;

    console.section("STATISTICS")?;
    console.line(format!(
        "\nTotal customers in the system: {}",
        registry.total_customers()
    ))?;
    console.line(format!("\nFull name: {}", vip.full_name()))?;
    console.line(format!("Customer ID: {}", vip.customer_id()))?;
    console.line(format!("Email: {}", vip.email()))?;
    narrator.emit(vip.set_email("new.email@example.com", Utc::now())?)?;

    Ok(ScenarioSummary {
        total_customers: registry.total_customers(),
        receipts,
    })
}
