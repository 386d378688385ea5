//! Console narration of domain events.

use std::io::Write;
use std::sync::Mutex;

use thiserror::Error;

use clientbook_core::Money;
use clientbook_customers::{CustomerEvent, CustomerTier};
use clientbook_events::EventSink;
use clientbook_orders::{OrderEvent, OrderReceipt};

const CURRENCY: &str = "UAH";
const RULE_WIDTH: usize = 60;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("report writer lock poisoned")]
    Poisoned,
}

/// Writes human-readable lines for events (and free-form demo text) to `W`.
#[derive(Debug)]
pub struct ConsoleReporter<W> {
    out: Mutex<W>,
}

impl ConsoleReporter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> Result<W, ReportError> {
        self.out.into_inner().map_err(|_| ReportError::Poisoned)
    }

    pub fn line(&self, text: impl AsRef<str>) -> Result<(), ReportError> {
        let mut out = self.out.lock().map_err(|_| ReportError::Poisoned)?;
        writeln!(out, "{}", text.as_ref())?;
        Ok(())
    }

    /// Blank line, a rule, and (if given) a title under it followed by another rule.
    pub fn section(&self, title: &str) -> Result<(), ReportError> {
        let rule = "=".repeat(RULE_WIDTH);
        self.line("")?;
        self.line(&rule)?;
        if !title.is_empty() {
            self.line(format!("  {title}"))?;
            self.line(&rule)?;
        }
        Ok(())
    }
}

fn money(amount: Money) -> String {
    format!("{amount} {CURRENCY}")
}

pub(crate) fn describe_customer_event(event: &CustomerEvent) -> String {
    match event {
        CustomerEvent::CustomerRegistered(e) => {
            format!("Registered {} customer #{}: {}", e.tier, e.customer_id, e.full_name)
        }
        CustomerEvent::EmailChanged(e) => format!("Email updated: {}", e.current),
        CustomerEvent::ContactInfoUpdated(e) => {
            format!("Contact details of {} updated", e.full_name)
        }
        CustomerEvent::LoyaltyPointsAdded(e) => {
            format!("Added {} points. Total: {} ({})", e.points_added, e.total_points, e.level)
        }
        CustomerEvent::PersonalManagerAssigned(e) => {
            format!("Personal manager {} assigned to {}", e.manager, e.full_name)
        }
        CustomerEvent::PremiumSupportGranted(e) => {
            format!("{} now has 24/7 priority support", e.full_name)
        }
        CustomerEvent::VipLoungeAccessed(e) => {
            format!("{} was granted VIP lounge access", e.full_name)
        }
    }
}

pub(crate) fn describe_receipt(receipt: &OrderReceipt) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        format!("Processing order for {}", receipt.customer_name),
        format!("Order amount: {}", money(receipt.order_amount)),
    ];
    if receipt.discount.is_positive() {
        let label = match receipt.tier {
            CustomerTier::Standard => "Discount",
            CustomerTier::Premium => "Premium discount",
            CustomerTier::Vip => "VIP discount",
        };
        lines.push(format!(
            "{label} {}: -{}",
            receipt.discount_rate,
            money(receipt.discount)
        ));
    }
    lines.push(format!("Amount due: {}", money(receipt.amount_due)));
    lines
}

impl<W: Write + Send> EventSink<CustomerEvent> for ConsoleReporter<W> {
    type Error = ReportError;

    fn publish(&self, message: CustomerEvent) -> Result<(), Self::Error> {
        self.line(describe_customer_event(&message))
    }
}

impl<W: Write + Send> EventSink<OrderEvent> for ConsoleReporter<W> {
    type Error = ReportError;

    fn publish(&self, message: OrderEvent) -> Result<(), Self::Error> {
        match message {
            OrderEvent::OrderProcessed(receipt) => {
                for line in describe_receipt(&receipt) {
                    self.line(line)?;
                }
                Ok(())
            }
        }
    }
}
