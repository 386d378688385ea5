use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use clientbook_core::{CustomerId, DiscountRate, DomainError, DomainResult, Money, OrderId};
use clientbook_customers::{CustomerAccount, CustomerTier};
use clientbook_events::Event;

/// Outcome of processing one order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub order_id: OrderId,
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub tier: CustomerTier,
    pub order_amount: Money,
    pub discount_rate: DiscountRate,
    pub discount: Money,
    pub amount_due: Money,
    pub processed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderEvent {
    OrderProcessed(OrderReceipt),
}

impl Event for OrderEvent {
    fn event_type(&self) -> &'static str {
        match self {
            OrderEvent::OrderProcessed(_) => "orders.order.processed",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            OrderEvent::OrderProcessed(receipt) => receipt.processed_at,
        }
    }
}

/// Price an order for `customer`, whatever its tier.
///
/// The discount comes solely from the customer's own [`CustomerAccount`]
/// implementation. Non-positive amounts are rejected with
/// [`DomainError::InvalidArgument`].
pub fn process_order(
    customer: &dyn CustomerAccount,
    order_amount: Money,
    occurred_at: DateTime<Utc>,
) -> DomainResult<OrderReceipt> {
    if !order_amount.is_positive() {
        return Err(DomainError::invalid_argument(format!(
            "order amount must be positive, got {order_amount}"
        )));
    }

    let quote = customer.quote(order_amount);

    Ok(OrderReceipt {
        order_id: OrderId::new(),
        customer_id: customer.customer_id(),
        customer_name: customer.full_name(),
        tier: customer.tier(),
        order_amount,
        discount_rate: quote.rate,
        discount: quote.discount,
        amount_due: quote.amount_due,
        processed_at: occurred_at,
    })
}
