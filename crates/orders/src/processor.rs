use chrono::{DateTime, Utc};

use clientbook_core::{DomainResult, Money};
use clientbook_customers::CustomerAccount;
use clientbook_events::EventSink;

use crate::order::{OrderEvent, OrderReceipt, process_order};

/// Processes orders and publishes an [`OrderEvent`] for each one.
#[derive(Debug)]
pub struct OrderProcessor<S> {
    sink: S,
}

impl<S> OrderProcessor<S>
where
    S: EventSink<OrderEvent>,
{
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Price the order (see [`process_order`]) and publish the receipt.
    ///
    /// A publication failure is logged, not returned: the receipt is already
    /// final by then.
    pub fn process(
        &self,
        customer: &dyn CustomerAccount,
        order_amount: Money,
        occurred_at: DateTime<Utc>,
    ) -> DomainResult<OrderReceipt> {
        let span = tracing::info_span!(
            "process_order",
            customer_id = %customer.customer_id(),
            tier = %customer.tier()
        );
        let _guard = span.enter();

        let receipt = process_order(customer, order_amount, occurred_at).inspect_err(|err| {
            tracing::warn!(error = %err, "order rejected");
        })?;

        tracing::info!(
            order_id = %receipt.order_id,
            order_amount = %receipt.order_amount,
            discount = %receipt.discount,
            amount_due = %receipt.amount_due,
            "order processed"
        );

        if let Err(err) = self.sink.publish(OrderEvent::OrderProcessed(receipt.clone())) {
            tracing::warn!(
                error = ?err,
                order_id = %receipt.order_id,
                "failed to publish order event"
            );
        }

        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use clientbook_core::DomainError;
    use clientbook_customers::{CustomerRegistry, RegisterCustomer};
    use clientbook_events::InMemoryEventSink;

    use super::*;

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn publishes_one_event_per_processed_order() {
        let registry = CustomerRegistry::new();
        let customer = registry
            .register_premium(
                RegisterCustomer::new(1002, "Maria", "Kovalenko", "maria@example.com", test_time()),
                None,
            )
            .unwrap();
        let processor = OrderProcessor::new(InMemoryEventSink::<OrderEvent>::new());

        let receipt = processor
            .process(&customer, Money::from_minor(500_000), test_time())
            .unwrap();

        assert_eq!(
            processor.sink().events(),
            vec![OrderEvent::OrderProcessed(receipt)]
        );
    }

    #[test]
    fn rejected_orders_publish_nothing() {
        let registry = CustomerRegistry::new();
        let customer = registry
            .register(RegisterCustomer::new(1, "A", "B", "a@b.com", test_time()))
            .unwrap();
        let processor = OrderProcessor::new(InMemoryEventSink::<OrderEvent>::new());

        let err = processor.process(&customer, Money::ZERO, test_time()).unwrap_err();

        assert!(matches!(err, DomainError::InvalidArgument(_)));
        assert!(processor.sink().is_empty());
    }
}
