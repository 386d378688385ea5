//! Customer registry: the single place customers are constructed and counted.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};

use clientbook_core::DomainResult;

use crate::account::CustomerAccount;
use crate::customer::{Customer, RegisterCustomer};
use crate::premium::PremiumCustomer;
use crate::vip::VipCustomer;

/// Builds customers of every tier and counts them.
///
/// Create one per process (or per test) and pass it where customers are
/// registered. The count only grows, and only for successful registrations.
#[derive(Debug, Default)]
pub struct CustomerRegistry {
    registered: AtomicU64,
}

impl CustomerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of customers (any tier) registered through this registry.
    pub fn total_customers(&self) -> u64 {
        self.registered.load(Ordering::SeqCst)
    }

    /// Register a standard customer.
    pub fn register(&self, cmd: RegisterCustomer) -> DomainResult<Customer> {
        let customer = Customer::new(cmd)?;
        self.count(&customer, "standard");
        Ok(customer)
    }

    /// Register a premium customer; `premium_since` defaults to registration time.
    pub fn register_premium(
        &self,
        cmd: RegisterCustomer,
        premium_since: Option<DateTime<Utc>>,
    ) -> DomainResult<PremiumCustomer> {
        let customer = Customer::new(cmd)?;
        let premium = PremiumCustomer::new(customer, premium_since);
        self.count(premium.customer(), "premium");
        Ok(premium)
    }

    /// Register a VIP customer with the welcome loyalty balance.
    pub fn register_vip(
        &self,
        cmd: RegisterCustomer,
        personal_manager: Option<String>,
    ) -> DomainResult<VipCustomer> {
        let customer = Customer::new(cmd)?;
        let vip = VipCustomer::new(customer, personal_manager)?;
        self.count(vip.customer(), "vip");
        Ok(vip)
    }

    fn count(&self, customer: &Customer, tier: &'static str) {
        let total = self.registered.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(customer_id = %customer.customer_id(), tier, total, "customer registered");
    }
}
