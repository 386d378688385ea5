use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use clientbook_core::{CustomerId, DiscountRate, DomainError, DomainResult, Entity};

use crate::account::{CustomerAccount, CustomerTier};
use crate::contact::{ContactInfo, ContactUpdate};
use crate::email::Email;
use crate::event::{ContactInfoUpdated, CustomerEvent, EmailChanged};

pub(crate) const NOT_SPECIFIED: &str = "Not specified";

/// Command: RegisterCustomer.
///
/// Shared by every tier; tier-specific extras are passed to the matching
/// [`CustomerRegistry`](crate::CustomerRegistry) method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterCustomer {
    pub customer_id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

impl RegisterCustomer {
    pub fn new(
        customer_id: impl Into<CustomerId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: None,
            address: None,
            occurred_at,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

/// Entity: Customer (standard tier, and the identity core of every other tier).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id: CustomerId,
    first_name: String,
    last_name: String,
    contact: ContactInfo,
    registered_at: DateTime<Utc>,
}

impl Customer {
    /// Validate and build. Only the registry calls this, so that every
    /// constructed customer is counted.
    pub(crate) fn new(cmd: RegisterCustomer) -> DomainResult<Self> {
        if cmd.first_name.trim().is_empty() {
            return Err(DomainError::validation("first name cannot be empty"));
        }
        if cmd.last_name.trim().is_empty() {
            return Err(DomainError::validation("last name cannot be empty"));
        }
        let email = Email::try_from(cmd.email)?;

        Ok(Self {
            id: cmd.customer_id,
            first_name: cmd.first_name,
            last_name: cmd.last_name,
            contact: ContactInfo {
                email,
                phone: cmd.phone.filter(|p| !p.trim().is_empty()),
                address: cmd.address.filter(|a| !a.trim().is_empty()),
            },
            registered_at: cmd.occurred_at,
        })
    }

    pub fn customer_id(&self) -> CustomerId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    pub fn email(&self) -> &Email {
        &self.contact.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.contact.phone.as_deref()
    }

    pub fn address(&self) -> Option<&str> {
        self.contact.address.as_deref()
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    /// Replace the email if `value` contains `@`.
    ///
    /// On failure the previous email is kept and
    /// [`DomainError::InvalidEmailFormat`] is returned.
    pub fn set_email(
        &mut self,
        value: &str,
        occurred_at: DateTime<Utc>,
    ) -> DomainResult<CustomerEvent> {
        let current = Email::parse(value).inspect_err(|err| {
            tracing::debug!(customer_id = %self.id, error = %err, "email change rejected");
        })?;
        let previous = std::mem::replace(&mut self.contact.email, current.clone());
        tracing::debug!(customer_id = %self.id, "email changed");

        Ok(CustomerEvent::EmailChanged(EmailChanged {
            customer_id: self.id,
            previous,
            current,
            occurred_at,
        }))
    }

    /// Apply each provided field of `update`; absent fields stay as they are.
    ///
    /// The email goes through the same validation as [`Customer::set_email`];
    /// if it is invalid nothing is changed.
    pub fn update_contact_info(
        &mut self,
        update: &ContactUpdate,
        occurred_at: DateTime<Utc>,
    ) -> DomainResult<CustomerEvent> {
        let changed = self.contact.apply(update)?;
        tracing::debug!(
            customer_id = %self.id,
            email = changed.email,
            phone = changed.phone,
            address = changed.address,
            "contact info updated"
        );

        Ok(CustomerEvent::ContactInfoUpdated(ContactInfoUpdated {
            customer_id: self.id,
            full_name: self.full_name(),
            email_changed: changed.email,
            phone_changed: changed.phone,
            address_changed: changed.address,
            occurred_at,
        }))
    }

    /// Identity, contact details and registration date, one per line.
    pub fn info(&self) -> String {
        format!(
            "Customer #{}: {}\nEmail: {}\nPhone: {}\nAddress: {}\nRegistered: {}",
            self.id,
            self.full_name(),
            self.contact.email,
            self.phone().unwrap_or(NOT_SPECIFIED),
            self.address().unwrap_or(NOT_SPECIFIED),
            self.registered_at.format("%d.%m.%Y %H:%M"),
        )
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl CustomerAccount for Customer {
    fn customer(&self) -> &Customer {
        self
    }

    fn customer_mut(&mut self) -> &mut Customer {
        self
    }

    fn tier(&self) -> CustomerTier {
        CustomerTier::Standard
    }

    fn discount_rate(&self) -> DiscountRate {
        DiscountRate::NONE
    }

    fn info(&self) -> String {
        Customer::info(self)
    }
}

impl core::fmt::Display for Customer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Customer({}, {})", self.id, self.full_name())
    }
}
