use serde::{Deserialize, Serialize};

use clientbook_core::DomainResult;

use crate::email::Email;

/// Contact information for a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Email,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Partial contact change: `None` (or a blank string) leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactUpdate {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl ContactUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        provided(&self.email).is_none()
            && provided(&self.phone).is_none()
            && provided(&self.address).is_none()
    }
}

/// Which fields an applied [`ContactUpdate`] actually changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ChangedFields {
    pub email: bool,
    pub phone: bool,
    pub address: bool,
}

impl ContactInfo {
    /// Apply `update` atomically: the email is validated before anything is
    /// written, so an invalid email leaves every field as it was.
    pub(crate) fn apply(&mut self, update: &ContactUpdate) -> DomainResult<ChangedFields> {
        let email = provided(&update.email).map(Email::parse).transpose()?;
        let phone = provided(&update.phone);
        let address = provided(&update.address);

        let mut changed = ChangedFields::default();
        if let Some(email) = email {
            changed.email = email != self.email;
            self.email = email;
        }
        if let Some(phone) = phone {
            changed.phone = self.phone.as_deref() != Some(phone);
            self.phone = Some(phone.to_owned());
        }
        if let Some(address) = address {
            changed.address = self.address.as_deref() != Some(address);
            self.address = Some(address.to_owned());
        }
        Ok(changed)
    }
}

fn provided(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use clientbook_core::DomainError;

    use super::*;

    fn contact() -> ContactInfo {
        ContactInfo {
            email: Email::parse("a@b.com").unwrap(),
            phone: Some("+380501234567".to_string()),
            address: None,
        }
    }

    #[test]
    fn absent_fields_are_left_untouched() {
        let mut info = contact();
        let changed = info
            .apply(&ContactUpdate::new().address("Shevchenka St 10, Lviv"))
            .unwrap();

        assert_eq!(
            changed,
            ChangedFields {
                email: false,
                phone: false,
                address: true
            }
        );
        assert_eq!(info.email.as_str(), "a@b.com");
        assert_eq!(info.phone.as_deref(), Some("+380501234567"));
        assert_eq!(info.address.as_deref(), Some("Shevchenka St 10, Lviv"));
    }

    #[test]
    fn blank_values_count_as_absent() {
        let mut info = contact();
        let update = ContactUpdate::new().email("").phone("   ");

        assert!(update.is_empty());
        assert_eq!(info.apply(&update).unwrap(), ChangedFields::default());
        assert_eq!(info, contact());
    }

    #[test]
    fn invalid_email_rejects_the_whole_update() {
        let mut info = contact();
        let err = info
            .apply(&ContactUpdate::new().email("bad").phone("+380507654321"))
            .unwrap_err();

        assert!(matches!(err, DomainError::InvalidEmailFormat(_)));
        assert_eq!(info, contact());
    }
}
