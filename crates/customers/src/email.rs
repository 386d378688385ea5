//! Email address value object.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use clientbook_core::{DomainError, DomainResult, ValueObject};

/// An email address.
///
/// The only structural rule enforced is the presence of an `@`; an `Email`
/// without one cannot be constructed, deserialized included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl ValueObject for Email {}

impl Email {
    /// Parse an `Email`, failing with [`DomainError::InvalidEmailFormat`] when
    /// `value` has no `@`.
    pub fn parse(value: &str) -> DomainResult<Self> {
        Self::try_from(value.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Email {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if !value.contains('@') {
            return Err(DomainError::invalid_email(value));
        }
        Ok(Self(value))
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_addresses_with_at() {
        let email = Email::parse("ivan.petrenko@email.com").unwrap();
        assert_eq!(email.as_str(), "ivan.petrenko@email.com");
    }

    #[test]
    fn rejects_addresses_without_at() {
        let err = Email::parse("bad").unwrap_err();
        assert_eq!(err, DomainError::InvalidEmailFormat("bad".to_string()));
    }

    #[test]
    fn deserialization_is_validated() {
        assert!(serde_json::from_str::<Email>("\"a@b.com\"").is_ok());
        assert!(serde_json::from_str::<Email>("\"nope\"").is_err());
    }

    proptest! {
        /// Property: parsing succeeds iff the input contains `@`.
        #[test]
        fn parse_succeeds_iff_at_present(value in ".{0,40}") {
            prop_assert_eq!(Email::parse(&value).is_ok(), value.contains('@'));
        }
    }
}
