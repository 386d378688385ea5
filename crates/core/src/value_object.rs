//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. `Money`, `DiscountRate` and `Email` are value objects, while
//! a customer is an [`Entity`](crate::Entity).

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "change" one,
/// build a new value and replace the old one wholesale; for example a customer's
/// email is swapped for a freshly validated `Email`, never edited in place.
///
/// ```ignore
/// let a = Money::from_minor(500_000);
/// let b: Money = "5000".parse()?;
/// assert_eq!(a, b); // equal by value, regardless of how they were built
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
