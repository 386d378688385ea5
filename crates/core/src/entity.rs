//! Entity trait: identity that survives contact/loyalty changes.

/// An object defined by its identifier rather than its attributes.
///
/// A customer whose email, phone or loyalty balance changes is still the same
/// customer; two customers with identical details but different ids are not.
pub trait Entity {
    /// Strongly-typed identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the identifier.
    fn id(&self) -> &Self::Id;

    /// Whether `other` refers to the same entity, regardless of its current state.
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Record {
        id: u32,
        label: &'static str,
    }

    impl Entity for Record {
        type Id = u32;

        fn id(&self) -> &u32 {
            &self.id
        }
    }

    #[test]
    fn identity_ignores_attributes() {
        let a = Record { id: 7, label: "old" };
        let b = Record { id: 7, label: "new" };
        let c = Record { id: 8, label: "old" };

        assert_ne!(a.label, b.label);
        assert!(a.same_identity_as(&b));
        assert!(!a.same_identity_as(&c));
    }
}
