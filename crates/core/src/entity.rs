//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two entities are the same entity when their identifiers match, regardless of
/// the rest of their attributes (a product whose rating changed is still the same
/// product).
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Identity comparison (ignores attributes).
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
