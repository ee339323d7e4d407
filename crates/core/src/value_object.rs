//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity** and no lifecycle of their own. They are
//! embedded in (and owned by) an entity, e.g. the nutrition facts of a product.

/// Marker trait for value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (two value objects with same values are equal)
/// - **Entity**: Has identity (two entities with same ID are the same entity)
///
/// Example:
/// - `NutritionalInfo { calories: 100, sugar: 15.5, allergens: [..] }` is a value object
/// - `Product { id: ProductId(...), name: "..." }` is an entity
///
/// Value objects are immutable: to "modify" one, build a new one with the new values.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Weight {
///     grams: f64,
/// }
///
/// impl ValueObject for Weight {}
///
/// assert_eq!(Weight { grams: 10.0 }, Weight { grams: 10.0 });
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
