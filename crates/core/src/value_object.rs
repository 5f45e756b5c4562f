//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** — two with the
/// same attribute values are the same value. To "modify" one, build a new one
/// (see `StockLevels::with_stock`). Entities, by contrast, keep an identity
/// across attribute changes.
///
/// ```ignore
/// let a = StockLevels::new(10, 1, 20)?;
/// let b = StockLevels::new(10, 1, 20)?;
/// assert_eq!(a, b); // equal by value
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
