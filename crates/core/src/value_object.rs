//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// construct a new one; construction is where validation happens, so a value
/// object that exists is always valid.
///
/// ## Design Constraints
///
/// The trait requires:
/// - **Clone**: Value objects should be cheap to copy (they're values, not references)
/// - **PartialEq**: Value objects are compared by their attribute values
/// - **Debug**: Value objects should be debuggable (helpful for logging, testing)
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct DailyRate(f64);
///
/// impl ValueObject for DailyRate {}
///
/// assert_eq!(DailyRate(120.0), DailyRate(120.0)); // Equal by value
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
