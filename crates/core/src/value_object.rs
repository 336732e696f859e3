//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry no identity: two instances holding the same values are
/// the same value. They are immutable; "changing" one means building a new one.
///
/// - **Value object**: a validated `Quantity`, a `CumulativeSeries`
/// - **Entity**: a `BookRecord`, which keeps its identity (title + author)
///   while its stock level changes
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
