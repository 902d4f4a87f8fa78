//! The four operations integrations build on.
//!
//! Serializers, column mappers, schema generators, and request-parameter
//! converters all reduce to "parse a string into `T`", "print a value", and
//! "list the known constants". These free functions expose exactly that, in
//! a null-tolerant shape convenient for adapter code.

use crate::{Enumerable, Result};

/// Parses `text` into `T`; an absent input stays absent.
///
/// ```rust
/// use openum::{Unknown, ops};
///
/// assert_eq!(ops::parse::<Unknown>(None), None);
/// assert_eq!(ops::parse::<Unknown>(Some("x")).map(|v| v.to_string()).as_deref(), Some("x"));
/// ```
pub fn parse<T: Enumerable>(text: Option<&str>) -> Option<T> {
    T::parse_optional(text)
}

/// Prints a value back to its text; the inverse of [`parse`].
pub fn print<T: Enumerable>(value: Option<&T>) -> Option<&str> {
    value.map(Enumerable::value)
}

/// All declared constants of `T`, as a fresh vector.
pub fn values<T: Enumerable>() -> Vec<T> {
    T::values()
}

/// The constant of `T` declared under `name`.
pub fn value_of<T: Enumerable>(name: &str) -> Result<T> {
    T::value_of(name)
}
