//! The shared handle behind every enumerable type.
//!
//! An [`OpenValue`] carries the text of one enumeration value together with
//! enough type information to order it against values of any other
//! enumerable type. Constants and parsed values are both `OpenValue`s; a
//! constant is simply the one allocation the registry keeps alive.

use std::any::{TypeId, type_name};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

use crate::Enumerable;
use crate::registry;

/// Ordinal reported by values that match no declared constant.
///
/// It is the largest representable ordinal, so every constant sorts before
/// every non-constant of the same type.
pub const NO_MATCH: usize = usize::MAX;

/// Memoized outcome of matching a value against its type's constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Resolution {
    pub(crate) ordinal: usize,
    pub(crate) name: Option<&'static str>,
}

impl Resolution {
    pub(crate) const UNMATCHED: Self = Self {
        ordinal: NO_MATCH,
        name: None,
    };
}

/// Immutable enumeration value shared by reference counting.
///
/// Cloning an `OpenValue` yields another handle to the same allocation, which
/// is how constant identity survives [`parse`](crate::Enumerable::parse):
/// [`OpenValue::ptr_eq`] holds between a constant and everything parsed from
/// its value.
///
/// Values can only be minted by this crate, through the constant registry or
/// the parser. A concrete type's [`Enumerable::from_open`] is therefore the
/// restricted constructor: it can wrap an `OpenValue` but never fabricate one.
/// A handle minted for another type is re-minted with [`OpenValue::rebind`]
/// before it is wrapped.
///
/// # Ordering
///
/// Values of any two enumerable types compare by:
/// 1. full type name,
/// 2. ordinal (constants in declaration order, then non-constants),
/// 3. text, case-insensitively first and case-sensitively on a tie.
///
/// Equality is "same allocation or ordering says equal"; hashing uses the
/// text alone, which keeps `Hash` consistent with `Eq` since equal values
/// always have identical text.
#[derive(Clone)]
pub struct OpenValue {
    inner: Arc<Inner>,
}

struct Inner {
    type_id: TypeId,
    type_name: &'static str,
    value: Box<str>,
    resolution: OnceLock<Resolution>,
    resolver: fn(&str) -> Resolution,
}

impl OpenValue {
    /// A value of `T` whose name and ordinal are resolved on first use.
    pub(crate) fn new<T: Enumerable>(value: &str) -> Self {
        Self::build::<T>(value, OnceLock::new())
    }

    /// A declared constant of `T`; its resolution is known up front.
    pub(crate) fn constant<T: Enumerable>(value: &str, ordinal: usize, name: &'static str) -> Self {
        let resolution = Resolution {
            ordinal,
            name: Some(name),
        };
        Self::build::<T>(value, OnceLock::from(resolution))
    }

    fn build<T: Enumerable>(value: &str, resolution: OnceLock<Resolution>) -> Self {
        Self {
            inner: Arc::new(Inner {
                type_id: TypeId::of::<T>(),
                type_name: type_name::<T>(),
                value: value.into(),
                resolution,
                resolver: resolve_in::<T>,
            }),
        }
    }

    /// Returns `true` if this handle was minted for `T`.
    pub fn belongs_to<T: Enumerable>(&self) -> bool {
        self.inner.type_id == TypeId::of::<T>()
    }

    /// This handle if it belongs to `T`, otherwise a fresh value of `T` with
    /// the same text.
    ///
    /// Name and ordinal of a re-minted value are resolved against `T`'s
    /// constants, so it compares equal to the matching constant of `T`.
    /// Manual [`Enumerable::from_open`] impls call this before storing the
    /// handle.
    #[must_use]
    pub fn rebind<T: Enumerable>(self) -> Self {
        if self.belongs_to::<T>() {
            return self;
        }
        tracing::trace!(
            from = self.type_name(),
            to = type_name::<T>(),
            value = self.value(),
            "re-minting value for another enumerable"
        );
        Self::new::<T>(self.value())
    }

    /// The stored text.
    #[inline]
    pub fn value(&self) -> &str {
        &self.inner.value
    }

    /// Fully qualified name of the enumerable type this value belongs to.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.inner.type_name
    }

    /// Type name without its module path, e.g. `BigCo`.
    pub fn simple_type_name(&self) -> &'static str {
        simple_name(self.inner.type_name)
    }

    /// Declaration index of the matching constant, or [`NO_MATCH`].
    pub fn ordinal(&self) -> usize {
        self.resolution().ordinal
    }

    /// Declared name of the matching constant, if any.
    pub fn name(&self) -> Option<&'static str> {
        self.resolution().name
    }

    /// Returns `true` if the text matches a declared constant.
    pub fn is_constant(&self) -> bool {
        self.name().is_some()
    }

    /// Returns `true` if both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.inner, &other.inner)
    }

    /// Ordering as an integer: `-1`, `0` or `1`.
    pub fn compare_to(&self, other: &Self) -> i32 {
        match self.cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    pub(crate) fn resolution(&self) -> Resolution {
        *self
            .inner
            .resolution
            .get_or_init(|| (self.inner.resolver)(&self.inner.value))
    }
}

/// First constant of `T` whose text equals `value`; later duplicates are shadowed.
fn resolve_in<T: Enumerable>(value: &str) -> Resolution {
    registry::constants::<T>()
        .iter()
        .map(Enumerable::as_open)
        .find(|constant| constant.value() == value)
        .map_or(Resolution::UNMATCHED, OpenValue::resolution)
}

pub(crate) fn simple_type_name<T: ?Sized>() -> &'static str {
    simple_name(type_name::<T>())
}

fn simple_name(full: &'static str) -> &'static str {
    full.rsplit("::").next().unwrap_or(full)
}

/// Case-insensitive comparison with a case-sensitive tie-break.
///
/// Values that differ only by case sort next to each other but never compare
/// equal.
pub(crate) fn compare_text(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}

impl Ord for OpenValue {
    fn cmp(&self, other: &Self) -> Ordering {
        if Self::ptr_eq(self, other) {
            return Ordering::Equal;
        }
        self.type_name()
            .cmp(other.type_name())
            .then_with(|| self.ordinal().cmp(&other.ordinal()))
            .then_with(|| compare_text(self.value(), other.value()))
    }
}

impl PartialOrd for OpenValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenValue {}

impl Hash for OpenValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value().hash(state);
    }
}

impl fmt::Debug for OpenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.simple_type_name())?;
        if let Some(name) = self.name().filter(|name| *name != self.value()) {
            write!(f, "::{name}")?;
        }
        write!(f, "({:?})", self.value())
    }
}

impl fmt::Display for OpenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl AsRef<str> for OpenValue {
    fn as_ref(&self) -> &str {
        self.value()
    }
}
