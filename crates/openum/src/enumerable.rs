//! The [`Enumerable`] trait and [`Constant`] handles.

use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;

use crate::error::{BoxError, EnumError};
use crate::registry::{self, Declarations};
use crate::value::{OpenValue, simple_type_name};

/// An open enumeration: a fixed set of named constants plus any other text.
///
/// Implementors are thin newtypes over [`OpenValue`]. The
/// [`enumerable!`](crate::enumerable) macro writes the impl together with the
/// usual `Eq`/`Ord`/`Hash`/`Display`/`FromStr`/serde plumbing; a manual impl
/// only needs the three required methods.
///
/// # Examples
///
/// ```rust
/// use openum::{Enumerable, NO_MATCH};
///
/// openum::enumerable! {
///     pub struct BigCo {
///         MICROSOFT = "Microsoft",
///         APPLE = "Apple",
///         IBM = "IBM",
///         ORACLE = "Oracle",
///     }
/// }
///
/// let microsoft = BigCo::parse("Microsoft");
/// assert!(microsoft.is(&BigCo::MICROSOFT));
/// assert_eq!(microsoft.name(), Some("MICROSOFT"));
///
/// let jboss = BigCo::parse("JBoss");
/// assert_eq!(jboss.name(), None);
/// assert_eq!(jboss.ordinal(), NO_MATCH);
/// assert!(*BigCo::ORACLE < jboss);
/// ```
pub trait Enumerable: Clone + Send + Sync + 'static {
    /// Lists the declared constants in order.
    ///
    /// Called once per process, the first time the constants are needed.
    fn declare(declarations: &mut Declarations);

    /// Wraps a value minted by the registry or the parser.
    ///
    /// This is the type's only constructor. It receives every constant and
    /// every parsed value. Implementations store
    /// [`value.rebind::<Self>()`](OpenValue::rebind), which keeps handles
    /// minted for `Self` and re-mints any other, so a value of this type
    /// always carries this type's name and constants.
    fn from_open(value: OpenValue) -> Self;

    /// The wrapped handle.
    fn as_open(&self) -> &OpenValue;

    /// All declared constants, in declaration order.
    ///
    /// Every call returns a fresh vector; changing it does not affect the
    /// registry or later calls.
    fn values() -> Vec<Self> {
        registry::constants::<Self>().to_vec()
    }

    /// Resolves `text` to the constant with that exact value, or wraps it in
    /// a new, uncached instance.
    ///
    /// Matching is case-sensitive. A matching constant is returned as a handle
    /// to the same allocation the registry holds, so [`is`](Self::is) reports
    /// it as identical. Non-matching text yields a fresh instance on every call.
    fn parse(text: &str) -> Self {
        match constant_with_value::<Self>(text) {
            Some(constant) => constant.clone(),
            None => {
                tracing::trace!(
                    enumerable = simple_type_name::<Self>(),
                    value = text,
                    "no matching constant, creating value"
                );
                Self::from_open(OpenValue::new::<Self>(text))
            }
        }
    }

    /// [`parse`](Self::parse) lifted over an absent input.
    fn parse_optional(text: Option<&str>) -> Option<Self> {
        text.map(Self::parse)
    }

    /// Like [`parse`](Self::parse), but non-matching text goes through `factory`.
    ///
    /// Constants never reach the factory. A factory failure is returned as
    /// [`EnumError::Construction`] with the original error as its source.
    fn try_parse_with<F, E>(text: &str, factory: F) -> crate::Result<Self>
    where
        F: FnOnce(OpenValue) -> Result<Self, E>,
        E: Into<BoxError>,
    {
        if let Some(constant) = constant_with_value::<Self>(text) {
            return Ok(constant.clone());
        }
        factory(OpenValue::new::<Self>(text)).map_err(|source| {
            let source = source.into();
            tracing::debug!(
                enumerable = simple_type_name::<Self>(),
                value = text,
                error = %source,
                "enumerable factory failed"
            );
            EnumError::Construction {
                type_name: simple_type_name::<Self>(),
                value: text.to_owned(),
                source,
            }
        })
    }

    /// Looks a constant up by its declared name, not its value.
    fn value_of(name: &str) -> crate::Result<Self> {
        registry::constants::<Self>()
            .iter()
            .find(|constant| constant.name() == Some(name))
            .cloned()
            .ok_or_else(|| EnumError::ConstantNotFound {
                type_name: simple_type_name::<Self>(),
                name: name.to_owned(),
            })
    }

    /// Restores constant identity after deserialization.
    ///
    /// Returns the canonical constant when this value's text matches one,
    /// otherwise returns `self` unchanged.
    #[must_use]
    fn resolve(self) -> Self {
        let parsed = Self::parse(self.value());
        if parsed.is_constant() { parsed } else { self }
    }

    /// The stored text.
    fn value(&self) -> &str {
        self.as_open().value()
    }

    /// Declared name of the matching constant, if any.
    fn name(&self) -> Option<&'static str> {
        self.as_open().name()
    }

    /// Declaration index of the matching constant, or [`NO_MATCH`](crate::NO_MATCH).
    fn ordinal(&self) -> usize {
        self.as_open().ordinal()
    }

    /// Returns `true` if the value matches a declared constant.
    fn is_constant(&self) -> bool {
        self.as_open().is_constant()
    }

    /// Returns `true` if both values share one allocation.
    ///
    /// Holds between a constant and anything parsed or deserialized from its
    /// value; never holds between two separately parsed non-constants.
    fn is(&self, other: &Self) -> bool {
        OpenValue::ptr_eq(self.as_open(), other.as_open())
    }
}

fn constant_with_value<T: Enumerable>(text: &str) -> Option<&'static T> {
    registry::constants::<T>()
        .iter()
        .find(|constant| constant.value() == text)
}

/// Compile-time handle to a declared constant of `T`.
///
/// The [`enumerable!`](crate::enumerable) macro exposes one per declaration as
/// an associated const (`BigCo::MICROSOFT`). It dereferences to the singleton
/// held by the registry.
pub struct Constant<T> {
    ordinal: usize,
    name: &'static str,
    _type: PhantomData<fn() -> T>,
}

impl<T> Clone for Constant<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Constant<T> {}

impl<T> Constant<T> {
    /// A handle to the constant declared `ordinal`-th under `name`.
    #[must_use]
    pub const fn new(ordinal: usize, name: &'static str) -> Self {
        Self {
            ordinal,
            name,
            _type: PhantomData,
        }
    }

    /// Declaration index.
    pub const fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Declared name.
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T: Enumerable> Constant<T> {
    /// The singleton instance.
    pub fn get(&self) -> &'static T {
        &registry::constants::<T>()[self.ordinal]
    }
}

impl<T: Enumerable> Deref for Constant<T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.get()
    }
}

impl<T: Enumerable> PartialEq<T> for Constant<T> {
    fn eq(&self, other: &T) -> bool {
        self.get().as_open() == other.as_open()
    }
}

impl<T: Enumerable> fmt::Debug for Constant<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.get().as_open(), f)
    }
}
