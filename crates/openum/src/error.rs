//! Error types for open enumerations.
//!
//! Only two failures survive the move to a statically typed registry: asking
//! for a constant name that was never declared, and a custom factory refusing
//! to build a value. Everything else a reflective design could trip over
//! (absent values, absent types, unreadable constants, missing constructors)
//! is ruled out at compile time.

use thiserror::Error;

/// Boxed cause carried by [`EnumError::Construction`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by enumerable lookups and fallback construction.
#[derive(Error, Debug)]
pub enum EnumError {
    /// [`Enumerable::value_of`](crate::Enumerable::value_of) was given a name
    /// that matches no declared constant.
    #[error("no constant named `{name}` in `{type_name}`")]
    ConstantNotFound {
        /// Simple name of the enumerable type.
        type_name: &'static str,
        /// The requested constant name.
        name: String,
    },

    /// The factory passed to
    /// [`Enumerable::try_parse_with`](crate::Enumerable::try_parse_with)
    /// failed to create a value.
    #[error("could not create `{type_name}` from value {value:?}")]
    Construction {
        /// Simple name of the enumerable type.
        type_name: &'static str,
        /// The text the factory was asked to wrap.
        value: String,
        /// The factory's own error.
        #[source]
        source: BoxError,
    },
}

impl EnumError {
    /// Simple name of the enumerable type the error refers to.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::ConstantNotFound { type_name, .. } | Self::Construction { type_name, .. } => {
                *type_name
            }
        }
    }

    /// Returns `true` for an unknown constant name.
    ///
    /// Callers commonly treat this as an expected outcome, unlike a
    /// construction failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ConstantNotFound { .. })
    }
}
