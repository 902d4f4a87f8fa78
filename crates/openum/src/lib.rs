//! # openum
//!
//! Open enumerations: a fixed set of named constants that also accepts, and
//! faithfully carries, values nobody declared.
//!
//! An API that publishes `RED`, `GREEN` and `BLUE` today may add `TEAL`
//! tomorrow. Clients built against the old set keep working: they parse
//! `"teal"` into a perfectly usable value that simply has no constant name.
//!
//! ## Key Components
//!
//! - **[`enumerable!`]**: declares a type and its constants
//! - **[`Enumerable`]**: parsing, printing, name/ordinal lookup, identity
//! - **[`OpenValue`]**: the shared handle; ordering and equality across types
//! - **Registry**: builds each type's constants once per process, lock-free to read
//! - **[`wire`]** (feature `serde`): bare-string or `{"value": ...}` wire forms
//!   that deserialize constants back to their singletons
//! - **[`ops`]**: `parse` / `print` / `values` / `value_of` for integrations
//!
//! ## Usage
//!
//! ```rust
//! use openum::prelude::*;
//!
//! openum::enumerable! {
//!     pub struct BigCo {
//!         MICROSOFT = "Microsoft",
//!         APPLE = "Apple",
//!         IBM = "IBM",
//!         ORACLE = "Oracle",
//!     }
//! }
//!
//! assert_eq!(BigCo::values().len(), 4);
//! assert!(BigCo::parse("Apple").is(&BigCo::APPLE));
//!
//! let jboss = BigCo::parse("JBoss");
//! assert!(!jboss.is_constant());
//! assert!(*BigCo::ORACLE < jboss);
//!
//! assert!(BigCo::value_of("ORACLE").is_ok());
//! assert!(BigCo::value_of("UNKNOWN").unwrap_err().is_not_found());
//! ```

#[macro_use]
mod macros;

mod enumerable;
mod error;
pub mod ops;
mod registry;
mod unknown;
mod value;
#[cfg(feature = "serde")]
pub mod wire;

pub use enumerable::{Constant, Enumerable};
pub use error::{BoxError, EnumError};
pub use registry::{Declaration, Declarations};
pub use unknown::Unknown;
pub use value::{NO_MATCH, OpenValue};

/// Result type used throughout openum
pub type Result<T> = std::result::Result<T, EnumError>;

/// Common imports for declaring and using enumerable types
pub mod prelude {
    pub use super::{Constant, EnumError, Enumerable, NO_MATCH, OpenValue, Unknown};
}

#[doc(hidden)]
pub mod __private {
    #[cfg(feature = "serde")]
    pub use serde;
}
