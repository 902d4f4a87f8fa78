//! Process-wide cache of declared constants.
//!
//! Each enumerable type's constants are built once, on first use, from its
//! [`Enumerable::declare`] list and then kept for the life of the process.
//! Entries are keyed by [`TypeId`], never by type name.
//!
//! Threads may race to build the entry for the same type. The build runs
//! without any lock held and is a pure function of the declarations, so the
//! first finished result is published with an insert-if-absent and the
//! others are dropped.

use std::any::{Any, TypeId, type_name};
use std::sync::LazyLock;

use dashmap::DashMap;

use crate::Enumerable;
use crate::value::OpenValue;

type Entry = Box<dyn Any + Send + Sync>;

static CONSTANTS: LazyLock<DashMap<TypeId, Entry>> = LazyLock::new(DashMap::new);

/// A single declared constant: its name and its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration {
    /// Name the constant is declared under, e.g. `MICROSOFT`.
    pub name: &'static str,
    /// The constant's text, e.g. `Microsoft`.
    pub value: &'static str,
}

/// Ordered list of constants collected from [`Enumerable::declare`].
///
/// Declaration order defines ordinals: the first constant gets `0`.
///
/// # Examples
///
/// ```rust
/// use openum::Declarations;
///
/// let mut declarations = Declarations::default();
/// declarations
///     .constant("RED", "red")
///     .constant("GREEN", "green");
///
/// assert_eq!(declarations.len(), 2);
/// assert_eq!(declarations.iter().next().map(|d| d.name), Some("RED"));
/// ```
#[derive(Debug, Default)]
pub struct Declarations {
    entries: Vec<Declaration>,
}

impl Declarations {
    /// Declare the next constant.
    pub fn constant(&mut self, name: &'static str, value: &'static str) -> &mut Self {
        self.entries.push(Declaration { name, value });
        self
    }

    /// Number of declared constants.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing was declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Declarations in order.
    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.entries.iter()
    }
}

/// Constants of `T` in declaration order, building them on first access.
pub(crate) fn constants<T: Enumerable>() -> &'static [T] {
    let key = TypeId::of::<T>();
    if let Some(entry) = CONSTANTS.get(&key) {
        return downcast::<T>(entry.value());
    }

    let built = build::<T>();
    let count = built.len();
    let mut published = false;
    let constants = {
        let entry = CONSTANTS.entry(key).or_insert_with(|| {
            published = true;
            let leaked: &'static [T] = Vec::leak(built);
            Box::new(leaked) as Entry
        });
        downcast::<T>(entry.value())
    };

    if published {
        tracing::debug!(
            enumerable = type_name::<T>(),
            constants = count,
            "registered enumerable constants"
        );
    } else {
        tracing::trace!(
            enumerable = type_name::<T>(),
            "discarded redundant constant build"
        );
    }
    constants
}

fn downcast<T: Enumerable>(entry: &Entry) -> &'static [T] {
    match entry.downcast_ref::<&'static [T]>() {
        Some(constants) => *constants,
        None => unreachable!(
            "constant registry entry for `{}` holds a foreign type",
            type_name::<T>()
        ),
    }
}

fn build<T: Enumerable>() -> Vec<T> {
    let mut declarations = Declarations::default();
    T::declare(&mut declarations);

    let mut constants: Vec<T> = Vec::with_capacity(declarations.len());
    for Declaration { name, value } in declarations.entries {
        if let Some(earlier) = constants.iter().find(|c| c.value() == value) {
            tracing::warn!(
                enumerable = type_name::<T>(),
                constant = name,
                shadowed_by = ?earlier.name(),
                value,
                "duplicate constant value; lookups by value resolve to the earlier constant"
            );
        }
        if constants.iter().any(|c| c.name() == Some(name)) {
            tracing::warn!(
                enumerable = type_name::<T>(),
                constant = name,
                "duplicate constant name; lookups by name resolve to the earlier constant"
            );
        }
        let ordinal = constants.len();
        constants.push(T::from_open(OpenValue::constant::<T>(value, ordinal, name)));
    }
    constants
}

#[cfg(test)]
mod tests {
    use std::sync::Barrier;
    use std::thread;

    use pretty_assertions::assert_eq;

    use super::*;

    crate::enumerable! {
        struct Raced {
            ONE = "1",
            TWO = "2",
            THREE = "3",
        }
    }

    #[derive(Clone)]
    struct Handwritten(OpenValue);

    impl Enumerable for Handwritten {
        fn declare(declarations: &mut Declarations) {
            declarations
                .constant("FIRST", "same")
                .constant("SECOND", "same")
                .constant("FIRST", "other");
        }

        fn from_open(value: OpenValue) -> Self {
            Self(value.rebind::<Self>())
        }

        fn as_open(&self) -> &OpenValue {
            &self.0
        }
    }

    #[test]
    fn concurrent_first_access_publishes_one_list() {
        const THREADS: usize = 8;
        let barrier = Barrier::new(THREADS);

        let addresses: Vec<usize> = thread::scope(|scope| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    scope.spawn(|| {
                        barrier.wait();
                        constants::<Raced>().as_ptr() as usize
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(constants::<Raced>().len(), 3);
    }

    #[test]
    fn ordinals_follow_declaration_order() {
        let ordinals: Vec<_> = constants::<Raced>().iter().map(Enumerable::ordinal).collect();
        assert_eq!(ordinals, vec![0, 1, 2]);
        let names: Vec<_> = constants::<Raced>().iter().map(Enumerable::name).collect();
        assert_eq!(names, vec![Some("ONE"), Some("TWO"), Some("THREE")]);
    }

    #[test]
    fn duplicates_are_kept_but_shadowed() {
        let all = constants::<Handwritten>();
        assert_eq!(all.len(), 3);
        assert_eq!(all[1].name(), Some("SECOND"));
        assert_eq!(all[1].ordinal(), 1);

        let parsed = Handwritten::parse("same");
        assert!(parsed.is(&all[0]));
        assert_eq!(Handwritten::value_of("FIRST").unwrap().value(), "same");
    }

    #[test]
    fn empty_declarations_build_empty_list() {
        assert!(constants::<crate::Unknown>().is_empty());
    }
}
