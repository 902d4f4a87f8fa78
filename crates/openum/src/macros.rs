//! The [`enumerable!`] declaration macro.

/// Declares an open enumeration type.
///
/// Generates a newtype over [`OpenValue`](crate::OpenValue), one
/// [`Constant`](crate::Constant) associated const per declaration, the
/// [`Enumerable`](crate::Enumerable) impl, and `Clone`, `Eq`, `Ord`, `Hash`,
/// `Debug`, `Display`, `FromStr`, `AsRef<str>` and (with the `serde` feature)
/// `Serialize`/`Deserialize`.
///
/// Constants get ordinals in the order they are written. `Clone` is always
/// derived; extra attributes on the type are passed through.
///
/// # Examples
///
/// ```rust
/// use openum::Enumerable;
///
/// openum::enumerable! {
///     /// Primary colors.
///     pub struct Color {
///         /// The color of fire trucks.
///         RED = "red",
///         GREEN = "green",
///         BLUE = "blue",
///     }
/// }
///
/// assert_eq!(Color::values().len(), 3);
/// assert_eq!(Color::BLUE.ordinal(), 2);
/// assert_eq!("red".parse::<Color>().unwrap(), *Color::RED);
/// assert_eq!(Color::parse("teal").to_string(), "teal");
/// ```
#[macro_export]
macro_rules! enumerable {
    // ── Associated consts, one per declaration ───────────────────────────
    (
        @constants $ty:ident; $all:tt;
        $( $(#[$cmeta:meta])* $constant:ident ),*
    ) => {
        $(
            $(#[$cmeta])*
            pub const $constant: $crate::Constant<$ty> =
                $crate::enumerable!(@constant $constant; $all);
        )*
    };

    // Ordinals come from a throwaway enum over every declared name, so the
    // expansion depth stays flat however many constants a type declares.
    (@constant $constant:ident; [$($all:ident),*]) => {{
        #[allow(non_camel_case_types, dead_code, clippy::upper_case_acronyms)]
        #[repr(usize)]
        enum Ordinal {
            $($all),*
        }
        $crate::Constant::new(Ordinal::$constant as usize, ::core::stringify!($constant))
    }};

    // ── Type declaration ─────────────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$cmeta:meta])*
                $constant:ident = $value:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone)]
        $vis struct $name($crate::OpenValue);

        impl $name {
            $crate::enumerable!(@constants $name; [$($constant),*]; $( $(#[$cmeta])* $constant ),*);
        }

        impl $crate::Enumerable for $name {
            #[allow(unused_variables)]
            fn declare(declarations: &mut $crate::Declarations) {
                $( declarations.constant(::core::stringify!($constant), $value); )*
            }

            fn from_open(value: $crate::OpenValue) -> Self {
                Self(value.rebind::<Self>())
            }

            fn as_open(&self) -> &$crate::OpenValue {
                &self.0
            }
        }

        impl ::core::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }

        impl ::core::cmp::Eq for $name {}

        impl ::core::cmp::PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
            }
        }

        impl ::core::cmp::Ord for $name {
            fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                ::core::cmp::Ord::cmp(&self.0, &other.0)
            }
        }

        impl ::core::hash::Hash for $name {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                ::core::hash::Hash::hash(&self.0, state);
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Debug::fmt(&self.0, f)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.0.value())
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = ::core::convert::Infallible;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                ::core::result::Result::Ok(<Self as $crate::Enumerable>::parse(s))
            }
        }

        impl ::core::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.value()
            }
        }

        impl ::core::cmp::PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0.value() == other
            }
        }

        impl ::core::cmp::PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0.value() == *other
            }
        }

        impl ::core::convert::From<$name> for ::std::string::String {
            fn from(value: $name) -> Self {
                ::std::string::String::from(value.0.value())
            }
        }

        $crate::__enumerable_serde!($name);
    };
}

#[cfg(feature = "serde")]
#[doc(hidden)]
#[macro_export]
macro_rules! __enumerable_serde {
    ($name:ident) => {
        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::wire::serialize(self, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                $crate::wire::deserialize(deserializer)
            }
        }
    };
}

#[cfg(not(feature = "serde"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __enumerable_serde {
    ($name:ident) => {};
}
