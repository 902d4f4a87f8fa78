//! serde integration.
//!
//! On the wire an enumerable is its text. Two shapes are accepted when
//! reading from self-describing formats:
//!
//! - a bare string: `"Microsoft"`
//! - an object keyed by `value`: `{"value": "Microsoft"}`; other properties
//!   are skipped
//!
//! Binary formats always carry a plain string.
//!
//! Writing produces the bare string. Fields that must keep the object shape
//! can opt in with `#[serde(with = "openum::wire::object")]`.
//!
//! Every read runs [`Enumerable::resolve`], so a deserialized constant is the
//! registry's singleton while other text becomes a fresh, equal value.

use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Enumerable, OpenValue, Unknown};

const VALUE_KEY: &str = "value";

/// Writes `value` as its bare text.
pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Enumerable,
    S: Serializer,
{
    serializer.serialize_str(value.value())
}

/// Reads a bare string or a `{"value": ...}` object and restores constant identity.
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Enumerable,
    D: Deserializer<'de>,
{
    let text = read_text(deserializer)?;
    Ok(T::from_open(OpenValue::new::<T>(&text)).resolve())
}

fn read_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    if deserializer.is_human_readable() {
        deserializer.deserialize_any(TextVisitor)
    } else {
        deserializer.deserialize_string(TextVisitor)
    }
}

struct TextVisitor;

impl<'de> Visitor<'de> for TextVisitor {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or an object with a `value` property")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.to_owned())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
        Ok(v)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<String, A::Error> {
        let mut value = None;
        while let Some(key) = map.next_key::<String>()? {
            if key == VALUE_KEY {
                if value.is_some() {
                    return Err(de::Error::duplicate_field(VALUE_KEY));
                }
                value = Some(map.next_value::<String>()?);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        value.ok_or_else(|| de::Error::missing_field(VALUE_KEY))
    }
}

/// Object form: writes `{"value": ...}`, reads either form.
///
/// Formats that are not human-readable get the bare string, the only shape
/// they can read back.
///
/// ```rust
/// use serde::{Deserialize, Serialize};
///
/// openum::enumerable! {
///     pub struct Tier {
///         GOLD = "gold",
///     }
/// }
///
/// #[derive(Serialize, Deserialize)]
/// struct Account {
///     #[serde(with = "openum::wire::object")]
///     tier: Tier,
/// }
/// ```
pub mod object {
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer};

    use super::VALUE_KEY;
    use crate::Enumerable;

    /// Writes `value` as `{"value": <text>}`, or as bare text for binary formats.
    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Enumerable,
        S: Serializer,
    {
        if !serializer.is_human_readable() {
            return super::serialize(value, serializer);
        }
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(VALUE_KEY, value.value())?;
        map.end()
    }

    /// Same as [`super::deserialize`]; both wire shapes are accepted.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: Enumerable,
        D: Deserializer<'de>,
    {
        super::deserialize(deserializer)
    }
}

impl Serialize for OpenValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.value())
    }
}

/// Reads as an [`Unknown`]-typed value: without a concrete type there are no
/// constants to resolve against.
impl<'de> Deserialize<'de> for OpenValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let unknown: Unknown = deserialize(deserializer)?;
        Ok(unknown.as_open().clone())
    }
}
