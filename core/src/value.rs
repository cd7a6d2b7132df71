//! `Value` — Type-erased expansion values
//!
//! Expansion engines hand the toolkit values of unknown shape: scalars,
//! sequences of pairs, domain-specific objects. `Value` erases those shapes
//! into one enum so [`to_param`](crate::to_param) and
//! [`to_mapping`](crate::to_mapping) can stay non-generic.
//!
//! # Extensibility via `Custom`
//!
//! For domain-specific types not covered by the primitives, implement
//! [`CustomValue`] and wrap in `Value::Custom(Arc::new(your_type))`. The
//! trait carries the two optional coercion capabilities consulted by
//! [`to_param`](crate::to_param).

use std::any::Any;
use std::fmt::Debug;
use std::sync::Arc;

/// Extension trait for domain-specific expansion values.
///
/// Implement this for types the primitives don't cover, then wrap with
/// `Value::Custom(Arc::new(your_type))`.
///
/// The two capability methods mirror the coercion fallback chain: a value
/// may expose a dedicated parameter rendering ([`param_str`](Self::param_str)),
/// a generic string rendering ([`display_str`](Self::display_str)), both, or
/// neither. `None` means the capability is absent; `Some(Err(_))` means it
/// exists but failed internally — [`to_param`](crate::to_param) collapses
/// that into [`Unconvertable`](crate::CoerceError::Unconvertable).
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to support concurrent expansion.
///
/// # Example
///
/// ```
/// use std::any::Any;
/// use std::sync::Arc;
/// use rutem::{CustomValue, Value, to_param};
///
/// #[derive(Debug)]
/// struct Revision {
///     major: u32,
///     minor: u32,
/// }
///
/// impl CustomValue for Revision {
///     fn type_name(&self) -> &'static str {
///         "revision"
///     }
///
///     fn as_any(&self) -> &dyn Any {
///         self
///     }
///
///     fn param_str(&self) -> Option<Result<String, String>> {
///         Some(Ok(format!("{}.{}", self.major, self.minor)))
///     }
/// }
///
/// let value = Value::Custom(Arc::new(Revision { major: 2, minor: 7 }));
/// assert_eq!(to_param(&value).unwrap(), "2.7");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `CustomValue`",
    label = "this type cannot be wrapped in Value::Custom",
    note = "implement `type_name` and `as_any`, plus `param_str`/`display_str` if the type has a string form"
)]
pub trait CustomValue: Send + Sync + Debug {
    /// Returns a human-readable type identifier.
    ///
    /// Shown in diagnostics when coercion fails. Convention: `snake_case`
    /// names, e.g., `"revision"`, `"entity_ref"`.
    fn type_name(&self) -> &'static str;

    /// Returns a reference to `self` as `&dyn Any`.
    ///
    /// Enables downcasting back to the concrete type:
    ///
    /// ```ignore
    /// if let Some(rev) = custom.as_any().downcast_ref::<Revision>() {
    ///     // use rev.major, rev.minor
    /// }
    /// ```
    fn as_any(&self) -> &dyn Any;

    /// The parameter-string capability, consulted first by coercion.
    ///
    /// Default: absent.
    fn param_str(&self) -> Option<Result<String, String>> {
        None
    }

    /// The generic to-string capability, consulted when
    /// [`param_str`](Self::param_str) is absent.
    ///
    /// Default: absent.
    fn display_str(&self) -> Option<Result<String, String>> {
        None
    }
}

/// A type-erased expansion value.
///
/// # Variants
///
/// - `None` — No value present
/// - `String` / `Int` / `Float` / `Bool` — Scalars, coercible to parameter strings
/// - `List` — Ordered sequence, the candidate shape for pair normalization
/// - `Map` — Ordered key/value mapping, the output of pair normalization
/// - `Custom` — User-defined types implementing [`CustomValue`]
///
/// `Map` keeps insertion order as a vector of entries; duplicate keys are
/// resolved last-write-wins at construction time by
/// [`to_mapping`](crate::to_mapping), so lookups can stop at the first hit.
///
/// # Example
///
/// ```
/// use rutem::Value;
///
/// let value = Value::String("hello".to_string());
/// assert_eq!(value.as_str(), Some("hello"));
/// assert!(!value.is_none());
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// No value present.
    None,

    /// String value — the most common case for expansion variables.
    String(String),

    /// Integer value.
    Int(i64),

    /// Floating-point value.
    Float(f64),

    /// Boolean value.
    Bool(bool),

    /// Ordered sequence of values.
    List(Vec<Value>),

    /// Ordered key/value mapping. Entries keep insertion order.
    Map(Vec<(Value, Value)>),

    /// Custom value for domain-specific extensions.
    ///
    /// Wrap your [`CustomValue`] implementation with `Arc`:
    /// ```
    /// use std::sync::Arc;
    /// use rutem::{CustomValue, Value};
    /// # use std::any::Any;
    /// # #[derive(Debug)] struct MyType;
    /// # impl CustomValue for MyType {
    /// #     fn type_name(&self) -> &'static str { "my_type" }
    /// #     fn as_any(&self) -> &dyn Any { self }
    /// # }
    ///
    /// let value = Value::Custom(Arc::new(MyType));
    /// ```
    Custom(Arc<dyn CustomValue>),
}

// Manual PartialEq implementation because trait objects don't auto-derive it.
// For Custom variants, we use Arc pointer equality (same allocation = equal).
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::None, Self::None) => true,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Value {
    /// Returns `true` if this is the `None` variant.
    #[inline]
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` if this is the `List` variant.
    #[inline]
    #[must_use]
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Returns `true` if this is the `Map` variant.
    #[inline]
    #[must_use]
    pub fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    /// Try to get the value as a string slice.
    ///
    /// # Example
    ///
    /// ```
    /// use rutem::Value;
    ///
    /// assert_eq!(Value::String("hi".into()).as_str(), Some("hi"));
    /// assert_eq!(Value::Int(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => Option::None,
        }
    }

    /// Try to get the value as an integer.
    #[inline]
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => Option::None,
        }
    }

    /// Try to get the value as a float.
    #[inline]
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(x) => Some(*x),
            _ => Option::None,
        }
    }

    /// Try to get the value as a boolean.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => Option::None,
        }
    }

    /// Try to get the value as a slice of list items.
    #[inline]
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items.as_slice()),
            _ => Option::None,
        }
    }

    /// Try to get the value as a slice of map entries.
    #[inline]
    #[must_use]
    pub fn as_map(&self) -> Option<&[(Value, Value)]> {
        match self {
            Self::Map(entries) => Some(entries.as_slice()),
            _ => Option::None,
        }
    }

    /// Try to get the value as a custom value reference.
    ///
    /// Use [`CustomValue::as_any`] to downcast to the concrete type.
    #[inline]
    #[must_use]
    pub fn as_custom(&self) -> Option<&dyn CustomValue> {
        match self {
            Self::Custom(c) => Some(c.as_ref()),
            _ => Option::None,
        }
    }

    /// Look up a key in a `Map` value.
    ///
    /// Returns `None` for non-map values and for absent keys. Entries are
    /// scanned in order; [`to_mapping`](crate::to_mapping) guarantees keys
    /// are unique, so the first hit is the only hit.
    #[must_use]
    pub fn map_get(&self, key: &Value) -> Option<&Value> {
        self.as_map()?
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    /// Returns a string describing the type of this value.
    ///
    /// For `Custom` variants, this delegates to [`CustomValue::type_name`].
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::String(_) => "string",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Custom(c) => c.type_name(),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::None
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            Option::None => Self::None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Serde (feature-gated)
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Value;
    use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
    use serde::ser::{Error as _, Serialize, SerializeMap, SerializeSeq, Serializer};
    use std::fmt;

    impl Serialize for Value {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Value::None => serializer.serialize_unit(),
                Value::String(s) => serializer.serialize_str(s),
                Value::Int(i) => serializer.serialize_i64(*i),
                Value::Float(x) => serializer.serialize_f64(*x),
                Value::Bool(b) => serializer.serialize_bool(*b),
                Value::List(items) => {
                    let mut seq = serializer.serialize_seq(Some(items.len()))?;
                    for item in items {
                        seq.serialize_element(item)?;
                    }
                    seq.end()
                }
                Value::Map(entries) => {
                    let mut map = serializer.serialize_map(Some(entries.len()))?;
                    for (k, v) in entries {
                        map.serialize_entry(k, v)?;
                    }
                    map.end()
                }
                // Custom values serialize through their string form; a value
                // with neither capability has no serializable representation.
                Value::Custom(c) => match c.param_str().or_else(|| c.display_str()) {
                    Some(Ok(text)) => serializer.serialize_str(&text),
                    _ => Err(S::Error::custom(format!(
                        "custom value \"{}\" has no string form to serialize",
                        c.type_name()
                    ))),
                },
            }
        }
    }

    impl<'de> Deserialize<'de> for Value {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            struct ValueVisitor;

            impl<'de> Visitor<'de> for ValueVisitor {
                type Value = Value;

                fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str("a template expansion value")
                }

                fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
                    Ok(Value::None)
                }

                fn visit_none<E: de::Error>(self) -> Result<Value, E> {
                    Ok(Value::None)
                }

                fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Value, D::Error> {
                    Value::deserialize(d)
                }

                fn visit_bool<E: de::Error>(self, b: bool) -> Result<Value, E> {
                    Ok(Value::Bool(b))
                }

                fn visit_i64<E: de::Error>(self, i: i64) -> Result<Value, E> {
                    Ok(Value::Int(i))
                }

                fn visit_u64<E: de::Error>(self, u: u64) -> Result<Value, E> {
                    Ok(i64::try_from(u).map_or(Value::Float(u as f64), Value::Int))
                }

                fn visit_f64<E: de::Error>(self, x: f64) -> Result<Value, E> {
                    Ok(Value::Float(x))
                }

                fn visit_str<E: de::Error>(self, s: &str) -> Result<Value, E> {
                    Ok(Value::String(s.to_string()))
                }

                fn visit_string<E: de::Error>(self, s: String) -> Result<Value, E> {
                    Ok(Value::String(s))
                }

                fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
                    let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                    while let Some(item) = seq.next_element()? {
                        items.push(item);
                    }
                    Ok(Value::List(items))
                }

                fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
                    let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                    while let Some(entry) = map.next_entry()? {
                        entries.push(entry);
                    }
                    Ok(Value::Map(entries))
                }
            }

            deserializer.deserialize_any(ValueVisitor)
        }
    }
}
