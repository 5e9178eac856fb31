use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;

/// Canonical in-memory form of an enumerated attribute value.
///
/// Symbol-valued domains canonicalize to [`EnumValue::Sym`]; two-valued
/// boolean domains keep the booleans themselves. Equality is by value
/// identity, so the text input `"active"` and the symbol `active` end up
/// equal after coercion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EnumValue {
    /// A named symbolic value.
    Sym(String),
    /// A boolean canonical value (for `[true, false]` domains).
    Bool(bool),
}

impl EnumValue {
    /// Shorthand constructor for a symbolic value.
    pub fn sym(name: impl Into<String>) -> Self {
        Self::Sym(name.into())
    }

    /// Textual form used for derived labels, scope names, and translation keys.
    #[must_use]
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Sym(name) => Cow::Borrowed(name.as_str()),
            Self::Bool(true) => Cow::Borrowed("true"),
            Self::Bool(false) => Cow::Borrowed("false"),
        }
    }

    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    /// Quoted query literal for safe embedding in a predicate.
    ///
    /// Embedded quote characters are doubled: `weird'; chars` becomes
    /// `'weird''; chars'`. Booleans are unquoted.
    #[must_use]
    pub fn quoted_literal(&self) -> String {
        match self {
            Self::Sym(name) => format!("'{}'", name.replace('\'', "''")),
            Self::Bool(flag) => flag.to_string(),
        }
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<bool> for EnumValue {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<&str> for EnumValue {
    fn from(name: &str) -> Self {
        Self::Sym(name.to_owned())
    }
}

impl From<String> for EnumValue {
    fn from(name: String) -> Self {
        Self::Sym(name)
    }
}

impl Serialize for EnumValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Sym(name) => serializer.serialize_str(name),
            Self::Bool(flag) => serializer.serialize_bool(*flag),
        }
    }
}

impl<'de> Deserialize<'de> for EnumValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl serde::de::Visitor<'_> for ValueVisitor {
            type Value = EnumValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a symbol name or a boolean")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(EnumValue::Sym(v.to_owned()))
            }

            fn visit_bool<E: serde::de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(EnumValue::Bool(v))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

/// What the persistence layer or application code hands the coercion engine
/// before any normalization.
///
/// The engine keeps the last written `RawValue` verbatim so rejected input
/// stays inspectable by validation and display layers.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawValue {
    /// Absent / null input.
    #[default]
    Null,
    /// Free text, typically what a string-typed column loads as.
    Text(String),
    /// An already-symbolic value.
    Sym(String),
    Bool(bool),
    Int(i64),
    Float(f64),
}

impl RawValue {
    /// Shorthand constructor for a symbol-typed raw input.
    pub fn sym(name: impl Into<String>) -> Self {
        Self::Sym(name.into())
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Blank means an empty text value; `Null` is tracked separately.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(text) if text.is_empty())
    }
}

impl From<&str> for RawValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for RawValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<bool> for RawValue {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<i64> for RawValue {
    fn from(number: i64) -> Self {
        Self::Int(number)
    }
}

impl From<f64> for RawValue {
    fn from(number: f64) -> Self {
        Self::Float(number)
    }
}

impl From<EnumValue> for RawValue {
    fn from(value: EnumValue) -> Self {
        match value {
            EnumValue::Sym(name) => Self::Sym(name),
            EnumValue::Bool(flag) => Self::Bool(flag),
        }
    }
}

impl<T: Into<Self>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
