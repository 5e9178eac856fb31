use crate::value::EnumValue;
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Per-attribute behavior switches.
    ///
    /// `ALLOW_BLANK` / `ALLOW_NIL` govern the validation pass only, never
    /// coercion. `I18N` is the only flag enabled by default.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct AttrFlags: u8 {
        const ALLOW_BLANK = 1 << 0;
        const ALLOW_NIL   = 1 << 1;
        const I18N        = 1 << 2;
        const CAPITALIZE  = 1 << 3;
        const SCOPES      = 1 << 4;
        const METHODS     = 1 << 5;
    }
}

impl Default for AttrFlags {
    fn default() -> Self {
        Self::I18N
    }
}

impl Serialize for AttrFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for AttrFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(Self::from_bits_retain(bits))
    }
}

/// The kind of canonical values a definition holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Symbol,
    Boolean,
}

impl ValueKind {
    #[must_use]
    pub const fn of(value: &EnumValue) -> Self {
        match value {
            EnumValue::Sym(_) => Self::Symbol,
            EnumValue::Bool(_) => Self::Boolean,
        }
    }
}

/// Immutable declarative spec of one enumerated attribute.
///
/// Built once when an entity type is configured and shared read-only by every
/// instance afterwards. The configuration forms map onto the builder:
///
/// * explicit value list → [`EnumDef::values`];
/// * ordered value→label mapping → [`EnumDef::labeled`] (values are the keys
///   in insertion order, labels are the mapping itself);
/// * neither → an *open* enumeration: no validation, no scopes, no value
///   list; coercion only normalizes type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumDef {
    attribute: String,
    values: Option<Vec<EnumValue>>,
    labels: Vec<(EnumValue, String)>,
    flags: AttrFlags,
}

impl Default for EnumDef {
    fn default() -> Self {
        Self {
            attribute: String::new(),
            values: None,
            labels: Vec::new(),
            flags: AttrFlags::default(),
        }
    }
}

impl EnumDef {
    /// Start an open definition for `attribute` with default flags.
    pub fn new(attribute: impl Into<String>) -> Self {
        Self { attribute: attribute.into(), ..Self::default() }
    }

    /// Declare the allowed values as an explicit ordered list.
    /// Labels stay empty and get derived at display time.
    #[must_use]
    pub fn values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<EnumValue>,
    {
        self.values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Declare the allowed values as an ordered value→label mapping.
    #[must_use]
    pub fn labeled<I, V, L>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (V, L)>,
        V: Into<EnumValue>,
        L: Into<String>,
    {
        let labels: Vec<(EnumValue, String)> =
            pairs.into_iter().map(|(value, label)| (value.into(), label.into())).collect();
        self.values = Some(labels.iter().map(|(value, _)| value.clone()).collect());
        self.labels = labels;
        self
    }

    #[must_use]
    pub fn i18n(self, enabled: bool) -> Self {
        self.toggle(AttrFlags::I18N, enabled)
    }

    #[must_use]
    pub fn capitalize(self, enabled: bool) -> Self {
        self.toggle(AttrFlags::CAPITALIZE, enabled)
    }

    #[must_use]
    pub fn allow_blank(self, enabled: bool) -> Self {
        self.toggle(AttrFlags::ALLOW_BLANK, enabled)
    }

    #[must_use]
    pub fn allow_nil(self, enabled: bool) -> Self {
        self.toggle(AttrFlags::ALLOW_NIL, enabled)
    }

    #[must_use]
    pub fn scopes(self, enabled: bool) -> Self {
        self.toggle(AttrFlags::SCOPES, enabled)
    }

    #[must_use]
    pub fn methods(self, enabled: bool) -> Self {
        self.toggle(AttrFlags::METHODS, enabled)
    }

    fn toggle(mut self, flag: AttrFlags, enabled: bool) -> Self {
        self.flags.set(flag, enabled);
        self
    }

    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// `true` when no `in` list was declared; open enumerations skip
    /// validation, scopes, and value lists entirely.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.values.is_none()
    }

    /// Declared values in insertion order; empty for open enumerations.
    #[must_use]
    pub fn declared_values(&self) -> &[EnumValue] {
        self.values.as_deref().unwrap_or_default()
    }

    /// Explicit label for `value`, if the mapping form declared one.
    #[must_use]
    pub fn label_for(&self, value: &EnumValue) -> Option<&str> {
        self.labels
            .iter()
            .find(|(candidate, _)| candidate == value)
            .map(|(_, label)| label.as_str())
    }

    #[must_use]
    pub const fn flags(&self) -> AttrFlags {
        self.flags
    }

    /// Membership test against the declared values.
    #[must_use]
    pub fn contains(&self, value: &EnumValue) -> bool {
        self.declared_values().contains(value)
    }

    /// Kind of the declared values, `None` for open enumerations.
    #[must_use]
    pub fn value_kind(&self) -> Option<ValueKind> {
        self.declared_values().first().map(ValueKind::of)
    }

    /// A two-valued boolean domain (`in: [true, false]`).
    #[must_use]
    pub fn is_boolean_domain(&self) -> bool {
        self.value_kind() == Some(ValueKind::Boolean)
    }
}
