//! Record handle wrapping attribute access for one entity instance.

use crate::coercion::{AttrSlot, NilCause};
use crate::error::Result;
use crate::labels::resolve_label;
use crate::registry::AttrRegistry;
use fxhash::FxHashMap;
use symattr_domain::value::{EnumValue, RawValue};
use symattr_i18n::Translator;

static NULL_RAW: RawValue = RawValue::Null;

/// Per-instance coercion state for every enumerated attribute of one entity
/// type, backed by the shared registry.
///
/// The public accessors uphold the layer's central invariant: [`read`] only
/// ever yields a declared canonical value or `None`, while the raw
/// pre-coercion input stays available through [`raw_before_coercion`].
///
/// [`read`]: SymbolicRecord::read
/// [`raw_before_coercion`]: SymbolicRecord::raw_before_coercion
#[derive(Debug)]
pub struct SymbolicRecord<'reg> {
    registry: &'reg AttrRegistry,
    entity: String,
    slots: FxHashMap<String, AttrSlot>,
}

impl<'reg> SymbolicRecord<'reg> {
    pub(crate) fn new(registry: &'reg AttrRegistry, entity: String) -> Self {
        Self { registry, entity, slots: FxHashMap::default() }
    }

    #[must_use]
    pub fn entity(&self) -> &str {
        &self.entity
    }

    #[must_use]
    pub fn registry(&self) -> &'reg AttrRegistry {
        self.registry
    }

    /// Write `input` through the coercion engine.
    ///
    /// Never fails on bad input values — rejection is a silent `None`
    /// canonical value. It does fail on bad *configuration*: writing an
    /// attribute no definition was registered for.
    ///
    /// # Errors
    /// [`crate::AttributeError::UnknownAttribute`] for unregistered attributes.
    pub fn write(&mut self, attribute: &str, input: impl Into<RawValue>) -> Result<()> {
        let entry = self.registry.entry(&self.entity, attribute)?;
        let slot = self.slots.entry(attribute.to_owned()).or_default();
        slot.write(entry.def(), input.into());
        Ok(())
    }

    /// Current canonical value: a member of the declared values, or `None`.
    /// Idempotent under repeated calls.
    #[must_use]
    pub fn read(&self, attribute: &str) -> Option<&EnumValue> {
        self.slots.get(attribute).and_then(AttrSlot::canonical)
    }

    /// The last raw input written to `attribute`, unnormalized; `Null` if the
    /// attribute was never written.
    #[must_use]
    pub fn raw_before_coercion(&self, attribute: &str) -> &RawValue {
        self.slots.get(attribute).map_or(&NULL_RAW, AttrSlot::raw)
    }

    /// Why `attribute` currently has no canonical value.
    #[must_use]
    pub fn nil_cause(&self, attribute: &str) -> NilCause {
        self.slots.get(attribute).and_then(AttrSlot::nil_cause).unwrap_or(NilCause::Nil)
    }

    /// Primitive form for the storage layer: the symbol's name as text, or
    /// the literal boolean. `None` when no canonical value is present.
    #[must_use]
    pub fn persistence_value(&self, attribute: &str) -> Option<RawValue> {
        self.read(attribute).map(|value| match value {
            EnumValue::Sym(name) => RawValue::Text(name.clone()),
            EnumValue::Bool(flag) => RawValue::Bool(*flag),
        })
    }

    /// Quote-escaped query literal of the canonical value.
    #[must_use]
    pub fn quoted_literal(&self, attribute: &str) -> Option<String> {
        self.read(attribute).map(EnumValue::quoted_literal)
    }

    /// Resolved display label of the current value (the `*_text` analog);
    /// `None` while no canonical value is present.
    ///
    /// # Errors
    /// [`crate::AttributeError::UnknownAttribute`] for unregistered attributes.
    pub fn label(&self, attribute: &str, translator: &dyn Translator) -> Result<Option<String>> {
        let entry = self.registry.entry(&self.entity, attribute)?;
        Ok(self
            .read(attribute)
            .map(|value| resolve_label(&self.entity, entry.def(), value, translator)))
    }

    /// Evaluate a boolean tester installed under the `METHODS` flag
    /// (`record.test("is_good")`).
    ///
    /// # Errors
    /// [`crate::AttributeError::UnknownAttribute`] if no tester with that
    /// name exists for this entity type.
    pub fn test(&self, tester: &str) -> Result<bool> {
        let (attribute, value) = self.registry.boolean_test(&self.entity, tester)?;
        Ok(self.read(&attribute) == Some(&value))
    }
}
