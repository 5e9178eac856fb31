//! Write-side state machine for one attribute slot.
//!
//! Coercion is deliberately silent: raw input that cannot canonicalize
//! collapses to a `None` canonical value instead of raising, and the
//! unmodified raw form stays retrievable for validation and display layers.
//! Validation is a separate pass (see [`crate::validate`]); nothing here
//! checks the `ALLOW_BLANK`/`ALLOW_NIL` flags.

use symattr_domain::definition::EnumDef;
use symattr_domain::value::{EnumValue, RawValue};

/// Why a slot's canonical value is `None`, when it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NilCause {
    /// Null input, or the attribute was never written.
    Nil,
    /// Empty-string input.
    Blank,
    /// Input of a type that can never canonicalize (numbers).
    TypeMismatch,
    /// Normalized fine but absent from the declared values.
    NotAMember,
}

/// The two observable slots of one attribute on one instance.
#[derive(Debug, Clone, Default)]
pub struct AttrSlot {
    raw: RawValue,
    canonical: Option<EnumValue>,
}

impl AttrSlot {
    /// Run the write precedence chain against `def`, updating both slots.
    pub fn write(&mut self, def: &EnumDef, input: RawValue) {
        self.canonical = coerce(def, &input);
        self.raw = input;
    }

    #[must_use]
    pub fn canonical(&self) -> Option<&EnumValue> {
        self.canonical.as_ref()
    }

    /// The last value written, unnormalized.
    #[must_use]
    pub fn raw(&self) -> &RawValue {
        &self.raw
    }

    /// Cause of the missing canonical value; `None` while one is present.
    #[must_use]
    pub fn nil_cause(&self) -> Option<NilCause> {
        if self.canonical.is_some() {
            return None;
        }
        Some(match &self.raw {
            RawValue::Null => NilCause::Nil,
            raw if raw.is_blank() => NilCause::Blank,
            RawValue::Int(_) | RawValue::Float(_) => NilCause::TypeMismatch,
            _ => NilCause::NotAMember,
        })
    }
}

/// Normalize `input` against `def` following the documented precedence:
/// null, then blank, then type, then normalization, then membership.
///
/// Open definitions (no declared list) skip the membership step, so any
/// string-like input canonicalizes to a symbol.
#[must_use]
pub fn coerce(def: &EnumDef, input: &RawValue) -> Option<EnumValue> {
    if input.is_null() || input.is_blank() {
        return None;
    }

    let normalized = match input {
        RawValue::Text(text) | RawValue::Sym(text) => EnumValue::Sym(text.clone()),
        RawValue::Bool(flag) => EnumValue::Bool(*flag),
        RawValue::Null | RawValue::Int(_) | RawValue::Float(_) => return None,
    };

    if !def.is_open() && !def.contains(&normalized) {
        return None;
    }

    Some(normalized)
}
