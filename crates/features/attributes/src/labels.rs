//! Display-label resolution.
//!
//! Precedence: explicit label map entry → i18n lookup (when the `I18N` flag
//! is set; misses fall through) → derived textual form, capitalized when the
//! `CAPITALIZE` flag is set. Boolean domains flow through the same chain via
//! their `"true"`/`"false"` texts.

use symattr_domain::definition::{AttrFlags, EnumDef};
use symattr_domain::value::EnumValue;
use symattr_i18n::{LabelKey, Translator};

/// Resolve the display label of `value` under `def` for `entity`.
#[must_use]
pub fn resolve_label(
    entity: &str,
    def: &EnumDef,
    value: &EnumValue,
    translator: &dyn Translator,
) -> String {
    if let Some(label) = def.label_for(value) {
        return label.to_owned();
    }

    if def.flags().contains(AttrFlags::I18N) {
        let key = LabelKey::new(entity, def.attribute(), value.as_text());
        if let Some(label) = translator.translate(&key) {
            return label;
        }
    }

    derived_label(def, value)
}

fn derived_label(def: &EnumDef, value: &EnumValue) -> String {
    let text = value.as_text();
    if def.flags().contains(AttrFlags::CAPITALIZE) {
        capitalize_first(&text)
    } else {
        text.into_owned()
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}
