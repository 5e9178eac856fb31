//! Per-entity-type derived collections over a definition's values.

use crate::labels::resolve_label;
use fxhash::FxHashMap;
use symattr_domain::definition::EnumDef;
use symattr_domain::value::EnumValue;
use symattr_i18n::Translator;

/// Memoized display collections for one (entity type, attribute) pair.
///
/// Pure function of the definition and the label resolver; the registry
/// computes it lazily once and caches it for the entity type's lifetime.
#[derive(Debug, Clone)]
pub struct Metadata {
    pairs: Vec<(String, EnumValue)>,
    map: FxHashMap<EnumValue, String>,
}

impl Metadata {
    pub(crate) fn compute(entity: &str, def: &EnumDef, translator: &dyn Translator) -> Self {
        let pairs: Vec<(String, EnumValue)> = def
            .declared_values()
            .iter()
            .map(|value| (resolve_label(entity, def, value, translator), value.clone()))
            .collect();
        let map = pairs.iter().map(|(label, value)| (value.clone(), label.clone())).collect();
        Self { pairs, map }
    }

    /// Ordered `(label, value)` pairs in declared order, for choice lists.
    #[must_use]
    pub fn values_with_labels(&self) -> &[(String, EnumValue)] {
        &self.pairs
    }

    /// `value → label` mapping for O(1) lookup.
    #[must_use]
    pub fn value_label_map(&self) -> &FxHashMap<EnumValue, String> {
        &self.map
    }

    #[must_use]
    pub fn label_of(&self, value: &EnumValue) -> Option<&str> {
        self.map.get(value).map(String::as_str)
    }
}
