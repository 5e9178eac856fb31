//! Named query predicates and boolean testers.
//!
//! Both are generic, parameterized values looked up by name through the
//! registry rather than synthesized accessors: a scope is `(attribute,
//! value)` rendered as an equality condition, a tester compares a record's
//! canonical value against one declared value.

use crate::record::SymbolicRecord;
use symattr_domain::definition::{AttrFlags, EnumDef};
use symattr_domain::value::EnumValue;

/// A named query predicate: entities whose attribute equals one declared
/// value's persistence representation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScopePredicate {
    attribute: String,
    value: EnumValue,
}

impl ScopePredicate {
    pub(crate) fn new(attribute: impl Into<String>, value: EnumValue) -> Self {
        Self { attribute: attribute.into(), value }
    }

    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    #[must_use]
    pub const fn value(&self) -> &EnumValue {
        &self.value
    }

    /// Equality condition for the query framework, with the value quoted for
    /// safe embedding (`status = 'active'`, `sex = true`).
    #[must_use]
    pub fn condition(&self) -> String {
        format!("{} = {}", self.attribute, self.value.quoted_literal())
    }

    /// Evaluate the predicate against an in-memory record.
    #[must_use]
    pub fn matches(&self, record: &SymbolicRecord<'_>) -> bool {
        record.read(&self.attribute) == Some(&self.value)
    }
}

/// Scope names for one definition, empty unless the `SCOPES` flag is set.
///
/// Symbol domains name each scope after the value's text. Boolean value
/// texts make poor accessor names, so boolean domains derive names from the
/// attribute instead: `<attr>`/`with_<attr>` select `true`,
/// `not_<attr>`/`without_<attr>` select `false`.
pub(crate) fn build_scopes(def: &EnumDef) -> Vec<(String, ScopePredicate)> {
    if !def.flags().contains(AttrFlags::SCOPES) {
        return Vec::new();
    }

    let attribute = def.attribute();
    if def.is_boolean_domain() {
        return vec![
            (attribute.to_owned(), ScopePredicate::new(attribute, EnumValue::Bool(true))),
            (format!("not_{attribute}"), ScopePredicate::new(attribute, EnumValue::Bool(false))),
            (format!("with_{attribute}"), ScopePredicate::new(attribute, EnumValue::Bool(true))),
            (format!("without_{attribute}"), ScopePredicate::new(attribute, EnumValue::Bool(false))),
        ];
    }

    def.declared_values()
        .iter()
        .map(|value| {
            (value.as_text().into_owned(), ScopePredicate::new(attribute, value.clone()))
        })
        .collect()
}

/// Boolean tester names (`is_good`, `is_bad`), empty unless the `METHODS`
/// flag is set.
pub(crate) fn build_testers(def: &EnumDef) -> Vec<(String, EnumValue)> {
    if !def.flags().contains(AttrFlags::METHODS) {
        return Vec::new();
    }

    def.declared_values()
        .iter()
        .map(|value| (format!("is_{}", value.as_text()), value.clone()))
        .collect()
}
