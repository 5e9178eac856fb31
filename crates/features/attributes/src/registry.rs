//! Explicit definition registry keyed by (entity type, attribute).
//!
//! Hosts register one [`EnumDef`] per attribute during startup; there is no
//! implicit per-type wiring, every record operation consults the registry
//! explicitly. Entries are write-once-then-
//! read-many; configuration is expected to happen-before instance use, the
//! locks only make the discipline safe to get wrong.

use crate::error::{AttributeError, Result};
use crate::metadata::Metadata;
use crate::record::SymbolicRecord;
use crate::scopes::{self, ScopePredicate};
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::sync::{Arc, OnceLock};
use symattr_domain::definition::{EnumDef, ValueKind};
use symattr_domain::value::EnumValue;
use symattr_i18n::Translator;

/// One registered attribute: its definition plus everything derived from it
/// at registration time (scopes, testers) or lazily (metadata).
#[derive(Debug)]
pub(crate) struct AttrEntry {
    def: EnumDef,
    metadata: OnceLock<Metadata>,
    scopes: FxHashMap<String, ScopePredicate>,
    testers: FxHashMap<String, EnumValue>,
}

impl AttrEntry {
    fn new(def: EnumDef) -> Self {
        let scopes = scopes::build_scopes(&def).into_iter().collect();
        let testers = scopes::build_testers(&def).into_iter().collect();
        Self { def, metadata: OnceLock::new(), scopes, testers }
    }

    pub(crate) fn def(&self) -> &EnumDef {
        &self.def
    }

    fn metadata(&self, entity: &str, translator: &dyn Translator) -> &Metadata {
        self.metadata.get_or_init(|| Metadata::compute(entity, &self.def, translator))
    }
}

/// Process-wide, read-mostly store of enumeration definitions.
#[derive(Debug, Default)]
pub struct AttrRegistry {
    entries: RwLock<FxHashMap<(String, String), Arc<AttrEntry>>>,
    // Registration order per entity, for the validation pass and introspection.
    attrs_by_entity: RwLock<FxHashMap<String, Vec<String>>>,
}

impl AttrRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `def` for `entity`.
    ///
    /// Fails fast on malformed definitions. Re-registering an attribute with
    /// the same value kind replaces the previous definition (last write
    /// wins, logged); a conflicting value kind is a configuration error.
    ///
    /// # Errors
    /// [`AttributeError::Config`] for an empty attribute name, an explicitly
    /// empty value list, mixed symbol/boolean values, duplicate values, or a
    /// value-kind conflict with an existing registration.
    pub fn register(&self, entity: &str, def: EnumDef) -> Result<()> {
        check_definition(&def)?;

        let key = (entity.to_owned(), def.attribute().to_owned());
        let mut entries = self.entries.write();

        if let Some(existing) = entries.get(&key) {
            let before = existing.def().value_kind();
            let after = def.value_kind();
            if before.is_some() && after.is_some() && before != after {
                return Err(AttributeError::Config {
                    message: format!(
                        "attribute '{}' on '{entity}' re-registered with a conflicting value kind",
                        def.attribute()
                    )
                    .into(),
                    context: None,
                });
            }
            tracing::warn!(entity, attribute = def.attribute(), "replacing enumeration definition");
        } else {
            self.attrs_by_entity
                .write()
                .entry(entity.to_owned())
                .or_default()
                .push(def.attribute().to_owned());
            tracing::debug!(
                entity,
                attribute = def.attribute(),
                open = def.is_open(),
                "registered enumeration definition"
            );
        }

        entries.insert(key, Arc::new(AttrEntry::new(def)));
        Ok(())
    }

    pub(crate) fn entry(&self, entity: &str, attribute: &str) -> Result<Arc<AttrEntry>> {
        self.entries
            .read()
            .get(&(entity.to_owned(), attribute.to_owned()))
            .cloned()
            .ok_or_else(|| AttributeError::UnknownAttribute {
                message: format!("no enumeration registered for {entity}.{attribute}").into(),
                context: None,
            })
    }

    /// Clone of the registered definition, for introspection.
    ///
    /// # Errors
    /// [`AttributeError::UnknownAttribute`] if nothing is registered.
    pub fn definition(&self, entity: &str, attribute: &str) -> Result<EnumDef> {
        Ok(self.entry(entity, attribute)?.def().clone())
    }

    /// Registered attribute names for `entity`, in registration order.
    #[must_use]
    pub fn attributes(&self, entity: &str) -> Vec<String> {
        self.attrs_by_entity.read().get(entity).cloned().unwrap_or_default()
    }

    /// Ordered `(label, value)` pairs for choice lists; resolved through
    /// `translator` once, then memoized.
    ///
    /// # Errors
    /// [`AttributeError::UnknownAttribute`] if nothing is registered.
    pub fn values_with_labels(
        &self,
        entity: &str,
        attribute: &str,
        translator: &dyn Translator,
    ) -> Result<Vec<(String, EnumValue)>> {
        let entry = self.entry(entity, attribute)?;
        Ok(entry.metadata(entity, translator).values_with_labels().to_vec())
    }

    /// `value → label` map, memoized together with the pair list.
    ///
    /// # Errors
    /// [`AttributeError::UnknownAttribute`] if nothing is registered.
    pub fn value_label_map(
        &self,
        entity: &str,
        attribute: &str,
        translator: &dyn Translator,
    ) -> Result<FxHashMap<EnumValue, String>> {
        let entry = self.entry(entity, attribute)?;
        Ok(entry.metadata(entity, translator).value_label_map().clone())
    }

    /// Look up a named scope predicate across all of `entity`'s attributes.
    ///
    /// # Errors
    /// [`AttributeError::UnknownAttribute`] if no attribute of `entity`
    /// installed a scope under `name`.
    pub fn scope(&self, entity: &str, name: &str) -> Result<ScopePredicate> {
        let attrs = self.attributes(entity);
        let entries = self.entries.read();
        for attribute in &attrs {
            if let Some(entry) = entries.get(&(entity.to_owned(), attribute.clone())) {
                if let Some(predicate) = entry.scopes.get(name) {
                    return Ok(predicate.clone());
                }
            }
        }
        Err(AttributeError::UnknownAttribute {
            message: format!("no scope '{name}' registered for {entity}").into(),
            context: None,
        })
    }

    /// Installed scope names for one attribute, sorted for determinism.
    ///
    /// # Errors
    /// [`AttributeError::UnknownAttribute`] if nothing is registered.
    pub fn scope_names(&self, entity: &str, attribute: &str) -> Result<Vec<String>> {
        let entry = self.entry(entity, attribute)?;
        let mut names: Vec<String> = entry.scopes.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    /// Resolve a boolean tester name (`is_good`) to its `(attribute, value)`
    /// pair, across all of `entity`'s attributes.
    ///
    /// # Errors
    /// [`AttributeError::UnknownAttribute`] if no attribute of `entity`
    /// installed a tester under `name`.
    pub fn boolean_test(&self, entity: &str, name: &str) -> Result<(String, EnumValue)> {
        let attrs = self.attributes(entity);
        let entries = self.entries.read();
        for attribute in &attrs {
            if let Some(entry) = entries.get(&(entity.to_owned(), attribute.clone())) {
                if let Some(value) = entry.testers.get(name) {
                    return Ok((attribute.clone(), value.clone()));
                }
            }
        }
        Err(AttributeError::UnknownAttribute {
            message: format!("no boolean tester '{name}' registered for {entity}").into(),
            context: None,
        })
    }

    /// A fresh record handle bound to `entity`.
    #[must_use]
    pub fn record(&self, entity: impl Into<String>) -> SymbolicRecord<'_> {
        SymbolicRecord::new(self, entity.into())
    }
}

fn check_definition(def: &EnumDef) -> Result<()> {
    if def.attribute().is_empty() {
        return Err(config_error("definition is missing an attribute name".to_owned()));
    }
    if def.is_open() {
        return Ok(());
    }

    let values = def.declared_values();
    if values.is_empty() {
        return Err(config_error(format!(
            "attribute '{}' declared an empty value list; omit the list for an open enumeration",
            def.attribute()
        )));
    }

    let kind = ValueKind::of(&values[0]);
    if values.iter().any(|value| ValueKind::of(value) != kind) {
        return Err(config_error(format!(
            "attribute '{}' mixes boolean and symbol values",
            def.attribute()
        )));
    }

    for (index, value) in values.iter().enumerate() {
        if values[..index].contains(value) {
            return Err(config_error(format!(
                "attribute '{}' declares '{value}' more than once",
                def.attribute()
            )));
        }
    }

    Ok(())
}

fn config_error(message: String) -> AttributeError {
    AttributeError::Config { message: message.into(), context: None }
}
