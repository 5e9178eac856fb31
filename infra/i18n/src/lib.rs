//! # Label Translation Interface
//!
//! The coercion engine only *consumes* an i18n service; the backend itself is
//! a collaborator. This crate defines the lookup contract ([`Translator`])
//! and ships a small in-memory backend ([`StaticCatalog`]) that hosts and
//! tests can fill from pairs or a nested JSON document.
//!
//! Lookup misses are silent by contract: the label resolver falls back to the
//! next rule in its precedence chain, so `translate` returns an `Option`,
//! never an error.

use fxhash::FxHashMap;
use std::fmt;

/// Lookup key for one enumerated value's label: `(entity type, attribute,
/// canonical value text)`.
///
/// Entity type names are snake_cased so multiword types address the same
/// catalog section regardless of their source casing (`UserSkill` and
/// `user_skill` both resolve under `user_skill`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LabelKey {
    entity: String,
    attribute: String,
    value: String,
}

impl LabelKey {
    pub fn new(
        entity: impl AsRef<str>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            entity: snake_case(entity.as_ref()),
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    /// Dotted catalog path, e.g. `user.language.pt`.
    #[must_use]
    pub fn path(&self) -> String {
        format!("{}.{}.{}", self.entity, self.attribute, self.value)
    }
}

impl fmt::Display for LabelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// The lookup contract the label resolver consumes.
pub trait Translator: Send + Sync {
    /// Resolve `key` to a localized label, or `None` on a miss.
    fn translate(&self, key: &LabelKey) -> Option<String>;
}

/// A translator with no entries; every lookup misses.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTranslations;

impl Translator for NoTranslations {
    fn translate(&self, _key: &LabelKey) -> Option<String> {
        None
    }
}

/// In-memory catalog keyed by dotted [`LabelKey::path`].
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    entries: FxHashMap<String, String>,
}

impl StaticCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from `(path, label)` pairs.
    pub fn from_pairs<I, P, L>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: Into<String>,
    {
        let entries = pairs.into_iter().map(|(path, label)| (path.into(), label.into())).collect();
        Self { entries }
    }

    /// Build a catalog from a nested JSON document; nesting levels join into
    /// dotted paths (`{"user": {"language": {"pt": "Português"}}}` yields the
    /// entry `user.language.pt`). Non-string leaves are skipped.
    #[must_use]
    pub fn from_json(document: &serde_json::Value) -> Self {
        let mut catalog = Self::new();
        flatten_into(&mut catalog.entries, "", document);
        catalog
    }

    pub fn insert(&mut self, path: impl Into<String>, label: impl Into<String>) {
        self.entries.insert(path.into(), label.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Translator for StaticCatalog {
    fn translate(&self, key: &LabelKey) -> Option<String> {
        self.entries.get(&key.path()).cloned()
    }
}

fn flatten_into(entries: &mut FxHashMap<String, String>, prefix: &str, node: &serde_json::Value) {
    match node {
        serde_json::Value::Object(map) => {
            for (segment, child) in map {
                let path = if prefix.is_empty() {
                    segment.clone()
                } else {
                    format!("{prefix}.{segment}")
                };
                flatten_into(entries, &path, child);
            }
        },
        serde_json::Value::String(label) if !prefix.is_empty() => {
            entries.insert(prefix.to_owned(), label.clone());
        },
        _ => {},
    }
}

/// Snake_case an entity type name: `UserSkill` → `user_skill`.
#[must_use]
pub fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    for (index, ch) in name.chars().enumerate() {
        if ch.is_uppercase() {
            if index > 0 {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
