//! Facade crate for the symbolic attribute layer.
//! Re-exports the domain types, the coercion engine, and the i18n interface.
//! Keep this crate thin: it should compose other crates, not implement logic.
//!
//! ## Usage
//! - Register one [`EnumDef`] per enumerated attribute per entity type during
//!   startup, through an [`AttrRegistry`].
//! - Obtain [`SymbolicRecord`] handles from the registry for instance-level
//!   reads and writes; run [`validate`] wherever the host framework collects
//!   validation failures.

pub use symattr_attributes as attributes;
pub use symattr_domain as domain;
pub use symattr_i18n as i18n;

pub use symattr_attributes::record::SymbolicRecord;
pub use symattr_attributes::registry::AttrRegistry;
pub use symattr_attributes::scopes::ScopePredicate;
pub use symattr_attributes::validate::{Violation, ViolationKind, validate};
pub use symattr_attributes::{AttributeError, AttributeErrorExt, Result};
pub use symattr_domain::definition::{AttrFlags, EnumDef};
pub use symattr_domain::value::{EnumValue, RawValue};
pub use symattr_i18n::{LabelKey, NoTranslations, StaticCatalog, Translator};
