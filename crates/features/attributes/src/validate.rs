//! Membership validation pass.
//!
//! Validation is data, not control flow: the pass walks every registered
//! attribute of the record's entity type and collects failures for the host
//! framework's normal error-reporting channel. It never re-derives the
//! invalid raw value, it only flags the attribute.

use crate::coercion::NilCause;
use crate::record::SymbolicRecord;
use symattr_domain::definition::AttrFlags;

/// Kind of validation failure the pass can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    InvalidEnumerationValue,
}

/// One validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub attribute: String,
    pub kind: ViolationKind,
}

/// Validate every registered attribute of the record's entity type.
///
/// An attribute with a declared value list and a `None` canonical value
/// fails unless the flag matching the nil's cause suppresses it: blank input
/// needs `ALLOW_BLANK`, null or never-written input needs `ALLOW_NIL`. The
/// two are independently satisfiable; a rejected non-blank value satisfies
/// neither. Open enumerations are never validated.
#[must_use]
pub fn validate(record: &SymbolicRecord<'_>) -> Vec<Violation> {
    let registry = record.registry();
    let mut violations = Vec::new();

    for attribute in registry.attributes(record.entity()) {
        let Ok(entry) = registry.entry(record.entity(), &attribute) else {
            continue;
        };
        let def = entry.def();
        if def.is_open() || record.read(&attribute).is_some() {
            continue;
        }

        let suppressed = match record.nil_cause(&attribute) {
            NilCause::Nil => def.flags().contains(AttrFlags::ALLOW_NIL),
            NilCause::Blank => def.flags().contains(AttrFlags::ALLOW_BLANK),
            NilCause::TypeMismatch | NilCause::NotAMember => false,
        };

        if !suppressed {
            violations
                .push(Violation { attribute, kind: ViolationKind::InvalidEnumerationValue });
        }
    }

    violations
}
