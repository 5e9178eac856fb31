//! # Enumerated Attribute Engine
//!
//! The layer between raw persisted values and the symbolic domain values
//! application code operates on:
//!
//! 1. **Registry ([`registry`])**: explicit store of enumeration definitions
//!    keyed by (entity type, attribute), populated once during startup.
//! 2. **Coercion ([`coercion`], [`record`])**: write-side normalization of
//!    raw input to canonical symbolic form; rejection is a silent `None`,
//!    never an error, with the pre-coercion input kept inspectable.
//! 3. **Display ([`labels`], [`metadata`])**: value→label resolution with
//!    optional i18n, plus memoized ordered choice lists per entity type.
//! 4. **Queries ([`scopes`])**: named equality predicates and boolean
//!    testers installed at registration time.
//! 5. **Validation ([`validate`])**: a separate pass producing failure data
//!    for the host framework.

pub mod coercion;
mod error;
pub mod labels;
pub mod metadata;
pub mod record;
pub mod registry;
pub mod scopes;
pub mod validate;

pub use crate::error::{AttributeError, AttributeErrorExt, Result};
