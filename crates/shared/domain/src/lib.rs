//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no I/O, no registries, no coercion logic—just the declarative
//! shape of an enumerated attribute and its values.

pub mod definition;
pub mod value;
