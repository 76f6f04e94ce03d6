//! Field alias resolution.
//!
//! Extraction output labels the same clinical data point differently across
//! processor versions and document layouts. This crate maps each raw label
//! onto one [`tbi_model::CanonicalField`] through a declarative alias table
//! and a single lookup function with a most-specific-match tie-break.

pub mod resolver;
pub mod table;

pub use resolver::{AliasTable, normalize_name};
