//! Per-field and per-document processing anomalies.
//!
//! Anomalies are recorded, never fatal to the batch. Only a total
//! collaborator outage across the whole batch is surfaced as an error.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fields::CanonicalField;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Anomaly {
    /// Raw field name has no alias; retained only as passthrough text.
    UnrecognizedField { raw_name: String, source: String },
    /// Value present but the wrong shape for its canonical type; dropped.
    TypeCoercionFailure {
        field: CanonicalField,
        raw_value: String,
        source: String,
    },
    /// An extraction pass or persistence call failed for this document.
    CollaboratorFailure { pass: String, message: String },
}

impl Anomaly {
    /// True when the anomaly marks a failed collaborator call rather than a
    /// field-level issue.
    #[must_use]
    pub fn is_collaborator_failure(&self) -> bool {
        matches!(self, Anomaly::CollaboratorFailure { .. })
    }
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anomaly::UnrecognizedField { raw_name, source } => {
                write!(f, "unrecognized field '{raw_name}' from {source}")
            }
            Anomaly::TypeCoercionFailure {
                field,
                raw_value,
                source,
            } => write!(
                f,
                "value '{raw_value}' from {source} is not a valid {} for {field}",
                match field.kind() {
                    crate::FieldKind::Numeric => "number",
                    crate::FieldKind::Percentile => "percentile",
                    crate::FieldKind::Text => "text value",
                }
            ),
            Anomaly::CollaboratorFailure { pass, message } => {
                write!(f, "{pass} pass failed: {message}")
            }
        }
    }
}
