//! Persisted record shape surfaced to the listing dashboard.
//!
//! This shape is a stable contract: the `scores` object always carries every
//! known score field key, with `null` for fields that were not extracted.
//! Any change to canonical field keys must be mirrored by the dashboard
//! collaborator.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::fields::CanonicalField;
use crate::record::{FieldValue, PatientRecord, TestFlags};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedRecord {
    pub patient_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub date_of_injury: Option<String>,
    pub date_of_testing: Option<String>,
    pub tests: TestFlags,
    /// Every known score key, populated or `null`.
    pub scores: BTreeMap<String, Option<f64>>,
    pub source_files: Vec<String>,
    pub created: DateTime<Utc>,
}

impl PersistedRecord {
    /// Builds the dashboard contract from a finished record.
    #[must_use]
    pub fn from_record(
        record: &PatientRecord,
        source_files: Vec<String>,
        created: DateTime<Utc>,
    ) -> Self {
        let mut scores = BTreeMap::new();
        for field in CanonicalField::ALL {
            if !field.is_score() {
                continue;
            }
            let value = record.value(*field).and_then(FieldValue::as_number);
            scores.insert(field.key().to_string(), value);
        }
        Self {
            patient_name: record.identity.name.clone(),
            date_of_birth: record.identity.date_of_birth.clone(),
            date_of_injury: record.identity.date_of_injury.clone(),
            date_of_testing: record.identity.date_of_testing.clone(),
            tests: record.tests,
            scores,
            source_files,
            created,
        }
    }
}
