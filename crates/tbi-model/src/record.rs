//! Raw extraction output and the canonical patient record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::fields::{CanonicalField, TestFamily};

/// A raw value as reported by an extraction pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Renders the raw value as display text, for passthrough retention.
    #[must_use]
    pub fn display_text(&self) -> String {
        match self {
            RawValue::Number(n) => crate::format_numeric(*n),
            RawValue::Text(s) => s.clone(),
        }
    }
}

/// One extracted field: value plus the extractor's confidence, if reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEntry {
    pub value: RawValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

/// Output of one extraction pass over one document.
///
/// Immutable after creation; the merger consumes sets in their declared
/// precedence order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawFieldSet {
    /// Name of the pass that produced this set (e.g. "ocr", "extractor").
    pub source: String,
    pub fields: BTreeMap<String, RawEntry>,
}

impl RawFieldSet {
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn insert_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(
            name.into(),
            RawEntry {
                value: RawValue::Text(value.into()),
                confidence: None,
            },
        );
    }

    pub fn insert_number(&mut self, name: impl Into<String>, value: f64) {
        self.fields.insert(
            name.into(),
            RawEntry {
                value: RawValue::Number(value),
                confidence: None,
            },
        );
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A coerced canonical field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Percentile(u8),
    Text(String),
}

impl FieldValue {
    /// Validated percentile constructor.
    pub fn percentile(value: f64) -> Result<Self, ModelError> {
        if !(0.0..=100.0).contains(&value) || value.fract() != 0.0 {
            return Err(ModelError::PercentileOutOfRange(value));
        }
        Ok(FieldValue::Percentile(value as u8))
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Percentile(p) => Some(f64::from(*p)),
            FieldValue::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_percentile(&self) -> Option<u8> {
        match self {
            FieldValue::Percentile(p) => Some(*p),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Patient identity extracted from the documents.
///
/// Dates are retained as the free text the documents carried (MM/DD/YYYY in
/// practice); derivations such as age happen at report assembly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientIdentity {
    pub name: Option<String>,
    pub date_of_birth: Option<String>,
    pub date_of_injury: Option<String>,
    pub date_of_testing: Option<String>,
}

/// Which test families contributed at least one populated field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestFlags {
    pub vng: bool,
    pub ctsib: bool,
    pub creyos: bool,
}

/// The canonical per-document patient record.
///
/// Built once by the record merger and read-only thereafter. Absent map
/// entries mean the subtest was not administered or not extracted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientRecord {
    pub identity: PatientIdentity,
    pub values: BTreeMap<CanonicalField, FieldValue>,
    pub tests: TestFlags,
}

impl PatientRecord {
    #[must_use]
    pub fn value(&self, field: CanonicalField) -> Option<&FieldValue> {
        self.values.get(&field)
    }

    #[must_use]
    pub fn number(&self, field: CanonicalField) -> Option<f64> {
        self.values.get(&field).and_then(FieldValue::as_number)
    }

    #[must_use]
    pub fn percentile(&self, field: CanonicalField) -> Option<u8> {
        self.values.get(&field).and_then(FieldValue::as_percentile)
    }

    /// Sets a coerced value and updates the test-family flags.
    pub fn set(&mut self, field: CanonicalField, value: FieldValue) {
        match field.family() {
            TestFamily::Identity => self.set_identity(field, &value),
            TestFamily::Vng => self.tests.vng = true,
            TestFamily::Ctsib => self.tests.ctsib = true,
            // Questionnaires ship with the Creyos battery packet, so both
            // families raise the same presence flag.
            TestFamily::Creyos | TestFamily::Questionnaire => self.tests.creyos = true,
        }
        self.values.insert(field, value);
    }

    fn set_identity(&mut self, field: CanonicalField, value: &FieldValue) {
        let Some(text) = value.as_text() else {
            return;
        };
        let slot = match field {
            CanonicalField::PatientName => &mut self.identity.name,
            CanonicalField::DateOfBirth => &mut self.identity.date_of_birth,
            CanonicalField::DateOfInjury => &mut self.identity.date_of_injury,
            CanonicalField::DateOfTesting => &mut self.identity.date_of_testing,
            _ => return,
        };
        *slot = Some(text.to_string());
    }

    /// True when no field of any family was populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_raises_family_flags() {
        let mut record = PatientRecord::default();
        assert_eq!(record.tests, TestFlags::default());

        record.set(CanonicalField::Pursuits, FieldValue::Number(40.0));
        assert!(record.tests.vng);
        assert!(!record.tests.ctsib);

        record.set(CanonicalField::Rpq, FieldValue::Number(12.0));
        assert!(record.tests.creyos);
    }

    #[test]
    fn identity_fields_populate_identity_not_flags() {
        let mut record = PatientRecord::default();
        record.set(
            CanonicalField::PatientName,
            FieldValue::Text("Jane Roe".to_string()),
        );
        assert_eq!(record.identity.name.as_deref(), Some("Jane Roe"));
        assert_eq!(record.tests, TestFlags::default());
    }

    #[test]
    fn percentile_constructor_rejects_out_of_range() {
        assert!(FieldValue::percentile(101.0).is_err());
        assert!(FieldValue::percentile(-1.0).is_err());
        assert!(FieldValue::percentile(12.5).is_err());
        assert_eq!(
            FieldValue::percentile(12.0).unwrap(),
            FieldValue::Percentile(12)
        );
    }
}
