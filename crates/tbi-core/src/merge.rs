//! Record merger: ordered raw field sets in, one canonical record out.

use std::collections::BTreeMap;

use tracing::debug;

use tbi_map::AliasTable;
use tbi_model::{Anomaly, PatientRecord, RawFieldSet};

use crate::coerce::coerce;

/// Result of merging one document's extraction passes.
#[derive(Debug, Default)]
pub struct MergeOutcome {
    pub record: PatientRecord,
    /// Field-level anomalies recorded while merging; never fatal.
    pub anomalies: Vec<Anomaly>,
    /// Unrecognized raw fields, retained as display text only. These never
    /// enter the canonical value map.
    pub passthrough: BTreeMap<String, String>,
}

/// Merges the raw field sets of one document into a [`PatientRecord`].
///
/// Sets must arrive in their declared precedence order (plain OCR before the
/// structured extractor); when two sets populate the same canonical field,
/// the later set wins. This is an explicit last-writer-wins policy, not a
/// numeric merge.
#[must_use]
pub fn merge(sets: &[RawFieldSet], aliases: &AliasTable) -> MergeOutcome {
    let mut outcome = MergeOutcome::default();
    for set in sets {
        merge_set(set, aliases, &mut outcome);
    }
    debug!(
        fields = outcome.record.values.len(),
        anomalies = outcome.anomalies.len(),
        passthrough = outcome.passthrough.len(),
        "merged field sets"
    );
    outcome
}

fn merge_set(set: &RawFieldSet, aliases: &AliasTable, outcome: &mut MergeOutcome) {
    for (raw_name, entry) in &set.fields {
        let Some(field) = aliases.resolve(raw_name) else {
            outcome
                .passthrough
                .insert(raw_name.clone(), entry.value.display_text());
            outcome.anomalies.push(Anomaly::UnrecognizedField {
                raw_name: raw_name.clone(),
                source: set.source.clone(),
            });
            continue;
        };
        match coerce(field.kind(), &entry.value) {
            Some(value) => outcome.record.set(field, value),
            None => outcome.anomalies.push(Anomaly::TypeCoercionFailure {
                field,
                raw_value: entry.value.display_text(),
                source: set.source.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use tbi_model::CanonicalField;

    use super::*;

    fn set(source: &str, fields: &[(&str, &str)]) -> RawFieldSet {
        let mut out = RawFieldSet::new(source);
        for (name, value) in fields {
            out.insert_text(*name, *value);
        }
        out
    }

    #[test]
    fn later_set_wins_per_field() {
        let ocr = set("ocr", &[("standard score percentile", "34")]);
        let extractor = set("extractor", &[("standard score percentile", "41")]);
        let outcome = merge(&[ocr, extractor], AliasTable::builtin());
        assert_eq!(
            outcome
                .record
                .percentile(CanonicalField::StandardScorePercentile),
            Some(41)
        );
    }

    #[test]
    fn coercion_failure_drops_field_and_records_anomaly() {
        let only = set("extractor", &[("standard score percentile", "n/a")]);
        let outcome = merge(&[only], AliasTable::builtin());
        assert!(outcome.record.is_empty());
        assert!(matches!(
            outcome.anomalies.as_slice(),
            [Anomaly::TypeCoercionFailure { .. }]
        ));
    }

    #[test]
    fn unrecognized_fields_stay_out_of_the_record() {
        let only = set("ocr", &[("operator initials", "AB")]);
        let outcome = merge(&[only], AliasTable::builtin());
        assert!(outcome.record.is_empty());
        assert_eq!(
            outcome.passthrough.get("operator initials").map(String::as_str),
            Some("AB")
        );
        assert!(matches!(
            outcome.anomalies.as_slice(),
            [Anomaly::UnrecognizedField { .. }]
        ));
    }

    #[test]
    fn family_flags_require_a_populated_field() {
        let only = set(
            "extractor",
            &[("pursuits score", "40"), ("rpq score", "12")],
        );
        let outcome = merge(&[only], AliasTable::builtin());
        assert!(outcome.record.tests.vng);
        assert!(outcome.record.tests.creyos);
        assert!(!outcome.record.tests.ctsib);
    }
}
