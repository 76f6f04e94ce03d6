//! Integration tests for report assembly.

use chrono::NaiveDate;

use tbi_model::{CanonicalField, FieldValue, PatientRecord};
use tbi_report::{ReportOptions, assemble};
use tbi_score::evaluate_all;

fn percentile_record(values: &[(CanonicalField, u8)]) -> PatientRecord {
    let mut record = PatientRecord::default();
    for (field, value) in values {
        record.set(*field, FieldValue::Percentile(*value));
    }
    record
}

fn assemble_default(record: &PatientRecord) -> tbi_report::ReportModel {
    assemble(record, &evaluate_all(record), ReportOptions::default())
}

#[test]
fn posturography_section_is_omitted_without_ctsib() {
    let mut record = PatientRecord::default();
    record.set(CanonicalField::Pursuits, FieldValue::Number(40.0));

    let model = assemble_default(&record);
    assert!(model.posturography.is_none());
    assert!(model.vng.is_some());
}

#[test]
fn zero_percentile_renders_not_applicable_never_zeroth() {
    let record = percentile_record(&[
        (CanonicalField::StandardScorePercentile, 0),
        (CanonicalField::ProprioceptionScorePercentile, 12),
    ]);
    let model = assemble_default(&record);
    let section = model.posturography.unwrap();

    let standard = section
        .rows
        .iter()
        .find(|r| r.label == "Standard Score")
        .unwrap();
    assert_eq!(standard.value, "N/A");
    assert_eq!(standard.interpretation, "N/A");

    let proprioception = section
        .rows
        .iter()
        .find(|r| r.label == "Proprioception Score")
        .unwrap();
    assert_eq!(proprioception.value, "12th");
    assert_eq!(proprioception.interpretation, "Abnormal");
}

#[test]
fn row_suppression_drops_missing_percentile_rows() {
    let record = percentile_record(&[(CanonicalField::ProprioceptionScorePercentile, 12)]);
    let options = ReportOptions {
        suppress_missing_rows: true,
        ..ReportOptions::default()
    };
    let model = assemble(&record, &evaluate_all(&record), options);
    let section = model.posturography.unwrap();
    assert_eq!(section.rows.len(), 1);
    assert_eq!(section.rows[0].label, "Proprioception Score");
}

#[test]
fn cognitive_rows_are_flat_with_domain_repeated() {
    let record = percentile_record(&[
        (CanonicalField::PolygonsPercentile, 15),
        (CanonicalField::MentalRotationPercentile, 18),
        (CanonicalField::AttentionPercentile, 60),
    ]);
    let model = assemble_default(&record);
    let section = model.cognitive.unwrap();

    let visuospatial: Vec<_> = section
        .rows
        .iter()
        .filter(|r| r.domain == "Visuospatial")
        .collect();
    assert_eq!(visuospatial.len(), 2);
    assert!(visuospatial.iter().all(|r| r.below_threshold));

    // One row per subtest, never a spanning header row.
    let total_subtests: usize = tbi_score::cognitive_domains()
        .iter()
        .map(|d| d.subtests.len())
        .sum();
    assert_eq!(section.rows.len(), total_subtests);

    let visuospatial_verdict = section
        .verdicts
        .iter()
        .find(|v| v.domain == tbi_model::DomainName::Visuospatial)
        .unwrap();
    assert_eq!(
        visuospatial_verdict.impairment,
        tbi_model::Impairment::Impaired
    );
}

#[test]
fn age_is_derived_from_date_of_birth() {
    let mut record = PatientRecord::default();
    record.set(
        CanonicalField::PatientName,
        FieldValue::Text("Jane Roe".to_string()),
    );
    record.set(
        CanonicalField::DateOfBirth,
        FieldValue::Text("06/15/1990".to_string()),
    );
    let options = ReportOptions {
        as_of: NaiveDate::from_ymd_opt(2026, 6, 14),
        ..ReportOptions::default()
    };
    let model = assemble(&record, &evaluate_all(&record), options);
    // The birthday has not arrived yet in the reference year.
    assert_eq!(model.patient.age, Some(35));
    assert_eq!(model.patient.name.as_deref(), Some("Jane Roe"));
}

#[test]
fn unparseable_date_of_birth_leaves_age_absent() {
    let mut record = PatientRecord::default();
    record.set(
        CanonicalField::DateOfBirth,
        FieldValue::Text("summer of 1990".to_string()),
    );
    let model = assemble_default(&record);
    assert!(model.patient.age.is_none());
}

#[test]
fn report_model_serializes_without_absent_sections() {
    let record = percentile_record(&[(CanonicalField::StandardScorePercentile, 21)]);
    let model = assemble_default(&record);
    let json = serde_json::to_value(&model).unwrap();

    assert!(json.get("vng").is_none());
    assert!(json.get("cognitive").is_none());
    let rows = json["posturography"]["rows"].as_array().unwrap();
    assert!(
        rows.iter()
            .any(|r| r["value"] == "21st" && r["label"] == "Standard Score")
    );
}
