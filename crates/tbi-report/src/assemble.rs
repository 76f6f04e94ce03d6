//! Report assembly from a merged record and its domain verdicts.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Utc};
use tracing::debug;

use tbi_model::{
    CanonicalField, DomainName, FieldValue, ImpairmentVerdict, PatientRecord, format_numeric,
};
use tbi_score::{
    IMPAIRMENT_THRESHOLD, cognitive_domains, interpret_dysfunction, interpret_percentile,
    interpret_questionnaire, questionnaire_abnormal,
};

use crate::model::{
    CognitiveRow, CognitiveSection, DomainVerdictRow, PatientSection, PosturographySection,
    QuestionnaireSection, ReportModel, ScoreRow, VngSection,
};
use crate::ordinal::percentile_display;

/// Assembly options.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Drop rows whose percentile is absent or zero instead of rendering
    /// an "N/A" row. Layout-dependent; off by default.
    pub suppress_missing_rows: bool,
    /// Reference date for age derivation. Defaults to today.
    pub as_of: Option<NaiveDate>,
}

const VNG_FIELDS: &[CanonicalField] = &[
    CanonicalField::Pursuits,
    CanonicalField::Saccades,
    CanonicalField::Fixations,
    CanonicalField::DysfunctionalScale,
];

const POSTUROGRAPHY_FIELDS: &[CanonicalField] = &[
    CanonicalField::StandardScorePercentile,
    CanonicalField::ProprioceptionScorePercentile,
    CanonicalField::VisualScorePercentile,
    CanonicalField::VestibularScorePercentile,
];

const QUESTIONNAIRE_FIELDS: &[CanonicalField] = &[
    CanonicalField::Rpq,
    CanonicalField::Pcl5,
    CanonicalField::Psqi,
    CanonicalField::Phq9,
    CanonicalField::Gad7,
];

/// Builds the renderable report model.
///
/// Sections for absent test families are omitted entirely, never rendered
/// empty. Performs no text templating.
#[must_use]
pub fn assemble(
    record: &PatientRecord,
    verdicts: &BTreeMap<DomainName, ImpairmentVerdict>,
    options: ReportOptions,
) -> ReportModel {
    let model = ReportModel {
        patient: patient_section(record, options),
        vng: vng_section(record),
        posturography: posturography_section(record, options),
        cognitive: cognitive_section(record, verdicts, options),
        questionnaires: questionnaire_section(record),
    };
    debug!(
        vng = model.vng.is_some(),
        posturography = model.posturography.is_some(),
        cognitive = model.cognitive.is_some(),
        questionnaires = model.questionnaires.is_some(),
        "assembled report model"
    );
    model
}

fn patient_section(record: &PatientRecord, options: ReportOptions) -> PatientSection {
    let as_of = options
        .as_of
        .unwrap_or_else(|| Utc::now().date_naive());
    let age = record
        .identity
        .date_of_birth
        .as_deref()
        .and_then(|dob| age_on(dob, as_of));
    PatientSection {
        name: record.identity.name.clone(),
        date_of_birth: record.identity.date_of_birth.clone(),
        date_of_injury: record.identity.date_of_injury.clone(),
        date_of_testing: record.identity.date_of_testing.clone(),
        age,
    }
}

/// Whole years between a MM/DD/YYYY date of birth and the reference date.
fn age_on(date_of_birth: &str, as_of: NaiveDate) -> Option<u32> {
    let dob = NaiveDate::parse_from_str(date_of_birth.trim(), "%m/%d/%Y").ok()?;
    if dob > as_of {
        return None;
    }
    let mut years = as_of.year() - dob.year();
    if (as_of.month(), as_of.day()) < (dob.month(), dob.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}

fn vng_section(record: &PatientRecord) -> Option<VngSection> {
    if !record.tests.vng {
        return None;
    }
    let rows = VNG_FIELDS
        .iter()
        .map(|field| {
            let (value, interpretation) = match record.number(*field) {
                Some(score) => (
                    format_numeric(score),
                    interpret_dysfunction(score).label().to_string(),
                ),
                None => ("N/A".to_string(), "N/A".to_string()),
            };
            ScoreRow {
                label: field.label().to_string(),
                value,
                interpretation,
            }
        })
        .collect();
    Some(VngSection { rows })
}

fn posturography_section(
    record: &PatientRecord,
    options: ReportOptions,
) -> Option<PosturographySection> {
    // Omitted, not rendered empty, when the CTSIB family is absent.
    if !record.tests.ctsib {
        return None;
    }
    let mut rows = Vec::new();
    for field in POSTUROGRAPHY_FIELDS {
        let percentile = record.percentile(*field).filter(|p| *p > 0);
        if percentile.is_none() && options.suppress_missing_rows {
            continue;
        }
        let interpretation = match percentile {
            Some(p) => interpret_percentile(p).label().to_string(),
            None => "N/A".to_string(),
        };
        rows.push(ScoreRow {
            label: field.label().to_string(),
            value: percentile_display(percentile),
            interpretation,
        });
    }
    Some(PosturographySection { rows })
}

fn cognitive_section(
    record: &PatientRecord,
    verdicts: &BTreeMap<DomainName, ImpairmentVerdict>,
    options: ReportOptions,
) -> Option<CognitiveSection> {
    let any_present = cognitive_domains()
        .iter()
        .flat_map(|d| d.subtests)
        .any(|subtest| record.percentile(*subtest).is_some_and(|p| p > 0));
    if !any_present {
        return None;
    }

    let mut rows = Vec::new();
    for domain in cognitive_domains() {
        for subtest in domain.subtests {
            let percentile = record.percentile(*subtest).filter(|p| *p > 0);
            if percentile.is_none() && options.suppress_missing_rows {
                continue;
            }
            rows.push(CognitiveRow {
                domain: domain.name.label().to_string(),
                subtest: subtest.label().to_string(),
                percentile: percentile_display(percentile),
                below_threshold: percentile.is_some_and(|p| p < IMPAIRMENT_THRESHOLD),
            });
        }
    }
    let verdict_rows = verdicts
        .values()
        .map(|verdict| DomainVerdictRow {
            domain: verdict.domain,
            impairment: verdict.impairment,
            sample_size: verdict.sample_size,
            below_threshold: verdict.below_threshold,
        })
        .collect();
    Some(CognitiveSection {
        rows,
        verdicts: verdict_rows,
    })
}

fn questionnaire_section(record: &PatientRecord) -> Option<QuestionnaireSection> {
    let any_present = QUESTIONNAIRE_FIELDS
        .iter()
        .any(|field| record.value(*field).is_some());
    if !any_present {
        return None;
    }
    let rows = QUESTIONNAIRE_FIELDS
        .iter()
        .filter_map(|field| {
            let score = record.value(*field).and_then(FieldValue::as_number)?;
            Some(ScoreRow {
                label: field.label().to_string(),
                value: format_numeric(score),
                interpretation: interpret_questionnaire(*field, score)
                    .unwrap_or_default()
                    .to_string(),
            })
        })
        .collect();
    Some(QuestionnaireSection {
        rows,
        abnormal: questionnaire_abnormal(record),
    })
}
