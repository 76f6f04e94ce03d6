//! The renderable report model.
//!
//! A language-agnostic tree ready for template substitution. Field values
//! carry no markup or templating syntax; the rendering collaborator owns
//! the template language.

use serde::{Deserialize, Serialize};

use tbi_model::{DomainName, Impairment};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportModel {
    pub patient: PatientSection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vng: Option<VngSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posturography: Option<PosturographySection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cognitive: Option<CognitiveSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questionnaires: Option<QuestionnaireSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientSection {
    pub name: Option<String>,
    pub date_of_birth: Option<String>,
    pub date_of_injury: Option<String>,
    pub date_of_testing: Option<String>,
    /// Whole years at assembly time, when the date of birth parses.
    pub age: Option<u32>,
}

/// A score row with its qualitative interpretation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRow {
    pub label: String,
    pub value: String,
    pub interpretation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VngSection {
    pub rows: Vec<ScoreRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PosturographySection {
    pub rows: Vec<ScoreRow>,
}

/// One cognitive subtest row. Rows are flat: the domain name repeats on
/// every row belonging to that domain, so row generation stays a simple
/// per-subtest iteration with no rowspan bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CognitiveRow {
    pub domain: String,
    pub subtest: String,
    pub percentile: String,
    pub below_threshold: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainVerdictRow {
    pub domain: DomainName,
    pub impairment: Impairment,
    pub sample_size: usize,
    pub below_threshold: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CognitiveSection {
    pub rows: Vec<CognitiveRow>,
    pub verdicts: Vec<DomainVerdictRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionnaireSection {
    pub rows: Vec<ScoreRow>,
    /// Any instrument at or above its clinical cutoff.
    pub abnormal: bool,
}
