//! Report model assembly.
//!
//! Consumes the merged patient record plus the domain calculator's verdicts
//! and produces the renderable report tree. Templating (HTML fragment, PDF)
//! is the downstream rendering collaborator's job.

pub mod assemble;
pub mod model;
pub mod ordinal;

pub use assemble::{ReportOptions, assemble};
pub use model::{
    CognitiveRow, CognitiveSection, DomainVerdictRow, PatientSection, PosturographySection,
    QuestionnaireSection, ReportModel, ScoreRow, VngSection,
};
pub use ordinal::{ordinal_suffix, percentile_display};
