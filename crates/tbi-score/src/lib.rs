//! Domain impairment scoring.
//!
//! The calculator is pure: same record, same verdicts. The shared 2-of-N
//! rule and the single-task exception are modeled as a tagged rule set
//! selected by domain configuration rather than duplicated conditionals.

pub mod domains;
pub mod evaluate;
pub mod interpret;

pub use domains::{CognitiveDomain, DomainRule, IMPAIRMENT_THRESHOLD, cognitive_domains};
pub use evaluate::{evaluate, evaluate_all};
pub use interpret::{
    DysfunctionLevel, PercentileBand, interpret_dysfunction, interpret_percentile,
    interpret_questionnaire, questionnaire_abnormal,
};
