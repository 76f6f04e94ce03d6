//! Domain impairment verdicts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named cluster of related cognitive subtests evaluated together.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DomainName {
    Memory,
    Visuospatial,
    Reasoning,
    Attention,
    ExecutiveFunction,
}

impl DomainName {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DomainName::Memory => "Memory",
            DomainName::Visuospatial => "Visuospatial",
            DomainName::Reasoning => "Reasoning",
            DomainName::Attention => "Attention",
            DomainName::ExecutiveFunction => "Executive Function",
        }
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The calculator's determination for one domain.
///
/// `Undetermined` is a defined state, not an error, and must never be
/// conflated with `NotImpaired`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impairment {
    Impaired,
    NotImpaired,
    Undetermined,
}

impl Impairment {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Impairment::Impaired => "Impaired",
            Impairment::NotImpaired => "Not Impaired",
            Impairment::Undetermined => "Undetermined",
        }
    }
}

/// Per-domain, per-record impairment verdict.
///
/// Derived on every report generation; never persisted independently of the
/// percentile inputs it was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpairmentVerdict {
    pub domain: DomainName,
    pub impairment: Impairment,
    /// Subtests that contributed an actual (non-zero, populated) percentile.
    pub sample_size: usize,
    /// Contributing subtests strictly below the impairment threshold.
    pub below_threshold: usize,
}
