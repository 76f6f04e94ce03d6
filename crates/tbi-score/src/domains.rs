//! Cognitive domain configuration.
//!
//! Static configuration, not per-record state: each domain names its member
//! subtests and the rule used to evaluate them.

use tbi_model::{CanonicalField, DomainName};

/// How a domain's subtest percentiles are turned into a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainRule {
    /// Impaired iff at least `min_below` of the actual results fall strictly
    /// below the threshold; fewer than `min_sample` actual results is
    /// undetermined.
    TwoOfN { min_sample: usize, min_below: usize },
    /// Single-subtest domains: impaired iff the one actual result falls
    /// below the threshold. Documented exception for Attention, which has
    /// exactly one member by configuration.
    SingleTask,
}

/// A named cluster of related cognitive subtests evaluated together.
#[derive(Debug, Clone, Copy)]
pub struct CognitiveDomain {
    pub name: DomainName,
    pub subtests: &'static [CanonicalField],
    pub rule: DomainRule,
}

/// Percentile rank below which a subtest counts toward impairment.
pub const IMPAIRMENT_THRESHOLD: u8 = 20;

const GENERAL_RULE: DomainRule = DomainRule::TwoOfN {
    min_sample: 2,
    min_below: 2,
};

const DOMAINS: &[CognitiveDomain] = &[
    CognitiveDomain {
        name: DomainName::Memory,
        subtests: &[
            CanonicalField::VisuospatialWorkingMemoryPercentile,
            CanonicalField::WorkingMemoryPercentile,
            CanonicalField::SpatialShortTermMemoryPercentile,
            CanonicalField::VerbalShortTermMemoryPercentile,
            CanonicalField::EpisodicMemoryPercentile,
        ],
        rule: GENERAL_RULE,
    },
    CognitiveDomain {
        name: DomainName::Visuospatial,
        subtests: &[
            CanonicalField::PolygonsPercentile,
            CanonicalField::MentalRotationPercentile,
        ],
        rule: GENERAL_RULE,
    },
    CognitiveDomain {
        name: DomainName::Reasoning,
        subtests: &[
            CanonicalField::DeductiveReasoningPercentile,
            CanonicalField::VerbalReasoningPercentile,
        ],
        rule: GENERAL_RULE,
    },
    CognitiveDomain {
        name: DomainName::Attention,
        subtests: &[CanonicalField::AttentionPercentile],
        rule: DomainRule::SingleTask,
    },
    CognitiveDomain {
        name: DomainName::ExecutiveFunction,
        subtests: &[
            CanonicalField::PlanningPercentile,
            CanonicalField::ResponseInhibitionPercentile,
        ],
        rule: GENERAL_RULE,
    },
];

/// The fixed cognitive domain configuration.
#[must_use]
pub fn cognitive_domains() -> &'static [CognitiveDomain] {
    DOMAINS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attention_is_the_only_single_task_domain() {
        for domain in cognitive_domains() {
            match domain.name {
                DomainName::Attention => {
                    assert_eq!(domain.rule, DomainRule::SingleTask);
                    assert_eq!(domain.subtests.len(), 1);
                }
                _ => {
                    assert_eq!(domain.rule, GENERAL_RULE);
                    assert!(domain.subtests.len() >= 2);
                }
            }
        }
    }

    #[test]
    fn every_domain_member_is_a_creyos_percentile() {
        for domain in cognitive_domains() {
            for subtest in domain.subtests {
                assert_eq!(subtest.family(), tbi_model::TestFamily::Creyos);
                assert_eq!(subtest.kind(), tbi_model::FieldKind::Percentile);
            }
        }
    }
}
