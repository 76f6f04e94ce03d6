//! Domain impairment evaluation.

use std::collections::BTreeMap;

use tracing::debug;

use tbi_model::{DomainName, Impairment, ImpairmentVerdict, PatientRecord};

use crate::domains::{CognitiveDomain, DomainRule, IMPAIRMENT_THRESHOLD, cognitive_domains};

/// Evaluates one domain against a record.
///
/// A subtest with a missing or exactly-zero percentile is excluded from the
/// sample: zero is the extractor's sentinel for "not administered", not a
/// true floor score. Pure function; recomputed on every report generation.
#[must_use]
pub fn evaluate(domain: &CognitiveDomain, record: &PatientRecord) -> ImpairmentVerdict {
    let samples: Vec<u8> = domain
        .subtests
        .iter()
        .filter_map(|subtest| record.percentile(*subtest))
        .filter(|p| *p > 0)
        .collect();
    let below = samples
        .iter()
        .filter(|p| **p < IMPAIRMENT_THRESHOLD)
        .count();

    let impairment = match domain.rule {
        DomainRule::TwoOfN {
            min_sample,
            min_below,
        } => {
            if samples.len() < min_sample {
                Impairment::Undetermined
            } else if below >= min_below {
                Impairment::Impaired
            } else {
                Impairment::NotImpaired
            }
        }
        DomainRule::SingleTask => {
            if samples.is_empty() {
                Impairment::Undetermined
            } else if below >= 1 {
                Impairment::Impaired
            } else {
                Impairment::NotImpaired
            }
        }
    };
    debug!(
        domain = %domain.name,
        samples = samples.len(),
        below,
        verdict = impairment.label(),
        "evaluated domain"
    );
    ImpairmentVerdict {
        domain: domain.name,
        impairment,
        sample_size: samples.len(),
        below_threshold: below,
    }
}

/// Evaluates every configured cognitive domain.
#[must_use]
pub fn evaluate_all(record: &PatientRecord) -> BTreeMap<DomainName, ImpairmentVerdict> {
    cognitive_domains()
        .iter()
        .map(|domain| (domain.name, evaluate(domain, record)))
        .collect()
}
