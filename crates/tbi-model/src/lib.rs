//! Data model for the TBI assessment interpretation engine.
//!
//! Pure data types shared by every stage of the pipeline: the canonical
//! field inventory, raw extraction output, the merged patient record,
//! impairment verdicts, anomalies, and the persisted dashboard contract.

pub mod anomaly;
pub mod error;
pub mod fields;
pub mod persist;
pub mod record;
pub mod verdict;

pub use anomaly::Anomaly;
pub use error::{ModelError, Result};
pub use fields::{CanonicalField, FieldKind, TestFamily};
pub use persist::PersistedRecord;
pub use record::{
    FieldValue, PatientIdentity, PatientRecord, RawEntry, RawFieldSet, RawValue, TestFlags,
};
pub use verdict::{DomainName, Impairment, ImpairmentVerdict};

/// Formats a floating-point number without trailing zeros.
#[must_use]
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_numeric_strips_trailing_zeros() {
        assert_eq!(format_numeric(10.0), "10");
        assert_eq!(format_numeric(10.50), "10.5");
        assert_eq!(format_numeric(0.0), "0");
    }
}
