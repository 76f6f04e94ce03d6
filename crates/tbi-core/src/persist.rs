//! Downstream persistence seam.

use chrono::Utc;

use tbi_model::{PatientRecord, PersistedRecord};

/// Downstream persistence collaborator.
///
/// The core produces one immutable record per processed document; storage,
/// transactions, and retries are the implementor's concern.
pub trait RecordStore {
    fn store(&self, document_name: &str, record: &PersistedRecord) -> anyhow::Result<()>;
}

/// Builds the dashboard-facing persisted record for one document,
/// timestamped now.
#[must_use]
pub fn persisted_record(record: &PatientRecord, source_files: Vec<String>) -> PersistedRecord {
    PersistedRecord::from_record(record, source_files, Utc::now())
}
