use thiserror::Error;

/// Batch-level failures. Per-document and per-field problems are recorded
/// as anomalies instead and never abort the batch.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("no extraction pass succeeded for any of the {documents} documents in the batch")]
    CollaboratorOutage { documents: usize },
}
