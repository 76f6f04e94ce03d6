//! Per-document and batch processing pipeline.
//!
//! Extraction passes are collaborator seams: the pipeline neither knows nor
//! cares whether a pass is plain OCR or a structured entity extractor, only
//! the declared precedence order in which passes run. A failed pass marks
//! the document, never the batch; the merger still produces a best-effort
//! record from whatever sets were received.

use tracing::{info_span, warn};

use tbi_map::AliasTable;
use tbi_model::{Anomaly, RawFieldSet};

use crate::error::BatchError;
use crate::merge::{MergeOutcome, merge};

/// One document in an upload batch, identified by the name the transport
/// collaborator delivered it under. Passes locate their own inputs from it.
#[derive(Debug, Clone)]
pub struct DocumentInput {
    pub filename: String,
}

impl DocumentInput {
    #[must_use]
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
        }
    }
}

/// One extraction pass over a document.
///
/// Passes run in the order given to the pipeline; the structured extractor
/// pass comes after plain OCR so its fields take precedence in the merge.
pub trait ExtractionPass {
    /// Short pass name used in logs and anomalies (e.g. "ocr", "extractor").
    fn name(&self) -> &str;

    /// Runs the pass.
    ///
    /// Returns `Ok(None)` when the pass has nothing for this document
    /// (which is not a failure), `Ok(Some(_))` on success, and an error on
    /// a collaborator failure.
    fn run(&self, document: &DocumentInput) -> anyhow::Result<Option<RawFieldSet>>;
}

/// Outcome of processing one document.
#[derive(Debug)]
pub struct DocumentResult {
    pub filename: String,
    pub outcome: MergeOutcome,
    /// Names of passes that failed for this document.
    pub failed_passes: Vec<String>,
    /// Passes that produced a field set.
    pub succeeded_passes: usize,
}

impl DocumentResult {
    /// True when at least one pass failed for this document.
    #[must_use]
    pub fn is_flagged_failed(&self) -> bool {
        !self.failed_passes.is_empty()
    }
}

/// Outcome of processing an upload batch.
#[derive(Debug)]
pub struct BatchOutcome {
    pub documents: Vec<DocumentResult>,
}

impl BatchOutcome {
    /// Total field-level anomalies across the batch.
    #[must_use]
    pub fn anomaly_count(&self) -> usize {
        self.documents.iter().map(|d| d.outcome.anomalies.len()).sum()
    }
}

/// Runs every pass over one document, in order, and merges the results.
///
/// Pass failures are recorded as collaborator-failure anomalies and the
/// document continues with the sets already received.
pub fn process_document(
    passes: &[Box<dyn ExtractionPass>],
    document: &DocumentInput,
    aliases: &AliasTable,
) -> DocumentResult {
    let span = info_span!("document", file = %document.filename);
    let _guard = span.enter();

    let mut sets: Vec<RawFieldSet> = Vec::new();
    let mut failures: Vec<Anomaly> = Vec::new();
    let mut failed_passes = Vec::new();
    for pass in passes {
        match pass.run(document) {
            Ok(Some(set)) => sets.push(set),
            Ok(None) => {}
            Err(error) => {
                warn!(pass = pass.name(), %error, "extraction pass failed");
                failed_passes.push(pass.name().to_string());
                failures.push(Anomaly::CollaboratorFailure {
                    pass: pass.name().to_string(),
                    message: format!("{error:#}"),
                });
            }
        }
    }

    let succeeded_passes = sets.len();
    let mut outcome = merge(&sets, aliases);
    outcome.anomalies.extend(failures);
    DocumentResult {
        filename: document.filename.clone(),
        outcome,
        failed_passes,
        succeeded_passes,
    }
}

/// Processes a batch of documents independently.
///
/// Per-document failures are local; the batch itself only fails when no
/// pass of any document succeeded — a total collaborator outage.
pub fn process_batch(
    passes: &[Box<dyn ExtractionPass>],
    documents: &[DocumentInput],
    aliases: &AliasTable,
) -> Result<BatchOutcome, BatchError> {
    let mut results = Vec::with_capacity(documents.len());
    for document in documents {
        results.push(process_document(passes, document, aliases));
    }
    let any_success = results.iter().any(|r| r.succeeded_passes > 0);
    if !documents.is_empty() && !any_success {
        return Err(BatchError::CollaboratorOutage {
            documents: documents.len(),
        });
    }
    Ok(BatchOutcome { documents: results })
}
