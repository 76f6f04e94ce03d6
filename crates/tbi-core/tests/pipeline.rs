//! Integration tests for the document pipeline and batch semantics.

use anyhow::anyhow;

use tbi_core::{BatchError, DocumentInput, ExtractionPass, process_batch, process_document};
use tbi_map::AliasTable;
use tbi_model::{Anomaly, CanonicalField, RawFieldSet};

struct FixedPass {
    name: &'static str,
    fields: Vec<(&'static str, &'static str)>,
}

impl ExtractionPass for FixedPass {
    fn name(&self) -> &str {
        self.name
    }

    fn run(&self, _document: &DocumentInput) -> anyhow::Result<Option<RawFieldSet>> {
        let mut set = RawFieldSet::new(self.name);
        for (name, value) in &self.fields {
            set.insert_text(*name, *value);
        }
        Ok(Some(set))
    }
}

struct FailingPass;

impl ExtractionPass for FailingPass {
    fn name(&self) -> &str {
        "ocr"
    }

    fn run(&self, _document: &DocumentInput) -> anyhow::Result<Option<RawFieldSet>> {
        Err(anyhow!("processor unreachable"))
    }
}

fn doc(name: &str) -> DocumentInput {
    DocumentInput::new(name)
}

#[test]
fn failed_document_still_yields_an_empty_record() {
    let passes: Vec<Box<dyn ExtractionPass>> = vec![Box::new(FailingPass)];
    let result = process_document(&passes, &doc("ctsib.pdf"), AliasTable::builtin());

    assert!(result.is_flagged_failed());
    assert_eq!(result.succeeded_passes, 0);
    assert!(result.outcome.record.is_empty());
    assert!(!result.outcome.record.tests.vng);
    assert!(!result.outcome.record.tests.ctsib);
    assert!(!result.outcome.record.tests.creyos);
    assert!(matches!(
        result.outcome.anomalies.as_slice(),
        [Anomaly::CollaboratorFailure { .. }]
    ));
}

#[test]
fn failed_pass_does_not_discard_the_surviving_pass() {
    let passes: Vec<Box<dyn ExtractionPass>> = vec![
        Box::new(FailingPass),
        Box::new(FixedPass {
            name: "extractor",
            fields: vec![("rpq score", "18")],
        }),
    ];
    let result = process_document(&passes, &doc("creyos.pdf"), AliasTable::builtin());

    assert!(result.is_flagged_failed());
    assert_eq!(result.succeeded_passes, 1);
    assert_eq!(result.outcome.record.number(CanonicalField::Rpq), Some(18.0));
}

#[test]
fn total_outage_fails_the_batch() {
    let passes: Vec<Box<dyn ExtractionPass>> = vec![Box::new(FailingPass)];
    let documents = vec![doc("a.pdf"), doc("b.pdf")];
    let error = process_batch(&passes, &documents, AliasTable::builtin()).unwrap_err();
    assert!(matches!(
        error,
        BatchError::CollaboratorOutage { documents: 2 }
    ));
}

#[test]
fn partial_outage_keeps_the_batch_alive() {
    let passes: Vec<Box<dyn ExtractionPass>> = vec![Box::new(FixedPass {
        name: "extractor",
        fields: vec![("pursuits score", "40")],
    })];
    let documents = vec![doc("righteye.pdf")];
    let outcome = process_batch(&passes, &documents, AliasTable::builtin()).unwrap();
    assert_eq!(outcome.documents.len(), 1);
    assert!(outcome.documents[0].outcome.record.tests.vng);
}

// End-to-end regression for the CTSIB ambiguity: the percentile shows up as
// a percentile and the path length never masquerades as one.
#[test]
fn ctsib_percentile_and_path_length_keep_their_identities() {
    let passes: Vec<Box<dyn ExtractionPass>> = vec![Box::new(FixedPass {
        name: "extractor",
        fields: vec![
            ("proprioception percentile", "12"),
            ("proprioception path length", "53"),
        ],
    })];
    let result = process_document(&passes, &doc("ctsib.pdf"), AliasTable::builtin());
    let record = &result.outcome.record;

    assert_eq!(
        record.percentile(CanonicalField::ProprioceptionScorePercentile),
        Some(12)
    );
    assert_eq!(
        record.number(CanonicalField::ProprioceptionPathLength),
        Some(53.0)
    );
    assert!(record.tests.ctsib);
}
