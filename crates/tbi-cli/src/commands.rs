use std::fs;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::{info, info_span};

use tbi_cli::logging::redact_value;
use tbi_cli::sources::{EXTRACTOR_SUFFIX, JsonExtractionPass, OCR_SUFFIX, discover_documents};
use tbi_cli::store::{JsonFileStore, write_json};
use tbi_core::{ExtractionPass, RecordStore, persisted_record, process_batch};
use tbi_map::AliasTable;
use tbi_model::{CanonicalField, FieldKind, TestFamily};
use tbi_report::{ReportOptions, assemble};
use tbi_score::{DomainRule, IMPAIRMENT_THRESHOLD, cognitive_domains, evaluate_all};

use crate::cli::BatchArgs;
use crate::summary::apply_table_style;
use crate::types::{BatchResult, DocumentSummary};

pub fn run_batch(args: &BatchArgs) -> Result<BatchResult> {
    let batch_folder = &args.batch_folder;
    let batch_span = info_span!("batch", folder = %batch_folder.display());
    let _batch_guard = batch_span.enter();
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| batch_folder.join("output"));

    let documents = discover_documents(batch_folder)?;
    if documents.is_empty() {
        bail!(
            "no extraction output (*{OCR_SUFFIX}, *{EXTRACTOR_SUFFIX}) found in {}",
            batch_folder.display()
        );
    }
    // OCR first so extractor fields win the merge.
    let passes: Vec<Box<dyn ExtractionPass>> = vec![
        Box::new(JsonExtractionPass::ocr(batch_folder.clone())),
        Box::new(JsonExtractionPass::extractor(batch_folder.clone())),
    ];

    let start = Instant::now();
    let batch = process_batch(&passes, &documents, AliasTable::builtin())?;
    info!(
        document_count = batch.documents.len(),
        anomaly_count = batch.anomaly_count(),
        duration_ms = start.elapsed().as_millis(),
        "batch processed"
    );

    if !args.dry_run {
        fs::create_dir_all(&output_dir)
            .with_context(|| format!("create output directory {}", output_dir.display()))?;
    }
    let store = JsonFileStore::new(output_dir.clone());
    let options = ReportOptions {
        suppress_missing_rows: args.omit_missing_rows,
        as_of: None,
    };

    let mut summaries = Vec::new();
    let mut errors = Vec::new();
    for result in &batch.documents {
        let record = &result.outcome.record;
        info!(
            file = %result.filename,
            patient = redact_value(record.identity.name.as_deref().unwrap_or("unknown")),
            field_count = record.values.len(),
            "interpreting document"
        );
        let verdicts = evaluate_all(record);
        let report = assemble(record, &verdicts, options);
        let source_files: Vec<String> = [OCR_SUFFIX, EXTRACTOR_SUFFIX]
            .iter()
            .map(|suffix| format!("{}{suffix}", result.filename))
            .filter(|name| batch_folder.join(name).is_file())
            .collect();
        let persisted = persisted_record(record, source_files);

        let mut record_written = false;
        let mut report_written = false;
        if !args.dry_run {
            match store.store(&result.filename, &persisted) {
                Ok(()) => record_written = true,
                Err(error) => errors.push(format!("{}: {error:#}", result.filename)),
            }
            let report_path = output_dir.join(format!("{}.report.json", result.filename));
            match write_json(&report_path, &report) {
                Ok(()) => report_written = true,
                Err(error) => errors.push(format!("{}: {error:#}", result.filename)),
            }
        }
        summaries.push(DocumentSummary {
            filename: result.filename.clone(),
            vng: record.tests.vng,
            ctsib: record.tests.ctsib,
            creyos: record.tests.creyos,
            field_count: record.values.len(),
            anomalies: result.outcome.anomalies.len(),
            failed_passes: result.failed_passes.clone(),
            record_written,
            report_written,
        });
    }

    let has_failures = !errors.is_empty()
        || summaries
            .iter()
            .any(|summary| !summary.failed_passes.is_empty());
    Ok(BatchResult {
        batch_folder: batch_folder.clone(),
        output_dir,
        documents: summaries,
        errors,
        has_failures,
    })
}

pub fn run_fields() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Key", "Label", "Kind", "Family"]);
    apply_table_style(&mut table);
    for field in CanonicalField::ALL {
        table.add_row(vec![
            field.key().to_string(),
            field.label().to_string(),
            kind_label(field.kind()).to_string(),
            family_label(field.family()).to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_domains() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Domain", "Subtests", "Rule"]);
    apply_table_style(&mut table);
    for domain in cognitive_domains() {
        let subtests: Vec<&str> = domain.subtests.iter().map(|s| s.label()).collect();
        table.add_row(vec![
            domain.name.label().to_string(),
            subtests.join(", "),
            rule_label(&domain.rule, domain.subtests.len()),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn rule_label(rule: &DomainRule, subtest_count: usize) -> String {
    match rule {
        DomainRule::TwoOfN {
            min_sample,
            min_below,
        } => format!(
            "impaired when {min_below} of {subtest_count} score below the \
             {IMPAIRMENT_THRESHOLD}th percentile (needs {min_sample} results)"
        ),
        DomainRule::SingleTask => format!(
            "impaired when the single task scores below the \
             {IMPAIRMENT_THRESHOLD}th percentile"
        ),
    }
}

fn kind_label(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Numeric => "numeric",
        FieldKind::Percentile => "percentile",
        FieldKind::Text => "text",
    }
}

fn family_label(family: TestFamily) -> &'static str {
    match family {
        TestFamily::Identity => "identity",
        TestFamily::Vng => "VNG",
        TestFamily::Ctsib => "CTSIB",
        TestFamily::Creyos => "Creyos",
        TestFamily::Questionnaire => "questionnaire",
    }
}
