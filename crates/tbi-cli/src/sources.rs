//! Extraction-output ingestion.
//!
//! Each document in a batch folder has up to two sibling JSON files: plain
//! OCR output (`<name>.ocr.json`) and structured extractor output
//! (`<name>.extract.json`), each a flat object of raw field name to scalar
//! value or `{ "value": ..., "confidence": ... }`. The OCR pass runs first
//! so extractor fields take precedence in the merge.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde_json::Value;
use tracing::warn;

use tbi_core::{DocumentInput, ExtractionPass};
use tbi_model::RawFieldSet;

pub const OCR_SUFFIX: &str = ".ocr.json";
pub const EXTRACTOR_SUFFIX: &str = ".extract.json";

/// Discovers document stems in a batch folder, sorted by name.
pub fn discover_documents(dir: &Path) -> Result<Vec<DocumentInput>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("read batch folder {}", dir.display()))?;
    let mut stems = BTreeSet::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("read batch folder {}", dir.display()))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        for suffix in [OCR_SUFFIX, EXTRACTOR_SUFFIX] {
            if let Some(stem) = name.strip_suffix(suffix) {
                if !stem.is_empty() {
                    stems.insert(stem.to_string());
                }
            }
        }
    }
    Ok(stems
        .into_iter()
        .map(DocumentInput::new)
        .collect())
}

/// An extraction pass backed by a sibling JSON file per document.
pub struct JsonExtractionPass {
    dir: PathBuf,
    suffix: &'static str,
    pass: &'static str,
}

impl JsonExtractionPass {
    #[must_use]
    pub fn ocr(dir: PathBuf) -> Self {
        Self {
            dir,
            suffix: OCR_SUFFIX,
            pass: "ocr",
        }
    }

    #[must_use]
    pub fn extractor(dir: PathBuf) -> Self {
        Self {
            dir,
            suffix: EXTRACTOR_SUFFIX,
            pass: "extractor",
        }
    }
}

impl ExtractionPass for JsonExtractionPass {
    fn name(&self) -> &str {
        self.pass
    }

    fn run(&self, document: &DocumentInput) -> Result<Option<RawFieldSet>> {
        let path = self
            .dir
            .join(format!("{}{}", document.filename, self.suffix));
        if !path.exists() {
            // Not every document goes through every pass.
            return Ok(None);
        }
        let text =
            fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        parse_field_set(self.pass, &text)
            .with_context(|| format!("parse {}", path.display()))
            .map(Some)
    }
}

/// Parses one extraction output file into a raw field set.
pub fn parse_field_set(source: &str, json: &str) -> Result<RawFieldSet> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Object(entries) = value else {
        bail!("expected a JSON object of field name to value");
    };
    let mut set = RawFieldSet::new(source);
    for (name, value) in entries {
        match value {
            Value::Null => {}
            Value::String(text) => {
                if !text.trim().is_empty() {
                    set.insert_text(name, text);
                }
            }
            Value::Number(number) => {
                if let Some(number) = number.as_f64() {
                    set.insert_number(name, number);
                }
            }
            Value::Object(inner) => {
                let confidence = inner
                    .get("confidence")
                    .and_then(Value::as_f64)
                    .map(|c| c as f32);
                match inner.get("value") {
                    Some(Value::String(text)) if !text.trim().is_empty() => {
                        set.insert_text(&name, text.clone());
                    }
                    Some(Value::Number(number)) => {
                        if let Some(number) = number.as_f64() {
                            set.insert_number(&name, number);
                        }
                    }
                    _ => {
                        warn!(field = %name, "skipping entry without a scalar value");
                        continue;
                    }
                }
                if let (Some(confidence), Some(entry)) = (confidence, set.fields.get_mut(&name)) {
                    entry.confidence = Some(confidence);
                }
            }
            Value::Bool(_) | Value::Array(_) => {
                warn!(field = %name, "skipping non-scalar extraction value");
            }
        }
    }
    Ok(set)
}
